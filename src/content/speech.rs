//! Spoken-word quiz bank: the TTS word map.
//!
//! The bank is a TSV file mapping audio clip ids to Korean words
//! (`001\t다람쥐`). A round plays the clip for one entry and asks the
//! learner to pick its word from 4 choices; the wrong choices are other
//! entries from the map.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz::shuffle::shuffle_with;

use super::BankError;

/// Questions per quiz run.
pub const SPEECH_QUIZ_COUNT: usize = 15;

/// A 4-way round needs 1 correct + 3 wrong entries.
const MIN_ENTRIES: usize = 4;

/// One word-map entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsEntry {
    /// Audio clip id, e.g. "001"
    pub id: String,
    /// The spoken Korean word
    pub word: String,
}

impl TtsEntry {
    /// File name of the clip within the TTS audio directory.
    pub fn audio_file(&self) -> String {
        format!("{}.mp3", self.id)
    }
}

/// Load and validate a TTS word map.
///
/// The first line is a header and is skipped. Lines with fewer than two
/// tab-separated fields are skipped with a warning; extra fields are
/// ignored. A map with fewer than 4 usable entries cannot form a round
/// and is rejected.
pub fn load_tts_map(path: &Path) -> Result<Vec<TtsEntry>, BankError> {
    let content = fs::read_to_string(path).map_err(|e| BankError::IoError(e.to_string()))?;

    let mut entries = Vec::new();
    for (line_no, line) in content.trim().lines().enumerate() {
        if line_no == 0 {
            continue; // header
        }
        let mut parts = line.split('\t');
        let (id, word) = match (parts.next(), parts.next()) {
            (Some(id), Some(word)) => (id.trim(), word.trim()),
            _ => {
                tracing::warn!("tts map line {} has fewer than 2 fields, skipping", line_no + 1);
                continue;
            }
        };
        if id.is_empty() {
            return Err(BankError::InvalidItem(format!(
                "tts map line {} has an empty id",
                line_no + 1
            )));
        }
        if word.is_empty() {
            return Err(BankError::InvalidItem(format!("tts map entry {} has an empty word", id)));
        }
        entries.push(TtsEntry { id: id.to_string(), word: word.to_string() });
    }

    if entries.len() < MIN_ENTRIES {
        return Err(BankError::InvalidItem(format!(
            "tts map has {} entries, need at least {}",
            entries.len(),
            MIN_ENTRIES
        )));
    }

    Ok(entries)
}

/// Entry indexes for one quiz run: shuffled, capped at `count`.
pub fn quiz_order_with<R: Rng + ?Sized>(
    entries: &[TtsEntry],
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    let order: Vec<usize> = (0..entries.len()).collect();
    let mut order = shuffle_with(&order, rng);
    order.truncate(count);
    order
}

/// Assemble a shuffled 4-way round for the entry at `current_index`:
/// the correct word plus 3 others from the map.
pub fn choice_round_with<R: Rng + ?Sized>(
    entries: &[TtsEntry],
    current_index: usize,
    rng: &mut R,
) -> Vec<TtsEntry> {
    let wrong_pool: Vec<TtsEntry> = entries
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != current_index)
        .map(|(_, entry)| entry.clone())
        .collect();
    let mut wrongs = shuffle_with(&wrong_pool, rng);
    wrongs.truncate(MIN_ENTRIES - 1);

    let mut choices = vec![entries[current_index].clone()];
    choices.extend(wrongs);
    shuffle_with(&choices, rng)
}
