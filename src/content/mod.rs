//! Question-bank loading for the non-composition quiz modes.
//!
//! Each mode reads a static JSON bank and validates it up front:
//! - **Jamo bank**: level-1 letter-name drills over consonant/vowel pools
//! - **Emoji vocab**: emoji-to-Korean vocabulary rounds
//! - **Word quiz**: numbered sentence questions with four options
//! - **Image quiz**: photo questions grouped by category
//! - **Interview**: interview-prep flashcards
//! - **Speech**: spoken-word rounds over a TSV clip-to-word map
//!
//! Answer fields arrive in several historical JSON shapes; they are
//! normalized once at load time (see [`answer`]), never inspected at quiz
//! time.

pub mod answer;
pub mod image_quiz;
pub mod interview;
pub mod jamo_bank;
pub mod speech;
pub mod vocab;
pub mod word_quiz;

pub use answer::{AnswerError, AnswerField};
pub use image_quiz::{ImageQuizCategory, ImageQuizItem, load_image_quiz};
pub use interview::{InterviewCard, load_interview_cards};
pub use jamo_bank::{JamoBank, JamoBankItem, JamoPool, load_jamo_bank};
pub use speech::{SPEECH_QUIZ_COUNT, TtsEntry, load_tts_map};
pub use vocab::{EmojiVocabItem, load_emoji_vocab};
pub use word_quiz::{WordQuizItem, load_word_quiz};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

/// Error loading a question bank.
#[derive(Debug)]
pub enum BankError {
    IoError(String),
    ParseError(String),
    InvalidItem(String),
}

impl std::fmt::Display for BankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankError::IoError(e) => write!(f, "IO error: {}", e),
            BankError::ParseError(e) => write!(f, "Parse error: {}", e),
            BankError::InvalidItem(e) => write!(f, "Invalid item: {}", e),
        }
    }
}

impl std::error::Error for BankError {}

/// Read and deserialize a whole JSON bank file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, BankError> {
    let content = fs::read_to_string(path).map_err(|e| BankError::IoError(e.to_string()))?;
    serde_json::from_str(&content)
        .map_err(|e| BankError::ParseError(format!("{}: {}", path.display(), e)))
}
