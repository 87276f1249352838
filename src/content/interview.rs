//! Interview-prep flashcard bank.
//!
//! Cards carry a spoken prompt, a sample Korean answer and the key phrases
//! the learner should reach for. Decks are presented in shuffled order.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz::shuffle::shuffle_with;

use super::{BankError, read_json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewExtra {
    #[serde(rename = "sampleAnswerKo")]
    pub sample_answer_ko: String,
    #[serde(rename = "keyPhrases", default)]
    pub key_phrases: Vec<String>,
}

/// One interview flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewCard {
    pub id: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub level: u8,
    /// Topic module, e.g. "self-introduction"
    pub module: String,
    /// The interview question shown to the learner
    pub prompt: String,
    /// Text sent to speech synthesis
    pub tts: String,
    pub extra: InterviewExtra,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Load an interview flashcard bank.
pub fn load_interview_cards(path: &Path) -> Result<Vec<InterviewCard>, BankError> {
    let cards: Vec<InterviewCard> = read_json(path)?;

    for card in &cards {
        if card.id.is_empty() {
            return Err(BankError::InvalidItem("interview card missing id".to_string()));
        }
        if card.prompt.is_empty() {
            return Err(BankError::InvalidItem(format!("interview card {} has empty prompt", card.id)));
        }
    }

    Ok(cards)
}

/// Cards at one difficulty level, in bank order.
pub fn cards_at_level(cards: &[InterviewCard], level: u8) -> Vec<InterviewCard> {
    cards.iter().filter(|card| card.level == level).cloned().collect()
}

/// A full deck in shuffled presentation order.
pub fn shuffled_deck_with<R: Rng + ?Sized>(
    cards: &[InterviewCard],
    rng: &mut R,
) -> Vec<InterviewCard> {
    shuffle_with(cards, rng)
}
