//! Level-1 jamo bank: "what is this letter called?" drills.
//!
//! The bank carries consonant and vowel pools (glyph, Korean letter name,
//! English gloss) plus the question items. Wrong choices for an item are
//! other letter names from the same pool.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::jamo::{is_valid_initial, is_valid_medial};
use crate::quiz::shuffle::shuffle_with;

use super::{BankError, read_json};

/// Bank-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JamoBankMeta {
    pub version: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Choices shown per question (answer included)
    #[serde(rename = "choicesCount")]
    pub choices_count: usize,
}

/// One pool entry: a letter with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JamoPoolEntry {
    pub glyph: String,
    /// Korean letter name, e.g. "기역"
    pub name: String,
    /// English gloss of the name
    pub en: String,
}

/// Which pool an item draws its choices from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JamoPool {
    Consonant,
    Vowel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JamoPools {
    pub consonant: Vec<JamoPoolEntry>,
    pub vowel: Vec<JamoPoolEntry>,
}

/// A level-1 question: name the shown letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JamoBankItem {
    pub id: String,
    pub pool: JamoPool,
    pub glyph: String,
    /// The letter name, present in the item's pool
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JamoBank {
    pub meta: JamoBankMeta,
    pub pools: JamoPools,
    pub items: Vec<JamoBankItem>,
}

impl JamoBank {
    pub fn pool_entries(&self, pool: JamoPool) -> &[JamoPoolEntry] {
        match pool {
            JamoPool::Consonant => &self.pools.consonant,
            JamoPool::Vowel => &self.pools.vowel,
        }
    }

    /// Assemble the shuffled choice list for one item: the correct name plus
    /// `choicesCount - 1` other names from the item's pool.
    pub fn choices_with<R: Rng + ?Sized>(&self, item: &JamoBankItem, rng: &mut R) -> Vec<String> {
        let pool = self.pool_entries(item.pool);
        let wrong_names: Vec<String> = pool
            .iter()
            .filter(|entry| entry.name != item.answer)
            .map(|entry| entry.name.clone())
            .collect();

        let mut wrong = shuffle_with(&wrong_names, rng);
        wrong.truncate(self.meta.choices_count.saturating_sub(1));

        let mut choices = vec![item.answer.clone()];
        choices.extend(wrong);
        shuffle_with(&choices, rng)
    }

    /// Item indexes in shuffled presentation order.
    pub fn shuffled_order_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let order: Vec<usize> = (0..self.items.len()).collect();
        shuffle_with(&order, rng)
    }
}

/// Load and validate a jamo bank.
///
/// Every item's answer must exist in its pool; that is a hard error. A pool
/// glyph that is not a known jamo is only logged, since pools may carry
/// display variants.
pub fn load_jamo_bank(path: &Path) -> Result<JamoBank, BankError> {
    let bank: JamoBank = read_json(path)?;

    if bank.meta.choices_count < 2 {
        return Err(BankError::InvalidItem(format!(
            "jamo bank choicesCount {} is too small",
            bank.meta.choices_count
        )));
    }

    for entry in &bank.pools.consonant {
        if !is_valid_initial(&entry.glyph) {
            tracing::warn!("jamo bank consonant pool glyph {:?} is not an initial", entry.glyph);
        }
    }
    for entry in &bank.pools.vowel {
        if !is_valid_medial(&entry.glyph) {
            tracing::warn!("jamo bank vowel pool glyph {:?} is not a medial", entry.glyph);
        }
    }

    for item in &bank.items {
        if item.id.is_empty() {
            return Err(BankError::InvalidItem("jamo bank item missing id".to_string()));
        }
        let pool = bank.pool_entries(item.pool);
        if !pool.iter().any(|entry| entry.name == item.answer) {
            return Err(BankError::InvalidItem(format!(
                "jamo bank item {}: answer {:?} not in its pool",
                item.id, item.answer
            )));
        }
    }

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    const BANK: &str = r#"{
        "meta": {"version": "1.0", "mode": "jamo", "type": "multiple-choice", "choicesCount": 4},
        "pools": {
            "consonant": [
                {"glyph": "ㄱ", "name": "기역", "en": "giyeok"},
                {"glyph": "ㄴ", "name": "니은", "en": "nieun"},
                {"glyph": "ㄷ", "name": "디귿", "en": "digeut"},
                {"glyph": "ㄹ", "name": "리을", "en": "rieul"},
                {"glyph": "ㅁ", "name": "미음", "en": "mieum"}
            ],
            "vowel": [
                {"glyph": "ㅏ", "name": "아", "en": "a"},
                {"glyph": "ㅓ", "name": "어", "en": "eo"},
                {"glyph": "ㅗ", "name": "오", "en": "o"},
                {"glyph": "ㅜ", "name": "우", "en": "u"}
            ]
        },
        "items": [
            {"id": "j-1", "pool": "consonant", "glyph": "ㄱ", "answer": "기역"},
            {"id": "j-2", "pool": "vowel", "glyph": "ㅏ", "answer": "아"}
        ]
    }"#;

    fn write_bank(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jamo_quiz.json");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_valid_bank() {
        let (_dir, path) = write_bank(BANK);
        let bank = load_jamo_bank(&path).unwrap();
        assert_eq!(bank.meta.choices_count, 4);
        assert_eq!(bank.pools.consonant.len(), 5);
        assert_eq!(bank.items.len(), 2);
        assert_eq!(bank.items[0].pool, JamoPool::Consonant);
    }

    #[test]
    fn test_answer_missing_from_pool_rejected() {
        let bad = BANK.replace("\"answer\": \"기역\"", "\"answer\": \"없는이름\"");
        let (_dir, path) = write_bank(&bad);
        let err = load_jamo_bank(&path).unwrap_err();
        assert!(matches!(err, BankError::InvalidItem(msg) if msg.contains("j-1")));
    }

    #[test]
    fn test_missing_id_rejected() {
        let bad = BANK.replace("\"id\": \"j-1\"", "\"id\": \"\"");
        let (_dir, path) = write_bank(&bad);
        let err = load_jamo_bank(&path).unwrap_err();
        assert!(matches!(err, BankError::InvalidItem(msg) if msg.contains("missing id")));
    }

    #[test]
    fn test_choices_come_from_item_pool() {
        let (_dir, path) = write_bank(BANK);
        let bank = load_jamo_bank(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..30 {
            let choices = bank.choices_with(&bank.items[0], &mut rng);
            assert_eq!(choices.len(), 4);
            assert_eq!(choices.iter().filter(|c| *c == "기역").count(), 1);
            let consonant_names: Vec<&str> =
                bank.pools.consonant.iter().map(|e| e.name.as_str()).collect();
            assert!(choices.iter().all(|c| consonant_names.contains(&c.as_str())));
        }
    }

    #[test]
    fn test_choices_shrink_with_small_pool() {
        // Vowel pool has 4 names, so a round is 1 correct + 3 wrong at most
        let (_dir, path) = write_bank(BANK);
        let bank = load_jamo_bank(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(32);
        let choices = bank.choices_with(&bank.items[1], &mut rng);
        assert_eq!(choices.len(), 4);
    }

    #[test]
    fn test_shuffled_order_is_permutation() {
        let (_dir, path) = write_bank(BANK);
        let bank = load_jamo_bank(&path).unwrap();
        let mut rng = StdRng::seed_from_u64(33);
        let mut order = bank.shuffled_order_with(&mut rng);
        order.sort_unstable();
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_choices_count_too_small_rejected() {
        let bad = BANK.replace("\"choicesCount\": 4", "\"choicesCount\": 1");
        let (_dir, path) = write_bank(&bad);
        assert!(matches!(load_jamo_bank(&path), Err(BankError::InvalidItem(_))));
    }
}
