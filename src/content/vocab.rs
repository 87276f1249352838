//! Emoji vocabulary bank and choice assembly.
//!
//! Each round shows an emoji and asks for the Korean word; the three wrong
//! choices are other items drawn from the same level's pool.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz::shuffle::shuffle_with;

use super::{BankError, read_json};

fn default_level() -> u8 {
    1
}

/// One vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiVocabItem {
    pub id: String,
    pub emoji: String,
    /// Korean word (the answer)
    pub ko: String,
    /// English gloss
    pub en: String,
    pub category: String,
    #[serde(default = "default_level")]
    pub level: u8,
}

/// Load an emoji vocabulary bank.
pub fn load_emoji_vocab(path: &Path) -> Result<Vec<EmojiVocabItem>, BankError> {
    let items: Vec<EmojiVocabItem> = read_json(path)?;

    for item in &items {
        if item.id.is_empty() {
            return Err(BankError::InvalidItem("emoji vocab item missing id".to_string()));
        }
        if item.ko.is_empty() {
            return Err(BankError::InvalidItem(format!("emoji vocab {} has empty ko", item.id)));
        }
        if !(1..=3).contains(&item.level) {
            return Err(BankError::InvalidItem(format!(
                "emoji vocab {} has level {} (expected 1-3)",
                item.id, item.level
            )));
        }
    }

    Ok(items)
}

/// Items belonging to one difficulty level.
pub fn items_at_level(items: &[EmojiVocabItem], level: u8) -> Vec<EmojiVocabItem> {
    items.iter().filter(|item| item.level == level).cloned().collect()
}

/// Draw `count` wrong-choice items from the pool, excluding the correct item.
pub fn pick_wrong_choices_with<R: Rng + ?Sized>(
    items: &[EmojiVocabItem],
    correct: &EmojiVocabItem,
    count: usize,
    rng: &mut R,
) -> Vec<EmojiVocabItem> {
    let pool: Vec<EmojiVocabItem> =
        items.iter().filter(|item| item.id != correct.id).cloned().collect();
    let mut picked = shuffle_with(&pool, rng);
    picked.truncate(count);
    picked
}

/// Assemble a shuffled 4-way round for one item: correct + 3 wrong choices.
pub fn choice_round_with<R: Rng + ?Sized>(
    items: &[EmojiVocabItem],
    correct: &EmojiVocabItem,
    rng: &mut R,
) -> Vec<EmojiVocabItem> {
    let mut choices = vec![correct.clone()];
    choices.extend(pick_wrong_choices_with(items, correct, 3, rng));
    shuffle_with(&choices, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use tempfile::TempDir;

    fn sample_items(n: usize) -> Vec<EmojiVocabItem> {
        (0..n)
            .map(|i| EmojiVocabItem {
                id: format!("ev-{}", i),
                emoji: "🍎".to_string(),
                ko: format!("단어{}", i),
                en: format!("word{}", i),
                category: "food".to_string(),
                level: if i % 2 == 0 { 1 } else { 2 },
            })
            .collect()
    }

    #[test]
    fn test_load_defaults_level_to_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emoji_vocab.json");
        fs::write(
            &path,
            r#"[
                {"id": "ev-1", "emoji": "🍎", "ko": "사과", "en": "apple", "category": "food"},
                {"id": "ev-2", "emoji": "🍌", "ko": "바나나", "en": "banana", "category": "food", "level": 2}
            ]"#,
        )
        .unwrap();

        let items = load_emoji_vocab(&path).unwrap();
        assert_eq!(items[0].level, 1);
        assert_eq!(items[1].level, 2);
    }

    #[test]
    fn test_load_rejects_bad_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emoji_vocab.json");
        fs::write(
            &path,
            r#"[{"id": "ev-1", "emoji": "🍎", "ko": "사과", "en": "apple", "category": "food", "level": 7}]"#,
        )
        .unwrap();
        assert!(matches!(load_emoji_vocab(&path), Err(BankError::InvalidItem(_))));
    }

    #[test]
    fn test_missing_id_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emoji_vocab.json");
        fs::write(
            &path,
            r#"[{"id": "", "emoji": "🍎", "ko": "사과", "en": "apple", "category": "food"}]"#,
        )
        .unwrap();
        let err = load_emoji_vocab(&path).unwrap_err();
        assert!(matches!(err, BankError::InvalidItem(msg) if msg.contains("missing id")));
    }

    #[test]
    fn test_items_at_level() {
        let items = sample_items(10);
        let level1 = items_at_level(&items, 1);
        assert_eq!(level1.len(), 5);
        assert!(level1.iter().all(|item| item.level == 1));
    }

    #[test]
    fn test_wrong_choices_exclude_correct() {
        let items = sample_items(10);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..30 {
            let wrong = pick_wrong_choices_with(&items, &items[0], 3, &mut rng);
            assert_eq!(wrong.len(), 3);
            assert!(wrong.iter().all(|item| item.id != items[0].id));
            let mut ids: Vec<&str> = wrong.iter().map(|item| item.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 3);
        }
    }

    #[test]
    fn test_choice_round_contains_correct_once() {
        let items = sample_items(10);
        let mut rng = StdRng::seed_from_u64(22);
        let round = choice_round_with(&items, &items[3], &mut rng);
        assert_eq!(round.len(), 4);
        let hits = round.iter().filter(|item| item.id == items[3].id).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_choice_round_short_pool() {
        // Only 2 wrong candidates available: round shrinks instead of repeating
        let items = sample_items(3);
        let mut rng = StdRng::seed_from_u64(23);
        let round = choice_round_with(&items, &items[0], &mut rng);
        assert_eq!(round.len(), 3);
    }
}
