//! Sentence quiz bank (the "Korean quiz" mode).
//!
//! A bank file is a JSON array of numbered rows, each with a question
//! sentence, four options and a normalized answer. Rows are returned in
//! ascending `number` order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::answer::AnswerField;
use super::{BankError, read_json};

#[derive(Debug, Clone, Deserialize)]
struct RawWordQuizItem {
    id: i64,
    number: i64,
    question: String,
    #[serde(default)]
    question_en: Option<String>,
    option1: String,
    option2: String,
    option3: String,
    option4: String,
    #[serde(rename = "answer_index", alias = "answer")]
    answer: AnswerField,
    rationale: String,
    hint: String,
}

/// A normalized sentence question.
#[derive(Debug, Clone, Serialize)]
pub struct WordQuizItem {
    pub id: i64,
    pub number: i64,
    pub question: String,
    pub question_en: Option<String>,
    /// Always four options, presentation order
    pub options: Vec<String>,
    /// 0-based index into `options`
    pub answer_index: usize,
    pub rationale: String,
    pub hint: String,
}

impl WordQuizItem {
    pub fn is_correct(&self, picked: usize) -> bool {
        picked == self.answer_index
    }

    pub fn answer_text(&self) -> &str {
        &self.options[self.answer_index]
    }
}

/// Load a sentence quiz bank, ordered by `number`.
pub fn load_word_quiz(path: &Path) -> Result<Vec<WordQuizItem>, BankError> {
    let raw: Vec<RawWordQuizItem> = read_json(path)?;

    let mut items = Vec::with_capacity(raw.len());
    for row in raw {
        items.push(normalize_item(row)?);
    }
    items.sort_by_key(|item| item.number);
    Ok(items)
}

fn normalize_item(raw: RawWordQuizItem) -> Result<WordQuizItem, BankError> {
    let options = vec![raw.option1, raw.option2, raw.option3, raw.option4];

    if raw.question.is_empty() {
        return Err(BankError::InvalidItem(format!("word quiz {} has empty question", raw.id)));
    }
    if options.iter().any(|o| o.is_empty()) {
        return Err(BankError::InvalidItem(format!("word quiz {} has an empty option", raw.id)));
    }

    let answer_index = raw
        .answer
        .resolve(&options)
        .map_err(|e| BankError::InvalidItem(format!("word quiz {}: {}", raw.id, e)))?;

    Ok(WordQuizItem {
        id: raw.id,
        number: raw.number,
        question: raw.question,
        question_en: raw.question_en,
        options,
        answer_index,
        rationale: raw.rationale,
        hint: raw.hint,
    })
}
