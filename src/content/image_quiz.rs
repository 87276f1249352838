//! Image quiz bank: photo questions grouped by category.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::answer::AnswerField;
use super::{BankError, read_json};

/// Image quiz category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuizCategory {
    /// Street signs and survival reading
    Street,
    /// Food and menus
    Food,
    /// Convenience store items
    Convenience,
    /// History and landmarks
    History,
    /// Entertainment and trends
    Kpop,
}

impl ImageQuizCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Street => "street",
            Self::Food => "food",
            Self::Convenience => "convenience",
            Self::History => "history",
            Self::Kpop => "kpop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "street" => Some(Self::Street),
            "food" => Some(Self::Food),
            "convenience" => Some(Self::Convenience),
            "history" => Some(Self::History),
            "kpop" => Some(Self::Kpop),
            _ => None,
        }
    }

    pub const ALL: [ImageQuizCategory; 5] =
        [Self::Street, Self::Food, Self::Convenience, Self::History, Self::Kpop];
}

#[derive(Debug, Clone, Deserialize)]
struct RawImageQuizItem {
    id: i64,
    category: ImageQuizCategory,
    image_url: String,
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
    #[serde(default)]
    rationale_en: Option<String>,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    audio_path: Option<String>,
}

/// A normalized image question.
#[derive(Debug, Clone, Serialize)]
pub struct ImageQuizItem {
    pub id: i64,
    pub category: ImageQuizCategory,
    pub image_url: String,
    pub question: String,
    pub question_en: Option<String>,
    /// Always four options, presentation order
    pub options: Vec<String>,
    /// 0-based index into `options`
    pub answer_index: usize,
    pub rationale: String,
    pub rationale_en: Option<String>,
    pub hint: Option<String>,
    /// Storage path of the TTS audio clip, if one exists
    pub audio_path: Option<String>,
}

impl ImageQuizItem {
    pub fn is_correct(&self, picked: usize) -> bool {
        picked == self.answer_index
    }
}

/// Load an image quiz bank, ordered by id.
pub fn load_image_quiz(path: &Path) -> Result<Vec<ImageQuizItem>, BankError> {
    let raw: Vec<RawImageQuizItem> = read_json(path)?;

    let mut items = Vec::with_capacity(raw.len());
    for row in raw {
        items.push(normalize_item(row)?);
    }
    items.sort_by_key(|item| item.id);
    Ok(items)
}

/// Items belonging to one category, in bank order.
pub fn items_in_category(
    items: &[ImageQuizItem],
    category: ImageQuizCategory,
) -> Vec<&ImageQuizItem> {
    items.iter().filter(|item| item.category == category).collect()
}

fn normalize_item(raw: RawImageQuizItem) -> Result<ImageQuizItem, BankError> {
    let options = vec![raw.option1, raw.option2, raw.option3, raw.option4];

    if raw.image_url.is_empty() {
        return Err(BankError::InvalidItem(format!("image quiz {} has empty image_url", raw.id)));
    }
    if options.iter().any(|o| o.is_empty()) {
        return Err(BankError::InvalidItem(format!("image quiz {} has an empty option", raw.id)));
    }

    let answer_index = raw
        .answer
        .resolve(&options)
        .map_err(|e| BankError::InvalidItem(format!("image quiz {}: {}", raw.id, e)))?;

    Ok(ImageQuizItem {
        id: raw.id,
        category: raw.category,
        image_url: raw.image_url,
        question: raw.question,
        question_en: raw.question_en,
        options,
        answer_index,
        rationale: raw.rationale,
        rationale_en: raw.rationale_en,
        hint: raw.hint,
        audio_path: raw.audio_path,
    })
}
