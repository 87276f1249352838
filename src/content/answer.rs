//! Answer-field normalization.
//!
//! Bank files have carried the correct answer in three shapes over time: a
//! bare 1-based option index, the answer text itself, or a nested object
//! with an `index` or `value` key. The raw field deserializes into a
//! tagged union and is resolved against the option list exactly once, at
//! load time, into a 0-based index.

use serde::Deserialize;

/// Raw answer payload as it appears in bank JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnswerField {
    /// Bare number: 1-based option index
    Index(i64),
    /// Bare string: the answer text, matched against the options
    Text(String),
    /// Nested object carrying one of the above
    Nested(NestedAnswer),
}

/// Nested answer object (`{"index": 2}` or `{"value": "김치"}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NestedAnswer {
    #[serde(default)]
    pub index: Option<i64>,
    #[serde(default, alias = "answer", alias = "text")]
    pub value: Option<String>,
}

/// Error resolving an answer field against an option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// 1-based index outside `1..=options.len()`
    OutOfRange { index: i64, options: usize },
    /// Answer text not present in the options
    NoMatch(String),
    /// Nested object with neither an index nor a value
    Empty,
}

impl std::fmt::Display for AnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerError::OutOfRange { index, options } => {
                write!(f, "answer index {} out of range for {} options", index, options)
            }
            AnswerError::NoMatch(text) => write!(f, "answer text {:?} matches no option", text),
            AnswerError::Empty => write!(f, "answer object has neither index nor value"),
        }
    }
}

impl std::error::Error for AnswerError {}

impl AnswerField {
    /// Resolve to a 0-based index into `options`.
    pub fn resolve(&self, options: &[String]) -> Result<usize, AnswerError> {
        match self {
            AnswerField::Index(raw) => resolve_index(*raw, options.len()),
            AnswerField::Text(text) => resolve_text(text, options),
            AnswerField::Nested(nested) => {
                if let Some(raw) = nested.index {
                    return resolve_index(raw, options.len());
                }
                if let Some(text) = &nested.value {
                    return resolve_text(text, options);
                }
                Err(AnswerError::Empty)
            }
        }
    }
}

fn resolve_index(raw: i64, options: usize) -> Result<usize, AnswerError> {
    if raw >= 1 && (raw as usize) <= options {
        Ok(raw as usize - 1)
    } else {
        Err(AnswerError::OutOfRange { index: raw, options })
    }
}

fn resolve_text(text: &str, options: &[String]) -> Result<usize, AnswerError> {
    options
        .iter()
        .position(|o| o == text)
        .ok_or_else(|| AnswerError::NoMatch(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["사과".to_string(), "바나나".to_string(), "포도".to_string(), "수박".to_string()]
    }

    #[test]
    fn test_deserialize_bare_index() {
        let field: AnswerField = serde_json::from_str("3").unwrap();
        assert_eq!(field, AnswerField::Index(3));
        assert_eq!(field.resolve(&options()), Ok(2));
    }

    #[test]
    fn test_deserialize_bare_text() {
        let field: AnswerField = serde_json::from_str(r#""바나나""#).unwrap();
        assert_eq!(field.resolve(&options()), Ok(1));
    }

    #[test]
    fn test_deserialize_nested_index() {
        let field: AnswerField = serde_json::from_str(r#"{"index": 1}"#).unwrap();
        assert_eq!(field.resolve(&options()), Ok(0));
    }

    #[test]
    fn test_deserialize_nested_value_aliases() {
        for raw in [r#"{"value": "수박"}"#, r#"{"answer": "수박"}"#, r#"{"text": "수박"}"#] {
            let field: AnswerField = serde_json::from_str(raw).unwrap();
            assert_eq!(field.resolve(&options()), Ok(3), "shape: {}", raw);
        }
    }

    #[test]
    fn test_index_out_of_range() {
        assert_eq!(
            AnswerField::Index(5).resolve(&options()),
            Err(AnswerError::OutOfRange { index: 5, options: 4 })
        );
        // Indexes are 1-based; 0 is out of range, not the first option
        assert_eq!(
            AnswerField::Index(0).resolve(&options()),
            Err(AnswerError::OutOfRange { index: 0, options: 4 })
        );
    }

    #[test]
    fn test_text_no_match() {
        assert_eq!(
            AnswerField::Text("멜론".to_string()).resolve(&options()),
            Err(AnswerError::NoMatch("멜론".to_string()))
        );
    }

    #[test]
    fn test_nested_empty() {
        let field: AnswerField = serde_json::from_str("{}").unwrap();
        assert_eq!(field.resolve(&options()), Err(AnswerError::Empty));
    }

    #[test]
    fn test_nested_index_wins_over_value() {
        let field: AnswerField = serde_json::from_str(r#"{"index": 2, "value": "수박"}"#).unwrap();
        assert_eq!(field.resolve(&options()), Ok(1));
    }
}
