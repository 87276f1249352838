use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Which quiz mode a session was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
  /// Letter drills (jamo bank + composition levels)
  Jamo,
  /// Emoji vocabulary
  Emoji,
  /// Interview-prep flashcards
  Interview,
  /// Sentence quiz
  Korean,
  /// Image quiz
  Image,
}

impl QuizMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Jamo => "jamo",
      Self::Emoji => "emoji",
      Self::Interview => "interview",
      Self::Korean => "korean",
      Self::Image => "image",
    }
  }
}

impl std::fmt::Display for QuizMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for QuizMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "jamo" => Ok(Self::Jamo),
      "emoji" => Ok(Self::Emoji),
      "interview" => Ok(Self::Interview),
      "korean" => Ok(Self::Korean),
      "image" => Ok(Self::Image),
      _ => Err(format!("Invalid quiz mode: {}", s)),
    }
  }
}

impl ToSql for QuizMode {
  fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
    Ok(ToSqlOutput::from(self.as_str()))
  }
}

impl FromSql for QuizMode {
  fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
    value
      .as_str()?
      .parse()
      .map_err(|e: String| FromSqlError::Other(e.into()))
  }
}

/// Outcome of one finished quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResult {
  pub id: i64,
  pub mode: QuizMode,
  pub correct: i64,
  pub wrong: i64,
  pub updated_at: DateTime<Utc>,
}

impl SessionResult {
  pub fn new(mode: QuizMode, correct: i64, wrong: i64) -> Self {
    Self {
      id: 0,
      mode,
      correct,
      wrong,
      updated_at: Utc::now(),
    }
  }

  pub fn total(&self) -> i64 {
    self.correct + self.wrong
  }

  /// Fraction answered correctly, 0.0 for an empty session.
  pub fn accuracy(&self) -> f64 {
    let total = self.total();
    if total == 0 {
      0.0
    } else {
      self.correct as f64 / total as f64
    }
  }
}

/// Per-mode aggregate across all recorded sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeTotals {
  pub mode: QuizMode,
  pub sessions: i64,
  pub correct: i64,
  pub wrong: i64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_quiz_mode_str_roundtrip() {
    let modes = [
      QuizMode::Jamo,
      QuizMode::Emoji,
      QuizMode::Interview,
      QuizMode::Korean,
      QuizMode::Image,
    ];
    for mode in modes {
      let parsed: QuizMode = mode.as_str().parse().unwrap();
      assert_eq!(parsed, mode);
    }
  }

  #[test]
  fn test_quiz_mode_from_str_invalid() {
    assert!("scene".parse::<QuizMode>().is_err());
    assert!("".parse::<QuizMode>().is_err());
    assert!("Jamo".parse::<QuizMode>().is_err());
  }

  #[test]
  fn test_session_result_new_defaults() {
    let result = SessionResult::new(QuizMode::Emoji, 12, 3);
    assert_eq!(result.id, 0);
    assert_eq!(result.mode, QuizMode::Emoji);
    assert_eq!(result.total(), 15);
  }

  #[test]
  fn test_accuracy() {
    let result = SessionResult::new(QuizMode::Korean, 3, 1);
    assert!((result.accuracy() - 0.75).abs() < f64::EPSILON);

    let empty = SessionResult::new(QuizMode::Korean, 0, 0);
    assert_eq!(empty.accuracy(), 0.0);
  }

  #[test]
  fn test_quiz_mode_serde_lowercase() {
    let json = serde_json::to_string(&QuizMode::Interview).unwrap();
    assert_eq!(json, r#""interview""#);
    let back: QuizMode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, QuizMode::Interview);
  }
}
