//! Syllable-composition drills (levels 2 and 3).
//!
//! Level 2 asks for the syllable composed from a basic initial and a basic
//! medial; level 3 adds one of the common finals. Distractors hold the
//! medial (and final) fixed and vary only the initial, so each question
//! isolates initial-consonant discrimination.

use std::collections::HashSet;

use chrono::Utc;
use rand::Rng;

use crate::jamo::{BASIC_INITIALS, BASIC_MEDIALS, COMMON_FINALS, compose};

use super::shuffle::{random_pick, random_pick_n, shuffle_with};

/// Choices per question: 1 correct answer + 3 distractors.
const CHOICE_COUNT: usize = 4;

/// Attempt budget multiplier for duplicate-free set generation.
///
/// The dedup loop resamples on collision; with realistic counts (15 out of
/// 140 or 980 reachable syllables) the budget is never approached, but it
/// turns a `count` near the combinatorial ceiling into an error instead of
/// an endless loop.
const MAX_ATTEMPTS_PER_ITEM: usize = 20;

/// Composition drill difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizLevel {
  /// Initial + medial
  Two,
  /// Initial + medial + final
  Three,
}

impl QuizLevel {
  pub fn as_u8(&self) -> u8 {
    match self {
      Self::Two => 2,
      Self::Three => 3,
    }
  }
}

/// A single composition question. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionQuizItem {
  pub id: String,
  pub level: QuizLevel,
  pub initial: &'static str,
  pub medial: &'static str,
  /// `None` for level 2
  pub final_jamo: Option<&'static str>,
  /// The composed syllable
  pub answer: char,
  /// Display form, e.g. "ㄱ + ㅏ" or "ㄱ + ㅏ + ㄴ"
  pub prompt: String,
}

/// A question together with its shuffled 4-way choice list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizWithChoices {
  pub item: CompositionQuizItem,
  pub choices: Vec<char>,
}

/// Error from duplicate-free set generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSetError {
  pub requested: usize,
  pub generated: usize,
  pub attempts: usize,
}

impl std::fmt::Display for QuizSetError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "gave up after {} attempts: {} of {} unique questions generated",
      self.attempts, self.generated, self.requested
    )
  }
}

impl std::error::Error for QuizSetError {}

fn quiz_id<R: Rng + ?Sized>(level: QuizLevel, rng: &mut R) -> String {
  format!(
    "lv{}-{}-{:05x}",
    level.as_u8(),
    Utc::now().timestamp_millis(),
    rng.random_range(0..0x100000u32)
  )
}

/// Generate a level-2 question: basic initial + basic medial.
pub fn generate_level2_quiz() -> CompositionQuizItem {
  generate_level2_quiz_with(&mut rand::rng())
}

/// [`generate_level2_quiz`] with a caller-supplied random source.
pub fn generate_level2_quiz_with<R: Rng + ?Sized>(rng: &mut R) -> CompositionQuizItem {
  let initial = *random_pick(&BASIC_INITIALS, rng).expect("BASIC_INITIALS is non-empty");
  let medial = *random_pick(&BASIC_MEDIALS, rng).expect("BASIC_MEDIALS is non-empty");
  // Composition over the restricted tables cannot fail
  let answer = compose(initial, medial, None).expect("basic jamo always compose");

  CompositionQuizItem {
    id: quiz_id(QuizLevel::Two, rng),
    level: QuizLevel::Two,
    initial,
    medial,
    final_jamo: None,
    answer,
    prompt: format!("{} + {}", initial, medial),
  }
}

/// Generate a level-3 question: basic initial + basic medial + common final.
pub fn generate_level3_quiz() -> CompositionQuizItem {
  generate_level3_quiz_with(&mut rand::rng())
}

/// [`generate_level3_quiz`] with a caller-supplied random source.
pub fn generate_level3_quiz_with<R: Rng + ?Sized>(rng: &mut R) -> CompositionQuizItem {
  let initial = *random_pick(&BASIC_INITIALS, rng).expect("BASIC_INITIALS is non-empty");
  let medial = *random_pick(&BASIC_MEDIALS, rng).expect("BASIC_MEDIALS is non-empty");
  let final_jamo = *random_pick(&COMMON_FINALS, rng).expect("COMMON_FINALS is non-empty");
  let answer = compose(initial, medial, Some(final_jamo)).expect("basic jamo always compose");

  CompositionQuizItem {
    id: quiz_id(QuizLevel::Three, rng),
    level: QuizLevel::Three,
    initial,
    medial,
    final_jamo: Some(final_jamo),
    answer,
    prompt: format!("{} + {} + {}", initial, medial, final_jamo),
  }
}

/// Compose distractor syllables: same medial/final, different initials.
///
/// Samples `count` basic initials other than `correct_initial` and composes
/// each with the fixed medial and final. An initial whose composition fails
/// is dropped from the result; over the restricted tables this never
/// happens, it only guards direct misuse with foreign glyphs.
fn wrong_answers_with<R: Rng + ?Sized>(
  correct_initial: &'static str,
  medial: &'static str,
  final_jamo: Option<&'static str>,
  count: usize,
  rng: &mut R,
) -> Vec<char> {
  random_pick_n(&BASIC_INITIALS, count, &[correct_initial], rng)
    .into_iter()
    .filter_map(|initial| compose(initial, medial, final_jamo))
    .collect()
}

/// Attach a shuffled 4-way choice list to a question.
pub fn add_choices(item: CompositionQuizItem) -> QuizWithChoices {
  add_choices_with(item, &mut rand::rng())
}

/// [`add_choices`] with a caller-supplied random source.
pub fn add_choices_with<R: Rng + ?Sized>(item: CompositionQuizItem, rng: &mut R) -> QuizWithChoices {
  let mut choices = vec![item.answer];
  choices.extend(wrong_answers_with(
    item.initial,
    item.medial,
    item.final_jamo,
    CHOICE_COUNT - 1,
    rng,
  ));
  let choices = shuffle_with(&choices, rng);
  QuizWithChoices { item, choices }
}

/// Generate `count` level-2 questions with distinct answers, in shuffled order.
pub fn generate_level2_quiz_set(count: usize) -> Result<Vec<QuizWithChoices>, QuizSetError> {
  generate_quiz_set_with(QuizLevel::Two, count, &mut rand::rng())
}

/// Generate `count` level-3 questions with distinct answers, in shuffled order.
pub fn generate_level3_quiz_set(count: usize) -> Result<Vec<QuizWithChoices>, QuizSetError> {
  generate_quiz_set_with(QuizLevel::Three, count, &mut rand::rng())
}

/// Set generation with a caller-supplied random source.
pub fn generate_quiz_set_with<R: Rng + ?Sized>(
  level: QuizLevel,
  count: usize,
  rng: &mut R,
) -> Result<Vec<QuizWithChoices>, QuizSetError> {
  let budget = count.saturating_mul(MAX_ATTEMPTS_PER_ITEM);
  let mut quizzes: Vec<QuizWithChoices> = Vec::with_capacity(count);
  let mut seen_answers: HashSet<char> = HashSet::with_capacity(count);
  let mut attempts = 0;

  while quizzes.len() < count {
    if attempts >= budget {
      return Err(QuizSetError { requested: count, generated: quizzes.len(), attempts });
    }
    attempts += 1;

    let item = match level {
      QuizLevel::Two => generate_level2_quiz_with(rng),
      QuizLevel::Three => generate_level3_quiz_with(rng),
    };

    if seen_answers.insert(item.answer) {
      quizzes.push(add_choices_with(item, rng));
    }
  }

  Ok(shuffle_with(&quizzes, rng))
}
