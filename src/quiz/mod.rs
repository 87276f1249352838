//! Quiz generation: shuffling, sampling and syllable-composition drills.

pub mod composition;
pub mod shuffle;

pub use composition::{
  CompositionQuizItem, QuizLevel, QuizSetError, QuizWithChoices, add_choices, add_choices_with,
  generate_level2_quiz, generate_level2_quiz_set, generate_level2_quiz_with, generate_level3_quiz,
  generate_level3_quiz_set, generate_level3_quiz_with, generate_quiz_set_with,
};
pub use shuffle::{random_pick, random_pick_n, shuffle, shuffle_with};
