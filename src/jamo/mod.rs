//! Hangul jamo tables and syllable composition.

pub mod compose;
pub mod tables;

pub use compose::{Decomposed, compose, decompose, is_valid_final, is_valid_initial, is_valid_medial};
pub use tables::{BASIC_INITIALS, BASIC_MEDIALS, COMMON_FINALS, FINALS, INITIALS, MEDIALS};
