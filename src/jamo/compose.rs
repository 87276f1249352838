//! Syllable composition and decomposition over the precomposed Hangul block.
//!
//! The mapping `0xAC00 + (initial*21 + medial)*28 + final` is a bijection
//! between valid jamo triples and the 11,172 code points in
//! `[0xAC00, 0xD7A3]` (Unicode 3.12). Invalid input is signalled by `None`,
//! never by panicking.

use super::tables::{FINALS, INITIALS, MEDIALS};

/// First code point of the precomposed syllable block (가).
const HANGUL_BASE: u32 = 0xAC00;
/// Last code point of the precomposed syllable block (힣).
const HANGUL_LAST: u32 = 0xD7A3;

const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

/// A syllable broken back into its jamo slots.
///
/// `final_jamo` is the empty string when the syllable has no batchim,
/// mirroring index 0 of [`FINALS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
  pub initial: &'static str,
  pub medial: &'static str,
  pub final_jamo: &'static str,
}

/// Compose an initial, a medial and an optional final into one syllable.
///
/// `None` final (or `Some("")`) composes without batchim. Returns `None`
/// if any glyph is not in its table.
pub fn compose(initial: &str, medial: &str, final_jamo: Option<&str>) -> Option<char> {
  let initial_index = INITIALS.iter().position(|&g| g == initial)?;
  let medial_index = MEDIALS.iter().position(|&g| g == medial)?;
  let final_index = match final_jamo {
    Some(f) => FINALS.iter().position(|&g| g == f)?,
    None => 0,
  };

  let code = HANGUL_BASE
    + (initial_index as u32 * MEDIAL_COUNT + medial_index as u32) * FINAL_COUNT
    + final_index as u32;

  char::from_u32(code)
}

/// Break a precomposed syllable into its jamo slots.
///
/// Returns `None` for any character outside `[0xAC00, 0xD7A3]`.
pub fn decompose(syllable: char) -> Option<Decomposed> {
  let code = syllable as u32;
  if !(HANGUL_BASE..=HANGUL_LAST).contains(&code) {
    return None;
  }

  let offset = code - HANGUL_BASE;
  let final_index = (offset % FINAL_COUNT) as usize;
  let medial_index = ((offset / FINAL_COUNT) % MEDIAL_COUNT) as usize;
  let initial_index = (offset / (MEDIAL_COUNT * FINAL_COUNT)) as usize;

  Some(Decomposed {
    initial: INITIALS[initial_index],
    medial: MEDIALS[medial_index],
    final_jamo: FINALS[final_index],
  })
}

pub fn is_valid_initial(glyph: &str) -> bool {
  INITIALS.contains(&glyph)
}

pub fn is_valid_medial(glyph: &str) -> bool {
  MEDIALS.contains(&glyph)
}

pub fn is_valid_final(glyph: &str) -> bool {
  FINALS.contains(&glyph)
}
