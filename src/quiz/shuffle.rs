//! Fisher-Yates shuffling and sampling helpers.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`. The input is not mutated.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
  shuffle_with(items, &mut rand::rng())
}

/// [`shuffle`] with a caller-supplied random source.
///
/// Backward Fisher-Yates pass: every permutation is equally likely given a
/// uniform `rng`. Empty and single-element inputs come back as plain copies.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
  let mut out = items.to_vec();
  for i in (1..out.len()).rev() {
    let j = rng.random_range(0..=i);
    out.swap(i, j);
  }
  out
}

/// Pick one element uniformly at random. `None` on an empty slice.
pub fn random_pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
  if items.is_empty() {
    None
  } else {
    Some(&items[rng.random_range(0..items.len())])
  }
}

/// Pick up to `n` distinct elements, skipping anything in `exclude`.
///
/// Returns fewer than `n` elements when the filtered pool is too small.
pub fn random_pick_n<T, R>(items: &[T], n: usize, exclude: &[T], rng: &mut R) -> Vec<T>
where
  T: Clone + PartialEq,
  R: Rng + ?Sized,
{
  let pool: Vec<T> = items.iter().filter(|it| !exclude.contains(it)).cloned().collect();
  let mut picked = shuffle_with(&pool, rng);
  picked.truncate(n);
  picked
}
