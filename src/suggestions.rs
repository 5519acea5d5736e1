//! Writing suggestions for new entries.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::SUGGESTIONS;

/// Pick `count` distinct suggestions in random order.
///
/// The caller supplies the random source, so a seeded generator gives a
/// reproducible pick. `count` is clamped to the number of suggestions.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<&'static str> {
    let mut pool = SUGGESTIONS.to_vec();
    pool.shuffle(rng);
    pool.truncate(count.min(SUGGESTIONS.len()));
    pool
}

/// Append `suggestion` to a draft, separated by a single space.
pub fn append(draft: &str, suggestion: &str) -> String {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return suggestion.to_string();
    }
    format!("{} {}", trimmed, suggestion)
}
