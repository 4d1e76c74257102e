//! Quiz next-question selection.
//!
//! The candidate set is every question not yet asked, optionally narrowed
//! to one category. The pick is uniform over the candidates; the RNG is
//! injected so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::store::Question;

/// Questions eligible for the next pick: not in `previous`, and in the
/// given category when a filter is present (`None` means all categories).
pub fn candidates(
    questions: Vec<Question>,
    previous: &[u64],
    category: Option<u64>,
) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .filter(|q| category.map_or(true, |id| q.in_category(id)))
        .collect()
}

/// Uniformly pick one candidate, or `None` when the quiz is exhausted.
pub fn draw<R: Rng + ?Sized>(candidates: &[Question], rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
