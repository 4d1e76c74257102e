//! Substring search over question text.

use crate::store::Question;

/// Keep the questions whose text contains `term` as a case-insensitive
/// substring. Pure substring match, no tokenization or ranking.
/// Questions without string text never match.
pub fn filter_questions(questions: Vec<Question>, term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    questions
        .into_iter()
        .filter(|q| {
            q.text()
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}
