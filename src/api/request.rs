//! Request payload types.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};

/// Body of POST /questions/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub search_term: Option<String>,
}

/// Body of POST /quizzes
#[derive(Debug, Default, Deserialize)]
pub struct QuizPayload {
    /// Ids of questions already asked this round
    #[serde(default)]
    pub previous_questions: Vec<u64>,

    /// Expected to be an object carrying an `id` field; id 0 means all
    /// categories. Kept loose so a missing `id` maps to 422 rather than
    /// a deserialization failure.
    #[serde(default)]
    pub category: Option<Value>,
}

impl QuizPayload {
    /// The category filter for candidate selection: `None` for "all
    /// categories" (id 0), `Some(id)` otherwise.
    ///
    /// A missing `category.id`, or one that is not a non-negative
    /// integer, is semantically invalid input.
    pub fn category_filter(&self) -> ApiResult<Option<u64>> {
        let id = self
            .category
            .as_ref()
            .and_then(|c| c.get("id"))
            .ok_or(ApiError::Unprocessable)?;
        let id = id.as_u64().ok_or(ApiError::Unprocessable)?;
        Ok((id != 0).then_some(id))
    }
}
