//! # Request Handlers
//!
//! One handler per operation. Each parses its input, issues queries
//! through the store trait, runs the query/selection logic, and shapes
//! the response body. Failures surface as [`ApiError`] values; nothing
//! is caught above this layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz::{self, QUESTIONS_PER_PAGE};
use crate::store::{NewQuestion, TriviaStore};

use super::errors::{ApiError, ApiResult};
use super::request::{QuizPayload, SearchPayload};
use super::response::{
    CategoryList, CategoryQuestions, Created, Deleted, Health, NextQuestion, QuestionPage,
    SearchResults,
};

/// State shared across handlers: the store client and the quiz RNG.
///
/// The store is the only stateful dependency; the RNG is held here so a
/// seeded one can be injected for deterministic tests.
pub struct AppState {
    store: Arc<dyn TriviaStore>,
    rng: Mutex<StdRng>,
}

impl AppState {
    /// Production state: entropy-seeded RNG.
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// State with an explicit RNG, for deterministic selection in tests.
    pub fn with_rng(store: Arc<dyn TriviaStore>, rng: StdRng) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }
}

/// Shared state type
pub type SharedState = Arc<AppState>;

/// 1-based page query parameter; absent or unparseable values fall back
/// to page 1.
fn page_param(params: &HashMap<String, String>) -> usize {
    params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1)
}

/// GET /health
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// GET /categories
pub async fn list_categories(State(state): State<SharedState>) -> ApiResult<Json<CategoryList>> {
    let categories = state.store.categories()?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryList::new(categories)))
}

/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<QuestionPage>> {
    let questions = state.store.questions()?;
    let categories = state.store.categories()?;
    if questions.is_empty() || categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    let page = page_param(&params);
    if page > quiz::page_count(questions.len(), QUESTIONS_PER_PAGE) {
        return Err(ApiError::NotFound);
    }

    let total_questions = questions.len();
    let page_slice = quiz::paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec();
    Ok(Json(QuestionPage::new(page_slice, total_questions, categories)))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Deleted>> {
    // Non-numeric ids cannot name a stored question
    let id: u64 = id.parse().map_err(|_| ApiError::NotFound)?;
    if !state.store.delete_question(id)? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(Deleted::new(id)))
}

/// POST /questions
pub async fn insert_question(
    State(state): State<SharedState>,
    payload: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResult<Json<Created>> {
    let Json(new) = payload.map_err(|_| ApiError::BadRequest)?;
    let question = state.store.insert_question(new)?;
    let total_questions = state.store.question_count()?;
    Ok(Json(Created::new(question, total_questions)))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<SharedState>,
    payload: Result<Json<SearchPayload>, JsonRejection>,
) -> ApiResult<Json<SearchResults>> {
    let Json(search) = payload.map_err(|_| ApiError::BadRequest)?;
    let term = search.search_term.ok_or(ApiError::BadRequest)?;

    let questions = state.store.questions()?;
    let matches = quiz::filter_questions(questions, &term);
    // An empty match set is a valid result, not a failure
    Ok(Json(SearchResults::new(matches)))
}

/// GET /categories/{id}/questions?page=N
pub async fn questions_by_category(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<CategoryQuestions>> {
    let id: u64 = id.parse().map_err(|_| ApiError::NotFound)?;

    // An absent category and a category with zero questions are
    // deliberately indistinguishable to clients
    let category = state.store.category(id)?.ok_or(ApiError::NotFound)?;
    let matches = state.store.questions_in_category(id)?;
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    let total_questions = matches.len();
    let page = page_param(&params);
    let page_slice = quiz::paginate(&matches, page, QUESTIONS_PER_PAGE).to_vec();
    Ok(Json(CategoryQuestions::new(category, page_slice, total_questions)))
}

/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<SharedState>,
    payload: Result<Json<QuizPayload>, JsonRejection>,
) -> ApiResult<Json<NextQuestion>> {
    let Json(quiz_round) = payload.map_err(|_| ApiError::BadRequest)?;
    let category = quiz_round.category_filter()?;

    let questions = state.store.questions()?;
    let pool = quiz::candidates(questions, &quiz_round.previous_questions, category);

    let mut rng = state.rng.lock().map_err(|_| ApiError::Internal)?;
    // An empty pool is the quiz's normal terminal condition
    let picked = quiz::draw(&pool, &mut *rng);
    Ok(Json(NextQuestion::new(picked)))
}
