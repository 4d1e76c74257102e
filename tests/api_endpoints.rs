//! End-to-end tests driving the full router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tower::ServiceExt;

use triviad::api::{AppState, HttpServer};
use triviad::store::{MemoryStore, SeedData};

fn seed() -> SeedData {
    let mut questions = Vec::new();
    for id in 1..=12u64 {
        questions.push(json!({
            "id": id,
            "question": format!("Science question number {}?", id),
            "answer": format!("answer {}", id),
            "category": 1,
            "difficulty": 2
        }));
    }
    questions.push(json!({
        "id": 13,
        "question": "What is the title of this painting?",
        "answer": "Impression, Sunrise",
        "category": 2,
        "difficulty": 4
    }));
    questions.push(json!({
        "id": 14,
        "question": "Who sculpted David?",
        "answer": "Michelangelo",
        "category": "2",
        "difficulty": 3
    }));

    serde_json::from_value(json!({
        "categories": [
            {"id": 1, "type": "Science"},
            {"id": 2, "type": "Art"},
            {"id": 3, "type": "Geography"}
        ],
        "questions": questions
    }))
    .unwrap()
}

fn app_with_store(store: MemoryStore) -> Router {
    let state = Arc::new(AppState::with_rng(
        Arc::new(store),
        StdRng::seed_from_u64(0),
    ));
    HttpServer::new(state).router()
}

fn app() -> Router {
    app_with_store(MemoryStore::from_seed(seed()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_get_categories() {
    let (status, body) = send(&app(), get("/categories")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    assert_eq!(body["categories"][0]["type"], "Science");
}

#[tokio::test]
async fn test_404_get_categories_on_empty_store() {
    let empty = app_with_store(MemoryStore::new());
    let (status, body) = send(&empty, get("/categories")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_get_questions_first_page() {
    let (status, body) = send(&app(), get("/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["total_questions"], 14);
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
    assert_eq!(body["current_category"], Value::Null);
}

#[tokio::test]
async fn test_get_questions_last_page_is_short() {
    let (status, body) = send(&app(), get("/questions?page=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_404_get_questions_beyond_valid_page() {
    let (status, body) = send(&app(), get("/questions?page=1000")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_delete_question() {
    let app = app();
    let (status, body) = send(&app, delete("/questions/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question_id"], 5);

    // Deleting the same id again is a miss
    let (status, body) = send(&app, delete("/questions/5")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "resource not found");

    // The deleted id never reappears in listings
    let (_, body) = send(&app, get("/questions")).await;
    let ids: Vec<u64> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect();
    assert!(!ids.contains(&5));
    assert_eq!(body["total_questions"], 13);
}

#[tokio::test]
async fn test_404_delete_unknown_question() {
    let (status, body) = send(&app(), delete("/questions/450")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_insert_question() {
    let app = app();
    let payload = json!({
        "question": "foo",
        "answer": "bar",
        "category": "2",
        "difficulty": 3
    });
    let (status, body) = send(&app, post_json("/questions", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 15);
    assert_eq!(body["question"]["question"], "foo");
    assert_eq!(body["question"]["category"], "2");
    assert_eq!(body["question"]["id"], 15);
}

#[tokio::test]
async fn test_insert_passes_null_fields_through() {
    let (status, body) = send(&app(), post_json("/questions", &json!({"question": null}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["question"], Value::Null);
    assert_eq!(body["question"]["answer"], Value::Null);
}

#[tokio::test]
async fn test_400_insert_question_with_no_payload() {
    let (status, body) = send(&app(), post_empty("/questions")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "bad request");
}

#[tokio::test]
async fn test_search_questions() {
    let (status, body) = send(
        &app(),
        post_json("/questions/search", &json!({"search_term": "title"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 1);
    assert_eq!(body["questions"][0]["id"], 13);
    assert_eq!(body["current_category"], Value::Null);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let (status, body) = send(
        &app(),
        post_json("/questions/search", &json!({"search_term": "SCIENCE"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 12);
}

#[tokio::test]
async fn test_search_no_match_is_still_success() {
    let (status, body) = send(
        &app(),
        post_json("/questions/search", &json!({"search_term": "zzz_no_match"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], 0);
}

#[tokio::test]
async fn test_400_search_without_term() {
    let (status, body) = send(&app(), post_json("/questions/search", &json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "bad request");
}

#[tokio::test]
async fn test_405_search_with_invalid_method() {
    let (status, body) = send(&app(), get("/questions/search")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "method not allowed");
}

#[tokio::test]
async fn test_get_questions_of_category() {
    let (status, body) = send(&app(), get("/categories/2/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["current_category"]["type"], "Art");
    assert_eq!(body["total_questions"], 2);
    // Both integer and numeric-string category encodings match
    let ids: Vec<u64> = body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![13, 14]);
}

#[tokio::test]
async fn test_404_get_questions_of_unknown_category() {
    let (status, body) = send(&app(), get("/categories/999/questions")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_404_get_questions_of_category_without_questions() {
    // Geography exists but holds no questions; indistinguishable from absent
    let (status, body) = send(&app(), get("/categories/3/questions")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_quiz_returns_unseen_question() {
    let (status, body) = send(
        &app(),
        post_json(
            "/quizzes",
            &json!({"previous_questions": [], "category": {"id": 0}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"]["id"].as_u64().is_some());
}

#[tokio::test]
async fn test_quiz_respects_category_and_previous() {
    let (status, body) = send(
        &app(),
        post_json(
            "/quizzes",
            &json!({"previous_questions": [13], "category": {"id": 2}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 14);
}

#[tokio::test]
async fn test_quiz_exhausts_to_null() {
    let app = app();
    let mut previous: Vec<u64> = Vec::new();

    // Category 2 holds exactly two questions
    for _ in 0..2 {
        let (status, body) = send(
            &app,
            post_json(
                "/quizzes",
                &json!({"previous_questions": previous.clone(), "category": {"id": 2}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = body["question"]["id"].as_u64().expect("question expected");
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let (status, body) = send(
        &app,
        post_json(
            "/quizzes",
            &json!({"previous_questions": previous, "category": {"id": 2}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"], Value::Null);
}

#[tokio::test]
async fn test_422_quiz_category_without_id() {
    let (status, body) = send(
        &app(),
        post_json("/quizzes", &json!({"category": {"type": "Art"}})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "unprocessable");
}

#[tokio::test]
async fn test_400_quiz_without_payload() {
    let (status, body) = send(&app(), post_empty("/quizzes")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "bad request");
}

#[tokio::test]
async fn test_404_unknown_route_is_json() {
    let (status, body) = send(&app(), get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "resource not found");
}
