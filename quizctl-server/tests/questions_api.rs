//! End-to-end tests: HTTP router -> question service -> SQLite repository

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use quizctl_core::{Error, Question, QuestionOption, QuestionService, ValidationError};
use quizctl_server::db::{create_pool, ensure_schema};
use quizctl_server::{build_router, AppState, ServerConfig, SqliteQuestionRepo};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestDb {
    // Held so the database file outlives the test.
    _dir: TempDir,
    pool: SqlitePool,
}

async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("questions.db").display());
    let pool = create_pool(&url).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    TestDb { _dir: dir, pool }
}

fn service(db: &TestDb) -> QuestionService {
    QuestionService::new(Arc::new(SqliteQuestionRepo::new(db.pool.clone())))
}

fn app(db: &TestDb) -> Router {
    build_router(AppState::new(service(db)), &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn question_count(pool: &SqlitePool) -> i64 {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
        .unwrap();
    n
}

#[tokio::test]
async fn sunset_question_round_trip() {
    let db = test_db().await;
    let service = service(&db);

    let question = Question::new(
        "Where does the sun set?",
        vec![
            QuestionOption::new("East", false),
            QuestionOption::new("West", true),
        ],
    );
    let id = service.create(&question).await.unwrap();

    let listed = service.list_all(0, 10).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);

    let options: Vec<_> = listed[0]
        .options
        .iter()
        .map(|o| (o.body.as_str(), o.correct, o.option_order, o.question_id))
        .collect();
    assert_eq!(options, [("East", false, 0, id), ("West", true, 1, id)]);
}

#[tokio::test]
async fn question_without_options_writes_nothing() {
    let db = test_db().await;
    let service = service(&db);

    let err = service
        .create(&Question::new("Where does the sun set?", vec![]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::TooFewOptions { actual: 0, .. })
    ));
    assert_eq!(question_count(&db.pool).await, 0);
}

#[tokio::test]
async fn http_crud_cycle() {
    let db = test_db().await;
    let app = app(&db);

    let created = send(
        &app,
        Method::POST,
        "/question",
        Some(json!({
            "body": "Which planet is the largest?",
            "options": [
                { "body": "Mars", "correct": false },
                { "body": "Jupiter", "correct": true },
                { "body": "Venus", "correct": false }
            ]
        })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let id = json_body(created).await["id"].as_i64().unwrap();

    let updated = send(
        &app,
        Method::PUT,
        &format!("/question/{id}"),
        Some(json!({
            "body": "Which planet is the smallest?",
            "options": [
                { "body": "Mercury", "correct": true },
                { "body": "Saturn", "correct": false }
            ]
        })),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let listed = json_body(send(&app, Method::GET, "/questions", None).await).await;
    assert_eq!(listed[0]["body"], "Which planet is the smallest?");
    assert_eq!(listed[0]["options"][0]["body"], "Mercury");
    assert_eq!(listed[0]["options"][1]["optionOrder"], 1);

    let deleted = send(&app, Method::DELETE, &format!("/question/{id}"), None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert_eq!(question_count(&db.pool).await, 0);
}

#[tokio::test]
async fn invalid_update_keeps_stored_question() {
    let db = test_db().await;
    let app = app(&db);

    let created = send(
        &app,
        Method::POST,
        "/question",
        Some(json!({
            "body": "Where does the sun set?",
            "options": [
                { "body": "East", "correct": false },
                { "body": "West", "correct": true }
            ]
        })),
    )
    .await;
    let id = json_body(created).await["id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/question/{id}"),
        Some(json!({
            "body": "Where does the sun set?",
            "options": [
                { "body": "East", "correct": false },
                { "body": "West", "correct": false }
            ]
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let listed = json_body(send(&app, Method::GET, "/questions", None).await).await;
    assert_eq!(listed[0]["options"][1]["correct"], true);
}

#[tokio::test]
async fn seek_pagination_over_http() {
    let db = test_db().await;
    let service = service(&db);
    for n in 1..=12 {
        let question = Question::new(
            format!("Question number {n:02}"),
            vec![
                QuestionOption::new("right", true),
                QuestionOption::new("wrong", false),
            ],
        );
        service.create(&question).await.unwrap();
    }

    let app = app(&db);
    let listed = json_body(send(&app, Method::GET, "/questions?last_id=10&size=5", None).await).await;
    let ids: Vec<_> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [9, 8, 7, 6, 5]);

    for q in listed.as_array().unwrap() {
        assert_eq!(q["options"][0]["optionOrder"], 0);
        assert_eq!(q["options"][1]["optionOrder"], 1);
    }
}

#[tokio::test]
async fn health_check() {
    let db = test_db().await;
    let response = send(&app(&db), Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn api_description_is_served() {
    let db = test_db().await;
    let app = app(&db);

    let response = send(&app, Method::GET, "/swagger.yaml", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, Method::GET, "/docs", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}
