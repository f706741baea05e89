//! End-to-end tests for the full alcsd stack.
//!
//! Each test spins up the complete application (real repository, real
//! service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`, so no TCP port is bound. Every scenario runs
//! against both the in-memory and the in-memory `SQLite` backing.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use alcs_adapter_http_axum::router;
use alcs_adapter_http_axum::state::AppState;
use alcs_adapter_storage_memory::InMemoryAlcoholRepository;
use alcs_adapter_storage_sqlite_sqlx::{Config, SqliteAlcoholRepository};
use alcs_app::services::alcohol_service::AlcoholService;

fn memory_app() -> Router {
    router::build(AppState::new(AlcoholService::new(
        InMemoryAlcoholRepository::new(),
    )))
}

async fn sqlite_app() -> Router {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");
    let repo = SqliteAlcoholRepository::new(db.pool().clone());
    router::build(AppState::new(AlcoholService::new(repo)))
}

async fn apps() -> [(&'static str, Router); 2] {
    [("memory", memory_app()), ("sqlite", sqlite_app().await)]
}

fn create(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/alcs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
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

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    for (backend, app) in apps().await {
        let resp = send(&app, get("/health")).await;
        assert_eq!(resp.status(), StatusCode::OK, "{backend}");
    }
}

// ---------------------------------------------------------------------------
// /alcs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_roundtrip_created_record() {
    for (backend, app) in apps().await {
        let resp = send(
            &app,
            create(&json!({"name": "Gin", "description": "London dry", "price": 24.99})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{backend}");
        let created = body_json(resp).await;
        let id = created["id"].as_i64().unwrap();

        let resp = send(&app, get(&format!("/alcs/{id}"))).await;
        assert_eq!(resp.status(), StatusCode::OK, "{backend}");
        assert_eq!(
            body_json(resp).await,
            json!({"id": id, "name": "Gin", "description": "London dry", "price": 24.99}),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn should_return_not_found_when_listing_empty_store() {
    for (backend, app) in apps().await {
        let resp = send(&app, get("/alcs")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{backend}");
        assert_eq!(body_json(resp).await["message"], "empty list", "{backend}");
    }
}

#[tokio::test]
async fn should_list_exactly_the_live_records() {
    for (backend, app) in apps().await {
        for name in ["Gin", "Rum", "Whisky"] {
            let resp = send(&app, create(&json!({"name": name, "price": 10.0}))).await;
            assert_eq!(resp.status(), StatusCode::CREATED, "{backend}");
        }
        let resp = send(&app, delete("/alcs/2")).await;
        assert_eq!(resp.status(), StatusCode::OK, "{backend}");

        let resp = send(&app, get("/alcs")).await;
        assert_eq!(resp.status(), StatusCode::OK, "{backend}");
        let body = body_json(resp).await;
        let mut names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        names.sort_unstable();
        assert_eq!(names, ["Gin", "Whisky"], "{backend}");
    }
}

#[tokio::test]
async fn should_reject_duplicate_name_with_conflict() {
    for (backend, app) in apps().await {
        let gin = json!({"name": "Gin", "price": 24.99});
        assert_eq!(send(&app, create(&gin)).await.status(), StatusCode::CREATED);

        let resp = send(&app, create(&json!({"name": "Gin", "price": 1.0}))).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT, "{backend}");
        assert!(body_json(resp).await["message"].is_string(), "{backend}");

        let body = body_json(send(&app, get("/alcs")).await).await;
        assert_eq!(body.as_array().unwrap().len(), 1, "{backend}");
        assert_eq!(body[0]["price"], 24.99, "{backend}");
    }
}

#[tokio::test]
async fn should_delete_record_then_report_not_found() {
    for (backend, app) in apps().await {
        let created = body_json(send(&app, create(&json!({"name": "Rum", "price": 18.0}))).await).await;
        let uri = format!("/alcs/{}", created["id"]);

        let resp = send(&app, delete(&uri)).await;
        assert_eq!(resp.status(), StatusCode::OK, "{backend}");
        assert_eq!(body_json(resp).await["message"], "successfully deleted");

        assert_eq!(send(&app, get(&uri)).await.status(), StatusCode::NOT_FOUND, "{backend}");
        assert_eq!(send(&app, delete(&uri)).await.status(), StatusCode::NOT_FOUND, "{backend}");
    }
}

#[tokio::test]
async fn should_not_reuse_ids_after_delete() {
    for (backend, app) in apps().await {
        let first = body_json(send(&app, create(&json!({"name": "Gin", "price": 1.0}))).await).await;
        send(&app, delete(&format!("/alcs/{}", first["id"]))).await;
        let second = body_json(send(&app, create(&json!({"name": "Gin", "price": 1.0}))).await).await;

        assert!(
            second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap(),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn should_return_not_found_for_non_numeric_id() {
    for (backend, app) in apps().await {
        assert_eq!(send(&app, get("/alcs/abc")).await.status(), StatusCode::NOT_FOUND, "{backend}");
        assert_eq!(send(&app, delete("/alcs/abc")).await.status(), StatusCode::NOT_FOUND, "{backend}");
    }
}

#[tokio::test]
async fn should_return_bad_request_for_malformed_body() {
    for (backend, app) in apps().await {
        for body in [json!({"description": "no name", "price": 1.0}), json!({"name": "Gin"}), json!({"name": "", "price": 2.0})] {
            let resp = send(&app, create(&body)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{backend}: {body}");
        }
        assert_eq!(send(&app, get("/alcs")).await.status(), StatusCode::NOT_FOUND, "{backend}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn should_accept_exactly_one_of_two_simultaneous_same_name_creates() {
    for (backend, app) in apps().await {
        let body = json!({"name": "Gin", "price": 24.99});
        let (a, b) = tokio::join!(send(&app, create(&body)), send(&app, create(&body)));

        let mut statuses = [a.status(), b.status()];
        statuses.sort_by_key(|s| s.as_u16());
        assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT], "{backend}");

        let listed = body_json(send(&app, get("/alcs")).await).await;
        assert_eq!(listed.as_array().unwrap().len(), 1, "{backend}");
    }
}
