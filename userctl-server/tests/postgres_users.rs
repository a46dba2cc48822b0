//! Postgres-backed repository and router tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p userctl-server -- --ignored
//!
//! Each test runs on a single-connection pool with a temporary `users`
//! table, so nothing touches real data.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use userctl_server::db::{DbError, PgUserStore, UserStore};
use userctl_server::models::UserInput;
use userctl_server::{build_router, AppState};

async fn temp_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("pool creation failed");

    sqlx::query(
        r#"
        CREATE TEMPORARY TABLE users (
            id    SERIAL PRIMARY KEY,
            name  TEXT NOT NULL,
            email TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("create temp table failed");

    pool
}

#[tokio::test]
#[ignore = "requires database"]
async fn repository_crud_roundtrip() {
    let store = PgUserStore::new(temp_pool().await);

    assert!(store.list_all().await.unwrap().is_empty());

    store.create(&UserInput::new("Ann", "ann@x.com")).await.unwrap();
    let users = store.list_all().await.unwrap();
    assert_eq!(users.len(), 1);
    let id = i64::from(users[0].id);
    assert_eq!(users[0].name, "Ann");

    store
        .update_by_id(id, &UserInput::new("Ann K", "ann@x.com"))
        .await
        .unwrap();
    assert_eq!(store.get_by_id(id).await.unwrap().name, "Ann K");

    assert_eq!(store.delete_by_id(id).await.unwrap(), 1);
    assert_eq!(store.delete_by_id(id).await.unwrap(), 0);
    assert!(matches!(
        store.get_by_id(id).await,
        Err(DbError::NotFound { .. })
    ));
}

#[tokio::test]
#[ignore = "requires database"]
async fn update_of_missing_row_reports_success() {
    let store = PgUserStore::new(temp_pool().await);
    store
        .update_by_id(4242, &UserInput::new("Ghost", "g@x.com"))
        .await
        .unwrap();
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn values_are_bound_not_interpolated() {
    let store = PgUserStore::new(temp_pool().await);
    let hostile = "x'); DROP TABLE users; --";

    store.create(&UserInput::new(hostile, "h@x.com")).await.unwrap();
    let users = store.list_all().await.unwrap();
    assert_eq!(users[0].name, hostile);
}

async fn call(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
#[ignore = "requires database"]
async fn http_lifecycle_against_postgres() {
    let app = build_router(AppState::new(PgUserStore::new(temp_pool().await)));
    let ann = json!({"name": "Ann", "email": "ann@x.com"});

    let (status, body) = call(&app, "POST", "/users", Some(ann.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, ann);

    let (status, body) = call(&app, "GET", "/users", None).await;
    assert_eq!(status, StatusCode::OK);
    let id = body[0]["id"].as_i64().unwrap();
    let uri = format!("/users/{}", id);

    let (status, body) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "ann@x.com");

    let update = json!({"name": "Ann K", "email": "ann@x.com"});
    let (status, _) = call(&app, "PUT", &uri, Some(update)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = call(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
#[ignore = "requires database"]
async fn ids_beyond_int4_match_no_row() {
    let store = PgUserStore::new(temp_pool().await);
    let huge = 3_000_000_000_i64;

    assert!(matches!(
        store.get_by_id(huge).await,
        Err(DbError::NotFound { .. })
    ));
    assert_eq!(store.delete_by_id(huge).await.unwrap(), 0);
    store.ping().await.unwrap();
}
