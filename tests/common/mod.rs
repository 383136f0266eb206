#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use pawliday::api::handlers::health_handler;
use pawliday::api::middleware::auth;
use pawliday::api::routes::{protected_routes, public_routes};
use pawliday::state::AppState;
use pawliday::utils::password::hash_password;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), "test-signing-secret".to_string(), 3600)
}

/// Builds a test server with the full API surface and session middleware,
/// without rate limiting (the IP key extractor needs real socket info).
pub fn make_server(pool: SqlitePool) -> TestServer {
    let state = create_test_state(pool);

    let api = public_routes().merge(
        protected_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// An authenticated sitter as the HTTP client sees it.
pub struct TestSession {
    pub sitter_id: i64,
    /// `Cookie` header value carrying the session token.
    pub cookie: String,
    /// Value to echo in `X-CSRF-Token` on mutating requests.
    pub csrf_token: String,
}

/// Registers a sitter through the API and captures its session.
pub async fn register_sitter(server: &TestServer, email: &str) -> TestSession {
    let response = server
        .post("/api/sitters/register")
        .json(&json!({
            "first_name": "Test",
            "last_name": "Sitter",
            "email": email,
            "password": "password123",
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("register must set a session cookie")
        .to_str()
        .unwrap()
        .to_string();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    let body = response.json::<serde_json::Value>();

    TestSession {
        sitter_id: body["sitter"]["id"].as_i64().unwrap(),
        cookie,
        csrf_token: body["csrf_token"].as_str().unwrap().to_string(),
    }
}

pub async fn create_test_sitter(pool: &SqlitePool, email: &str) -> i64 {
    let password_hash = hash_password("password123").unwrap();

    sqlx::query_scalar(
        r#"
        INSERT INTO sitters (first_name, last_name, email, password_hash, created_at)
        VALUES ('Test', 'Sitter', ?, ?, ?)
        RETURNING sitter_id
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(chrono::Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_owner(pool: &SqlitePool, sitter_id: i64, email: &str, phone: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO owners (sitter_id, first_name, last_name, email, phone_number)
        VALUES (?, 'Max', 'Mustermann', ?, ?)
        RETURNING owner_id
        "#,
    )
    .bind(sitter_id)
    .bind(email)
    .bind(phone)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_dog(pool: &SqlitePool, owner_id: i64, chip_id: i64, name: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO dogs (chip_id, owner_id, name, birth_date, breed, height, weight,
                          food_per_day, gender, castrated, character, sociable, training, img_url)
        VALUES (?, ?, ?, ?, 'Labrador', 56, 30, 400, 'male', 1, 'calm', 1, 0, NULL)
        RETURNING dog_id
        "#,
    )
    .bind(chip_id)
    .bind(owner_id)
    .bind(name)
    .bind(NaiveDate::from_ymd_opt(2020, 5, 17).unwrap())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
