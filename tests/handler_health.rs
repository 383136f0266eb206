mod common;

use axum::http::StatusCode;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_health_ok(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[sqlx::test]
async fn test_health_degraded_when_pool_closed(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
}
