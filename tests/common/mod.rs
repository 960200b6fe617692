#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use investmatch_backend::{AppState, build_router, config::Config, models::auth::Role};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh in-memory SQLite database with the schema migrated.
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        // bcrypt's minimum cost keeps auth tests fast
        bcrypt_cost: 4,
        default_role: Role::Entrepreneur,
    }
}

/// Router over a fresh database, plus a handle to that database for seeding.
pub async fn build_test_app() -> (Router, DatabaseConnection) {
    let db = setup_test_db().await.expect("Failed to set up test DB");
    let app = build_router(AppState::new(db.clone(), test_config()));
    (app, db)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };

    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub fn entrepreneur_payload(email: &str, sector: &str) -> Value {
    json!({
        "name": "Asha Rao",
        "email": email,
        "phone": "98765 43210",
        "startupStage": "MVP",
        "sector": sector,
        "description": "Low-cost diagnostics kiosks for rural clinics"
    })
}

pub fn idea_payload(title: &str, description: &str, funding_needed: Value) -> Value {
    json!({
        "entrepreneurName": "Asha Rao",
        "ideaTitle": title,
        "description": description,
        "fundingNeeded": funding_needed,
        "email": "asha@example.com"
    })
}

pub fn investor_payload(email: &str, sector_interest: &str, investment_capacity: f64) -> Value {
    json!({
        "name": "Vikram Shah",
        "email": email,
        "phone": 9123456780u64,
        "investmentCapacity": investment_capacity,
        "sectorInterest": sector_interest,
        "investmentType": "Seed",
        "riskTolerance": "High"
    })
}
