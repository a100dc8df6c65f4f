//! Common test utilities for integration tests.
//!
//! Integration tests run against the PostgreSQL database named by
//! `TEST_DATABASE_URL`. When it is unset the tests return early.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use corporate_site_api::app::create_app_with_notifier;
use corporate_site_api::config::{
    AdminConfig, Config, EmailConfig, ExportConfig, LoggingConfig, NotificationConfig,
    SecurityConfig, ServerConfig,
};
use domain::services::{InquiryNotifier, MockInquiryNotifier};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use persistence::db::DatabaseConfig;
use persistence::repositories::ApiKeyRepository;
use shared::crypto::{extract_key_prefix, generate_api_key, sha256_hex};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// Connects to the test database and applies migrations.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn test_pool() -> Option<PgPool> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

/// Test configuration with email disabled.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            max_body_size: 1048576,
        },
        database: DatabaseConfig::with_url(std::env::var("TEST_DATABASE_URL").unwrap_or_default()),
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
        email: EmailConfig {
            sender_email: "test@example.com".to_string(),
            sender_name: "Test".to_string(),
            ..EmailConfig::default()
        },
        notification: NotificationConfig {
            admin_email: "ops@example.com".to_string(),
            ..NotificationConfig::default()
        },
        export: ExportConfig::default(),
        admin: AdminConfig::default(),
    }
}

/// Create a test application router that notifies through `notifier`.
pub fn create_test_app(pool: PgPool, notifier: MockInquiryNotifier) -> Router {
    create_app_with_notifier(test_config(), pool, Arc::new(notifier))
}

/// Create a test application router from an explicit configuration.
pub fn create_test_app_with(
    pool: PgPool,
    config: Config,
    notifier: Arc<dyn InquiryNotifier>,
) -> Router {
    create_app_with_notifier(config, pool, notifier)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Adds the admin key header to a request.
pub fn with_admin_key(mut request: Request<Body>, api_key: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert("x-api-key", api_key.parse().unwrap());
    request
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Creates an admin API key and returns its plain-text value.
pub async fn create_admin_key(pool: &PgPool) -> String {
    let api_key = generate_api_key();
    let prefix = extract_key_prefix(&api_key).unwrap().to_string();
    ApiKeyRepository::new(pool.clone())
        .create_admin_key("integration-test", &sha256_hex(&api_key), &prefix)
        .await
        .expect("Failed to create admin key");
    api_key
}

/// Unique marker used to find rows created by one test.
pub fn unique_marker() -> String {
    format!("it-{}", uuid::Uuid::new_v4().simple())
}

/// A valid inquiry payload whose message contains `marker`.
pub fn inquiry_payload(marker: &str) -> serde_json::Value {
    let name: String = Name().fake();
    let company: String = CompanyName().fake();
    serde_json::json!({
        "name": name,
        "company": company,
        "phone": "01012345678",
        "email": "customer@example.com",
        "category": "maintenance",
        "message": format!("서버 점검 요청\n{}", marker),
    })
}
