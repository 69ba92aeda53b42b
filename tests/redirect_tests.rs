//! Redirect handler tests.
//!
//! The critical path: short code → 302 with click recorded.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use tempfile::TempDir;

use linklet::config::Config;
use linklet::repository::{LinkStore, SeaOrmRepository};
use linklet::services;

async fn setup() -> (TempDir, Arc<dyn LinkStore>, Config) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("redirect_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let repository = SeaOrmRepository::new(&db_url)
        .await
        .expect("Failed to create repository");

    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 8080,
        database_url: db_url,
        public_base_url: "http://localhost:8080".to_string(),
    };

    (temp_dir, Arc::new(repository), config)
}

macro_rules! test_app {
    ($store:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store.clone()))
                .app_data(web::Data::new($config.clone()))
                .app_data(web::Data::new(services::AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(services::routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_redirect_known_code() {
    let (_dir, store, config) = setup().await;
    store
        .create("abc123", "https://example.com/landing")
        .await
        .expect("create failed");

    let app = test_app!(store, config);

    let resp = test::call_service(&app, TestRequest::get().uri("/abc123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get("Location").unwrap(),
        "https://example.com/landing"
    );

    let link = store.get("abc123").await.expect("get failed");
    assert_eq!(link.total_clicks, 1);
    assert!(link.last_clicked.is_some());
}

#[actix_web::test]
async fn test_redirect_counts_every_hit() {
    let (_dir, store, config) = setup().await;
    store
        .create("abc123", "https://example.com")
        .await
        .expect("create failed");

    let app = test_app!(store, config);

    for _ in 0..5 {
        let resp = test::call_service(&app, TestRequest::get().uri("/abc123").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }

    let link = store.get("abc123").await.expect("get failed");
    assert_eq!(link.total_clicks, 5);
}

#[actix_web::test]
async fn test_redirect_unknown_code_is_404() {
    let (_dir, store, config) = setup().await;
    store
        .create("abc123", "https://example.com")
        .await
        .expect("create failed");

    let app = test_app!(store, config);

    let resp = test::call_service(&app, TestRequest::get().uri("/zzzzzz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get("Location").is_none());
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/plain; charset=utf-8"
    );

    // The miss must not touch any stored row.
    let link = store.get("abc123").await.expect("get failed");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}

#[actix_web::test]
async fn test_redirect_is_case_sensitive() {
    let (_dir, store, config) = setup().await;
    store
        .create("abc123", "https://example.com")
        .await
        .expect("create failed");

    let app = test_app!(store, config);

    let resp = test::call_service(&app, TestRequest::get().uri("/ABC123").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_fixed_routes_take_precedence() {
    let (_dir, store, config) = setup().await;

    let app = test_app!(store, config);

    // /healthz and / are fixed routes, never treated as codes.
    let resp = test::call_service(&app, TestRequest::get().uri("/healthz").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
