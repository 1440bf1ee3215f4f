//! HTTP API integration tests
//!
//! Runs the full stack (handlers, service, SQLite store) against an
//! in-process actix-web application.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use shortgic::api;
use shortgic::config::LinkConfig;
use shortgic::services::LinkService;
use shortgic::storage::SeaOrmLinkStore;

async fn temp_service() -> (TempDir, web::Data<LinkService>) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}/links.db", dir.path().display());
    let store = SeaOrmLinkStore::new(&url, "sqlite").await.unwrap();
    let service = web::Data::new(LinkService::new(
        std::sync::Arc::new(store),
        LinkConfig::default(),
    ));
    (dir, service)
}

macro_rules! test_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data($service.clone())
                .configure(api::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_root_get_returns_welcome() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["hello"]["msg"], "welcome on shortgic");
}

#[actix_web::test]
async fn test_create_returns_201_with_link() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"target": "https://example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let link = body["link"].as_str().unwrap();
    assert_eq!(link.len(), 5);
    assert!(
        link.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );
}

#[actix_web::test]
async fn test_redirect_to_stored_target() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"target": "https://example.com/landing"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let link = body["link"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/{}", link))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert_eq!(location, "https://example.com/landing");
}

#[actix_web::test]
async fn test_duplicate_target_returns_400_with_existing_link() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"target": "https://example.com/dup"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let first_link = body["link"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"target": "https://example.com/dup"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "duplicate_url");
    assert_eq!(body["existing_link"], first_link.as_str());
}

#[actix_web::test]
async fn test_info_returns_full_record() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let extras = json!({"campaign": "spring"});
    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"target": "https://example.com/info", "extras": extras}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let link = body["link"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/{}/info", link))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["link"], link.as_str());
    assert_eq!(body["target"], "https://example.com/info");
    assert_eq!(body["extras"], extras);
}

#[actix_web::test]
async fn test_delete_then_resolve_is_404() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/")
        .set_json(json!({"target": "https://example.com/gone"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let link = body["link"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/{}", link))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/{}", link))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_unknown_link_is_404() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::delete().uri("/AAAAA").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "link_not_found");
}

#[actix_web::test]
async fn test_malformed_identifier_is_400() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    // Wrong length
    let req = test::TestRequest::get().uri("/abc/info").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_link_format");

    // Non-alphanumeric
    let req = test::TestRequest::delete().uri("/AB-DE").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_resolve_on_empty_store_is_404() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/AAAAA").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_target_url_is_400() {
    let (_dir, service) = temp_service().await;
    let app = test_app!(service);

    for target in ["ftp://example.com", "javascript:alert(1)", "not a url"] {
        let req = test::TestRequest::post()
            .uri("/")
            .set_json(json!({"target": target}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::BAD_REQUEST,
            "target {:?} should be rejected",
            target
        );
    }
}
