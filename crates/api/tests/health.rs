//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use std::sync::Arc;

use armory_core::types::DbId;
use armory_db::models::weapon::{CreateWeapon, Weapon};
use armory_db::store::WeaponStore;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

/// Store whose backend is never reachable.
struct UnreachableStore;

#[async_trait::async_trait]
impl WeaponStore for UnreachableStore {
    async fn insert(&self, _input: &CreateWeapon) -> Result<Weapon, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn get_by_id(&self, _id: DbId) -> Result<Option<Weapon>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_all(&self) -> Result<Vec<Weapon>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

#[tokio::test]
async fn health_check_reports_degraded_storage() {
    let app = common::build_test_app(Arc::new(UnreachableStore));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn storage_failure_surfaces_as_sanitized_500() {
    let app = common::build_test_app(Arc::new(UnreachableStore));
    let response = get(app, "/api/v1/weapons").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: Unsupported method on a known route returns 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_on_weapon_returns_405() {
    let app = common::build_test_app(common::memory_store());
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/weapons/1")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::memory_store());
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(common::memory_store());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/weapons")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:5173"
    );
}
