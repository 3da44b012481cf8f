//! Integration tests for the HTTP surface, driven through the full router
//! wired to the in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use eventline_api::router::build_router;
use eventline_api::state::AppState;
use eventline_core::config::AppConfig;
use eventline_database::store::Stores;

/// Test application context
struct TestApp {
    /// The Axum router for making test requests
    router: Router,
}

/// Status and parsed JSON body of a test response
struct TestResponse {
    status: StatusCode,
    body: Value,
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "test-secret".to_string();
    config
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    fn new() -> Self {
        Self::with_config(test_config())
    }

    fn with_config(config: AppConfig) -> Self {
        let state = AppState::new(Arc::new(config), Stores::in_memory());
        Self {
            router: build_router(state),
        }
    }

    async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };

        TestResponse { status, body }
    }

    /// Register a user and return the created record
    async fn register(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/register",
                Some(json!({ "name": name, "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body
    }

    /// Log in and return the bearer token
    async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["token"].as_str().expect("token").to_string()
    }
}

fn message(response: &TestResponse) -> &str {
    response.body["message"].as_str().expect("message field")
}

#[tokio::test]
async fn test_register_creates_user_without_exposing_hash() {
    let app = TestApp::new();

    let user = app.register("A", "a@b.com", "x").await;

    assert!(user["id"].is_string());
    assert_eq!(user["name"], "A");
    assert_eq!(user["email"], "a@b.com");
    assert_eq!(user["failedAttempts"], 0);
    assert_eq!(user["isLocked"], false);
    assert!(user["createdAt"].is_string());
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_twice_reports_existing_user() {
    let app = TestApp::new();
    app.register("A", "a@b.com", "x").await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(json!({ "name": "A", "email": "a@b.com", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "user already exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/register",
            Some(json!({ "email": "a@b.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "name, email and password required");
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/register",
            Some(json!({ "name": "A", "email": "not-an-email", "password": "x" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "invalid email format");
}

#[tokio::test]
async fn test_login_returns_token() {
    let app = TestApp::new();
    app.register("A", "a@b.com", "hunter2").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "a@b.com", "password": "hunter2" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(message(&response), "login successful");
    assert!(response.body["token"].is_string());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register("A", "a@b.com", "hunter2").await;

    let unknown = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "nobody@b.com", "password": "hunter2" })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "a@b.com", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong.body);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/login", Some(json!({ "email": "a@b.com" })), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "email and password required");
}

#[tokio::test]
async fn test_lockout_after_repeated_failures() {
    let app = TestApp::new();
    app.register("A", "a@b.com", "hunter2").await;

    let wrong = json!({ "email": "a@b.com", "password": "wrong" });

    // Six straight failures; all report invalid credentials, the sixth
    // one locks the account as a side effect.
    for _ in 0..6 {
        let response = app.request("POST", "/login", Some(wrong.clone()), None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    // Inside the lockout window even the correct password is rejected.
    let locked = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "a@b.com", "password": "hunter2" })),
            None,
        )
        .await;
    assert_eq!(locked.status, StatusCode::FORBIDDEN);

    let locked = app.request("POST", "/login", Some(wrong), None).await;
    assert_eq!(locked.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_lockout_expiry_allows_login_again() {
    // Zero-minute lockout: the window is already over at the next attempt.
    let mut config = test_config();
    config.auth.lockout_minutes = 0;
    let app = TestApp::with_config(config);
    app.register("A", "a@b.com", "hunter2").await;

    for _ in 0..6 {
        let response = app
            .request(
                "POST",
                "/login",
                Some(json!({ "email": "a@b.com", "password": "wrong" })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "a@b.com", "password": "hunter2" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_events_empty() {
    let app = TestApp::new();

    let response = app.request("GET", "/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 0);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 10);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_list_events_rejects_bad_pagination() {
    let app = TestApp::new();

    for path in ["/events?page=0", "/events?limit=0", "/events?page=-1&limit=5"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(message(&response), "page and limit must be positive integers.");
    }
}

#[tokio::test]
async fn test_event_crud_roundtrip() {
    let app = TestApp::new();
    let user = app.register("John Doe", "john.doe@example.com", "x").await;
    let token = app.login("john.doe@example.com", "x").await;
    let user_id = user["id"].as_str().expect("user id");

    // Create
    let created = app
        .request(
            "POST",
            "/events",
            Some(json!({
                "title": "Music Festival",
                "description": "Annual open-air festival",
                "date": "2025-12-01T18:00:00.000Z",
                "createdBy": user_id,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["title"], "Music Festival");
    assert_eq!(created.body["createdBy"], user_id);
    let event_id = created.body["id"].as_str().expect("event id").to_string();

    // Get: annotated with the creator's id and name
    let fetched = app
        .request("GET", &format!("/events/{event_id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["title"], "Music Festival");
    assert_eq!(fetched.body["user"]["id"], user_id);
    assert_eq!(fetched.body["user"]["name"], "John Doe");

    // List
    let listed = app.request("GET", "/events", None, None).await;
    assert_eq!(listed.body["total"], 1);
    assert_eq!(listed.body["data"][0]["id"], event_id.as_str());

    // Partial update
    let updated = app
        .request(
            "PUT",
            &format!("/events/{event_id}"),
            Some(json!({ "title": "Conference 2026" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["title"], "Conference 2026");
    assert_eq!(updated.body["description"], "Annual open-air festival");

    // Empty title is treated as not supplied
    let unchanged = app
        .request(
            "PUT",
            &format!("/events/{event_id}"),
            Some(json!({ "title": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(unchanged.status, StatusCode::OK);
    assert_eq!(unchanged.body["title"], "Conference 2026");

    // Delete: empty body, second attempt reports not found
    let deleted = app
        .request("DELETE", &format!("/events/{event_id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body, Value::Null);

    let again = app
        .request("DELETE", &format!("/events/{event_id}"), None, Some(&token))
        .await;
    assert_eq!(again.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&again),
        format!("Event No. {event_id} not found")
    );

    let gone = app
        .request("GET", &format!("/events/{event_id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_event_mutation_requires_bearer_token() {
    let app = TestApp::new();

    for (method, path) in [
        ("POST", "/events"),
        ("PUT", "/events/00000000-0000-0000-0000-000000000000"),
        ("DELETE", "/events/00000000-0000-0000-0000-000000000000"),
    ] {
        let missing = app.request(method, path, Some(json!({})), None).await;
        assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
        assert_eq!(message(&missing), "Unauthorized");

        let invalid = app
            .request(method, path, Some(json!({})), Some("not-a-token"))
            .await;
        assert_eq!(invalid.status, StatusCode::UNAUTHORIZED);
        assert_eq!(message(&invalid), "Unauthorized");
    }
}

#[tokio::test]
async fn test_create_event_validation() {
    let app = TestApp::new();
    let user = app.register("A", "a@b.com", "x").await;
    let token = app.login("a@b.com", "x").await;
    let user_id = user["id"].as_str().expect("user id");

    // Missing required fields
    let response = app
        .request(
            "POST",
            "/events",
            Some(json!({ "title": "No date" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "Fields 'title', 'date', 'createdBy' required");

    // Unparseable date
    let response = app
        .request(
            "POST",
            "/events",
            Some(json!({
                "title": "t",
                "date": "next friday",
                "createdBy": user_id,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&response),
        "invalid date format, required YYYY-MM-DDTHH:mm:ss.sssZ"
    );

    // Unknown creator
    let ghost = "11111111-1111-1111-1111-111111111111";
    let response = app
        .request(
            "POST",
            "/events",
            Some(json!({
                "title": "t",
                "date": "2025-12-01T18:00:00.000Z",
                "createdBy": ghost,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), format!("User with id {ghost} not found"));
}

#[tokio::test]
async fn test_get_event_with_unknown_or_malformed_id() {
    let app = TestApp::new();

    let ghost = "11111111-1111-1111-1111-111111111111";
    let response = app
        .request("GET", &format!("/events/{ghost}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), format!("Event No. {ghost} not found"));

    let response = app.request("GET", "/events/not-a-uuid", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&response), "Event No. not-a-uuid not found");
}

#[tokio::test]
async fn test_users_listing_and_creation() {
    let app = TestApp::new();
    app.register("A", "a@b.com", "x").await;
    let token = app.login("a@b.com", "x").await;

    let unauthenticated = app.request("GET", "/users", None, None).await;
    assert_eq!(unauthenticated.status, StatusCode::UNAUTHORIZED);
    assert_eq!(message(&unauthenticated), "Unauthorized");

    let listed = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let users = listed.body.as_array().expect("array");
    assert_eq!(users.len(), 1);
    assert!(users[0].get("passwordHash").is_none());

    let created = app
        .request(
            "POST",
            "/users",
            Some(json!({ "name": "B", "email": "b@b.com", "password": "y" })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let listed = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(listed.body.as_array().expect("array").len(), 2);

    // Same register semantics, including the duplicate check
    let duplicate = app
        .request(
            "POST",
            "/users",
            Some(json!({ "name": "B", "email": "b@b.com", "password": "y" })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(message(&duplicate), "user already exists");
}

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}
