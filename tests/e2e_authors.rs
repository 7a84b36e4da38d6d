// tests/e2e_authors.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;
use support::helpers::{make_test_app, post_json};

#[tokio::test]
async fn create_author_returns_201_with_stored_record() {
    let app = make_test_app();

    let (status, body) = post_json(
        &app.router,
        "/authors",
        json!({
            "name": "A",
            "email": "a@x.com",
            "cellPhoneNumber": "123-456-7890",
            "houseNumber": 12
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "A");
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["cellPhoneNumber"], "123-456-7890");
    assert_eq!(body["houseNumber"], 12);
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn duplicate_email_yields_exactly_one_author_and_400() {
    let app = make_test_app();
    let payload = json!({
        "name": "A",
        "email": "a@x.com",
        "cellPhoneNumber": "123-456-7890"
    });

    let (first, _) = post_json(&app.router, "/authors", payload.clone()).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = post_json(&app.router, "/authors", payload).await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is already registered");

    let stored = app.authors.find_count().await;
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn duplicate_check_is_case_insensitive() {
    let app = make_test_app();

    let (first, _) = post_json(
        &app.router,
        "/authors",
        json!({"name": "A", "email": "A@X.Com", "cellPhoneNumber": "123-456-7890"}),
    )
    .await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = post_json(
        &app.router,
        "/authors",
        json!({"name": "B", "email": "a@x.com", "cellPhoneNumber": "987-654-3210"}),
    )
    .await;
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is already registered");
}

#[tokio::test]
async fn malformed_phone_is_rejected() {
    let app = make_test_app();

    let (status, body) = post_json(
        &app.router,
        "/authors",
        json!({"name": "A", "email": "a@x.com", "cellPhoneNumber": "1234567890"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("is not a valid phone number format")
    );
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = make_test_app();

    let (status, body) = post_json(
        &app.router,
        "/authors",
        json!({"name": "A", "email": "not-an-email", "cellPhoneNumber": "123-456-7890"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("Email is invalid"));
}

#[tokio::test]
async fn missing_fields_report_every_violation_at_once() {
    let app = make_test_app();

    let (status, body) = post_json(&app.router, "/authors", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("name cannot be empty"));
    assert!(message.contains("Email is invalid"));
    assert!(message.contains("phone number format"));
}
