//! API integration tests
//!
//! These expect a server on localhost:8080 backed by a migrated database and
//! signing tokens with the default development secret.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bookstore_server::{config::AppConfig, models::UserClaims};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Sign a token the server accepts, carrying the given roles
fn token(roles: &[&str]) -> String {
    let config = AppConfig::default();
    let secret = std::env::var("JWT_SECRET").unwrap_or(config.auth.jwt_secret.clone());
    UserClaims::new(
        "integration@bookstore.com",
        roles.iter().map(|r| r.to_string()).collect(),
        &config.auth,
        chrono::Duration::hours(1),
    )
    .create_token(&secret)
    .expect("Failed to sign token")
}

async fn create_author(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/api/Authors", BASE_URL))
        .json(&json!({ "firstName": "Frank", "lastName": "Herbert" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No author ID")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_author_lifecycle() {
    let client = Client::new();
    let id = create_author(&client).await;

    let response = client
        .get(format!("{}/api/Authors/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["firstName"], "Frank");
    assert_eq!(body["lastName"], "Herbert");

    let response = client
        .put(format!("{}/api/Authors/{}", BASE_URL, id))
        .json(&json!({ "id": id, "firstName": "Franklin", "lastName": "Herbert" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .delete(format!("{}/api/Authors/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/api/Authors/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_update_author_with_mismatched_id() {
    let client = Client::new();

    let response = client
        .put(format!("{}/api/Authors/1", BASE_URL))
        .json(&json!({ "id": 2, "firstName": "Frank", "lastName": "Herbert" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_book_image_lifecycle() {
    let client = Client::new();
    let admin = token(&["Administrator"]);
    let author_id = create_author(&client).await;
    let first = STANDARD.encode(b"first cover");
    let second = STANDARD.encode(b"second cover");

    let response = client
        .post(format!("{}/api/Books", BASE_URL))
        .bearer_auth(&admin)
        .json(&json!({
            "title": "Dune",
            "year": 1965,
            "isbn": "978-0441013593",
            "image": "dune-a.png",
            "file": first.clone(),
            "authorId": author_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_i64().expect("No book ID");

    let response = client
        .get(format!("{}/api/Books/{}", BASE_URL, book_id))
        .bearer_auth(token(&[]))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["file"], first);
    assert_eq!(body["author"]["lastName"], "Herbert");

    let response = client
        .put(format!("{}/api/Books/{}", BASE_URL, book_id))
        .bearer_auth(&admin)
        .json(&json!({
            "id": book_id,
            "title": "Dune",
            "year": 1965,
            "isbn": "978-0441013593",
            "image": "dune-b.png",
            "file": second.clone(),
            "authorId": author_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/api/Books/{}", BASE_URL, book_id))
        .bearer_auth(token(&[]))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["image"], "dune-b.png");
    assert_eq!(body["file"], second);

    // Cleanup
    let response = client
        .delete(format!("{}/api/Books/{}", BASE_URL, book_id))
        .bearer_auth(&admin)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let _ = client
        .delete(format!("{}/api/Authors/{}", BASE_URL, author_id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/api/Books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .post(format!("{}/api/Books", BASE_URL))
        .bearer_auth(token(&["Customer"]))
        .json(&json!({ "title": "Dune", "isbn": "1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
