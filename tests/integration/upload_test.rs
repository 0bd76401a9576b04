//! Image upload validation and serving.

use axum::http::StatusCode;

use crate::helpers::{JPEG, PNG, TestApp};

#[tokio::test]
async fn test_upload_png_and_serve_it() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .upload("/api/gallery/upload", Some(&token), "cover.png", "image/png", PNG)
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["success"], true);
    let url = response.body["imageUrl"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/gallery/"), "{url}");
    assert!(url.ends_with(".png"), "{url}");

    let served = app.request("GET", &url, None, None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.raw, PNG);
}

#[tokio::test]
async fn test_upload_rejects_unsupported_or_mismatched_types() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let text = app
        .upload("/api/services/upload", Some(&token), "notes.txt", "text/plain", b"hello")
        .await;
    assert_eq!(text.status, StatusCode::BAD_REQUEST);

    let disguised = app
        .upload("/api/services/upload", Some(&token), "photo.png", "image/png", JPEG)
        .await;
    assert_eq!(disguised.status, StatusCode::BAD_REQUEST);

    let jpeg = app
        .upload("/api/services/upload", Some(&token), "photo.jpg", "image/jpeg", JPEG)
        .await;
    assert_eq!(jpeg.status, StatusCode::OK);
}

#[tokio::test]
async fn test_upload_enforces_size_limit() {
    let app = TestApp::with_config(|c| c.uploads.max_size_bytes = 32).await;
    let token = app.login().await;

    let mut big = PNG.to_vec();
    big.resize(64, 0);
    let response = app
        .upload("/api/stories/upload", Some(&token), "big.png", "image/png", &big)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_upload_requires_admin() {
    let app = TestApp::new().await;
    let response = app
        .upload("/api/gallery/upload", None, "cover.png", "image/png", PNG)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
