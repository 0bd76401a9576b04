//! Admin login, session transport, and the uniform 401.

use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use serde_json::json;

use crate::helpers::{ADMIN_PASSWORD, ADMIN_USERNAME, TestApp};

#[tokio::test]
async fn test_login_sets_cookie_and_returns_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert_eq!(response.body["data"]["username"], ADMIN_USERNAME);
    let cookie = response.headers[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("admin_session="));
    assert!(cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let app = TestApp::new().await;

    for (username, password) in [(ADMIN_USERNAME, "wrong"), ("nobody", ADMIN_PASSWORD)] {
        let response = app
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, json!({ "success": false, "error": "Unauthorized" }));
    }
}

#[tokio::test]
async fn test_login_requires_fields() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "", "password": "" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_writes_without_valid_session_are_rejected() {
    let app = TestApp::new().await;
    let body = json!({ "namesEn": "Chris & Elena" });

    let missing = app
        .request("POST", "/api/stories", Some(body.clone()), None)
        .await;
    let forged = app
        .request("POST", "/api/stories", Some(body), Some("not-a-jwt"))
        .await;
    let delete = app
        .request("DELETE", "/api/stories/anything", None, None)
        .await;

    for response in [missing, forged, delete] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, json!({ "success": false, "error": "Unauthorized" }));
    }
}

#[tokio::test]
async fn test_invalid_token_degrades_to_public_on_reads() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", "/api/stories", None, Some("expired-or-forged"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 0);
}

#[tokio::test]
async fn test_session_cookie_authenticates() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let cookie = format!("admin_session={token}");

    let session = app
        .request_with_headers("GET", "/api/auth/session", None, None, &[("Cookie", &cookie)])
        .await;
    assert_eq!(session.body["data"]["authenticated"], true);
    assert_eq!(session.body["data"]["username"], ADMIN_USERNAME);

    let created = app
        .request_with_headers(
            "POST",
            "/api/stories",
            Some(json!({ "namesEn": "Chris & Elena" })),
            None,
            &[("Cookie", &cookie)],
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_anonymous_session_and_logout() {
    let app = TestApp::new().await;

    let session = app.request("GET", "/api/auth/session", None, None).await;
    assert_eq!(session.body["data"]["authenticated"], false);
    assert_eq!(session.body["data"]["locale"], "en");
    assert_eq!(session.body["data"]["direction"], "ltr");

    let arabic = app
        .request_with_headers("GET", "/api/auth/session", None, None, &[("Cookie", "locale=ar")])
        .await;
    assert_eq!(arabic.body["data"]["locale"], "ar");
    assert_eq!(arabic.body["data"]["direction"], "rtl");

    let logout = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(logout.status, StatusCode::OK);
    let cookie = logout.headers[SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("admin_session="));
}
