//! Settings singletons.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_settings_defaults_then_upsert() {
    let app = TestApp::new().await;

    let empty = app.request("GET", "/api/homepage", None, None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body["data"]["heroTitle"], "");

    let body = json!({ "heroTitleEn": "Moments", "heroTitleAr": "لحظات" });
    let anonymous = app
        .request("PUT", "/api/homepage", Some(body.clone()), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let token = app.login().await;
    let saved = app
        .request("PUT", "/api/homepage", Some(body), Some(&token))
        .await;
    assert_eq!(saved.status, StatusCode::OK);

    let arabic = app
        .request_with_headers("GET", "/api/homepage", None, None, &[("Cookie", "locale=ar")])
        .await;
    assert_eq!(arabic.body["data"]["heroTitle"], "لحظات");
    assert_eq!(arabic.body["data"]["heroTitleEn"], "Moments");

    let partial = app
        .request(
            "PUT",
            "/api/homepage",
            Some(json!({ "heroSubtitleEn": "Since 2010" })),
            Some(&token),
        )
        .await;
    assert_eq!(partial.body["data"]["heroTitleEn"], "Moments");
    assert_eq!(partial.body["data"]["heroSubtitle"], "Since 2010");
}

#[tokio::test]
async fn test_settings_pages_are_independent() {
    let app = TestApp::new().await;
    let token = app.login().await;
    app.request(
        "PUT",
        "/api/services-page",
        Some(json!({ "heroTitleEn": "Our services" })),
        Some(&token),
    )
    .await;

    let events_page = app.request("GET", "/api/events-page", None, None).await;
    assert_eq!(events_page.body["data"]["heroTitle"], "");
    let services_page = app.request("GET", "/api/services-page", None, None).await;
    assert_eq!(services_page.body["data"]["heroTitle"], "Our services");
}
