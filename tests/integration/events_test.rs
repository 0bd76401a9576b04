//! Events listing: discrimination, filters, place search, pagination.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn seed_event(app: &TestApp, token: &str, title: &str, type_en: &str, type_ar: &str, place: &str) {
    app.create(
        token,
        "events",
        json!({
            "titleEn": title,
            "typeEn": type_en,
            "typeAr": type_ar,
            "placeEn": place,
        }),
    )
    .await;
}

#[tokio::test]
async fn test_event_types_live_beside_events_but_apart() {
    let app = TestApp::new().await;
    let token = app.login().await;
    app.create(
        &token,
        "event-types",
        json!({ "titleEn": "Wedding", "titleAr": "زفاف" }),
    )
    .await;
    seed_event(&app, &token, "Gala", "Wedding", "زفاف", "Dama Rose").await;

    let events = app.request("GET", "/api/events", None, None).await;
    assert_eq!(events.body["count"], 1);
    assert_eq!(events.items()[0]["titleEn"], "Gala");

    let with_types = app
        .request("GET", "/api/events?includeEventTypes=true", None, None)
        .await;
    assert_eq!(with_types.body["count"], 2);

    let types = app.request("GET", "/api/event-types", None, None).await;
    assert_eq!(types.body["count"], 1);
    let wedding = &types.items()[0];
    assert_eq!(wedding["titleEn"], "Wedding");
    assert_eq!(wedding["typeEn"], "Wedding");
    assert_eq!(wedding["typeAr"], "زفاف");

    let id = wedding["id"].as_str().unwrap();
    let as_event = app
        .request("GET", &format!("/api/events/{id}"), None, None)
        .await;
    assert_eq!(as_event.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_type_filter_uses_english_value_in_any_locale() {
    let app = TestApp::new().await;
    let token = app.login().await;
    seed_event(&app, &token, "Gala", "Wedding", "زفاف", "Dama Rose").await;
    seed_event(&app, &token, "Summit", "Corporate", "شركات", "Four Seasons").await;

    let arabic = app
        .request_with_headers(
            "GET",
            "/api/events?type=Wedding",
            None,
            None,
            &[("Cookie", "locale=ar")],
        )
        .await;
    assert_eq!(arabic.body["count"], 1);
    assert_eq!(arabic.items()[0]["type"], "زفاف");
    assert_eq!(arabic.items()[0]["typeEn"], "Wedding");

    let english = app
        .request("GET", "/api/events?type=Wedding", None, None)
        .await;
    assert_eq!(english.body["count"], 1);
    assert_eq!(english.items()[0]["type"], "Wedding");

    let display_value = app
        .request("GET", "/api/events?type=%D8%B2%D9%81%D8%A7%D9%81", None, None)
        .await;
    assert_eq!(display_value.body["count"], 0);
}

#[tokio::test]
async fn test_place_search_ignores_case_and_spaces() {
    let app = TestApp::new().await;
    let token = app.login().await;
    seed_event(&app, &token, "Gala", "Wedding", "زفاف", "Dama Rose").await;
    seed_event(&app, &token, "Summit", "Corporate", "شركات", "Four Seasons").await;

    for query in ["damarose", "DAMA%20ROSE", "dama+rose", "Rose"] {
        let response = app
            .request("GET", &format!("/api/events?place={query}"), None, None)
            .await;
        assert_eq!(response.body["count"], 1, "place={query}");
        assert_eq!(response.items()[0]["titleEn"], "Gala");
    }

    let blank = app.request("GET", "/api/events?place=%20", None, None).await;
    assert_eq!(blank.body["count"], 2);
}

#[tokio::test]
async fn test_pagination_envelope() {
    let app = TestApp::new().await;
    let token = app.login().await;
    for i in 0..25 {
        seed_event(&app, &token, &format!("Event {i}"), "Wedding", "زفاف", "Hall").await;
    }

    let last = app
        .request("GET", "/api/events?page=3&limit=10", None, None)
        .await;
    assert_eq!(last.status, StatusCode::OK);
    assert_eq!(last.body["count"], 5);
    let pagination = &last.body["pagination"];
    assert_eq!(pagination["total"], 25);
    assert_eq!(pagination["totalPages"], 3);
    assert_eq!(pagination["hasNext"], false);
    assert_eq!(pagination["hasPrev"], true);

    let first = app.request("GET", "/api/events", None, None).await;
    assert_eq!(first.body["count"], 20);
    assert_eq!(first.body["pagination"]["limit"], 20);
    assert_eq!(first.body["pagination"]["hasNext"], true);
    assert_eq!(first.body["pagination"]["hasPrev"], false);

    let stories = app.request("GET", "/api/stories", None, None).await;
    assert!(stories.body.get("pagination").is_none());
}
