//! Generic content CRUD: projection, uniqueness, visibility, validation.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_story_resolves_per_request_locale() {
    let app = TestApp::new().await;
    let token = app.login().await;
    app.create(
        &token,
        "stories",
        json!({
            "namesEn": "Chris & Elena",
            "namesAr": "كريس وإيلينا",
            "storyEn": "A garden wedding.",
            "storyAr": "",
        }),
    )
    .await;

    let arabic = app
        .request_with_headers("GET", "/api/stories", None, None, &[("Cookie", "locale=ar")])
        .await;
    let story = &arabic.items()[0];
    assert_eq!(story["names"], "كريس وإيلينا");
    assert_eq!(story["story"], "A garden wedding.");
    assert_eq!(story["namesEn"], "Chris & Elena");
    assert_eq!(story["namesAr"], "كريس وإيلينا");

    let english = app
        .request_with_headers(
            "GET",
            "/api/stories",
            None,
            None,
            &[("Accept-Language", "en-US,en;q=0.9")],
        )
        .await;
    assert_eq!(english.items()[0]["names"], "Chris & Elena");

    let unsupported = app
        .request_with_headers("GET", "/api/stories", None, None, &[("Accept-Language", "fr")])
        .await;
    assert_eq!(unsupported.items()[0]["names"], "Chris & Elena");
}

#[tokio::test]
async fn test_duplicate_slug_conflicts_and_leaves_stored_slug() {
    let app = TestApp::new().await;
    let token = app.login().await;
    app.create(&token, "services", json!({ "nameEn": "Weddings" }))
        .await;

    let duplicate = app
        .request(
            "POST",
            "/api/services",
            Some(json!({ "nameEn": "Weddings" })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert!(
        duplicate.body["error"]
            .as_str()
            .unwrap()
            .contains("weddings")
    );

    let birthdays = app
        .create(&token, "services", json!({ "nameEn": "Birthdays" }))
        .await;
    let renamed = app
        .request(
            "PUT",
            &format!("/api/services/{birthdays}"),
            Some(json!({ "slug": "weddings" })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::CONFLICT);

    let stored = app
        .request("GET", &format!("/api/services/{birthdays}"), None, None)
        .await;
    assert_eq!(stored.body["data"]["slug"], "birthdays");
}

#[tokio::test]
async fn test_slug_is_derived_and_looked_up() {
    let app = TestApp::new().await;
    let token = app.login().await;
    app.create(
        &token,
        "services",
        json!({ "nameEn": "Wedding & Co.", "nameAr": "زفاف" }),
    )
    .await;

    let found = app
        .request_with_headers(
            "GET",
            "/api/services/slug/wedding-co",
            None,
            None,
            &[("Cookie", "locale=ar")],
        )
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["data"]["name"], "زفاف");

    let missing = app
        .request("GET", "/api/services/slug/nope", None, None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["success"], false);
}

#[tokio::test]
async fn test_inactive_items_are_hidden_from_public() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let hidden = app
        .create(
            &token,
            "gallery",
            json!({ "titleEn": "Draft", "image": "/uploads/gallery/a.png", "isActive": false }),
        )
        .await;
    app.create(
        &token,
        "gallery",
        json!({ "titleEn": "Live", "image": "/uploads/gallery/b.png" }),
    )
    .await;

    let public = app.request("GET", "/api/gallery", None, None).await;
    assert_eq!(public.body["count"], 1);
    assert_eq!(public.items()[0]["titleEn"], "Live");

    let public_item = app
        .request("GET", &format!("/api/gallery/{hidden}"), None, None)
        .await;
    assert_eq!(public_item.status, StatusCode::NOT_FOUND);

    let public_override = app
        .request("GET", "/api/gallery?active=false", None, None)
        .await;
    assert_eq!(public_override.body["count"], 1);

    let admin_all = app
        .request("GET", "/api/gallery", None, Some(&token))
        .await;
    assert_eq!(admin_all.body["count"], 2);

    let admin_inactive = app
        .request("GET", "/api/gallery?active=false", None, Some(&token))
        .await;
    assert_eq!(admin_inactive.body["count"], 1);
    assert_eq!(admin_inactive.items()[0]["titleEn"], "Draft");
}

#[tokio::test]
async fn test_validation_names_the_field() {
    let app = TestApp::new().await;
    let token = app.login().await;

    let response = app
        .request("POST", "/api/services", Some(json!({ "nameAr": "زفاف" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "nameEn is required");

    let not_object = app
        .request("POST", "/api/services", Some(json!(["x"])), Some(&token))
        .await;
    assert_eq!(not_object.status, StatusCode::BAD_REQUEST);

    let bad_page = app.request("GET", "/api/events?page=0", None, None).await;
    assert_eq!(bad_page.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_hard_delete() {
    let app = TestApp::new().await;
    let token = app.login().await;
    let id = app
        .create(&token, "gallery-categories", json!({ "nameEn": "Outdoor" }))
        .await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/gallery-categories/{id}"),
            Some(json!({ "nameAr": "خارجي" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["key"], "outdoor");
    assert_eq!(updated.body["data"]["nameAr"], "خارجي");

    let renamed = app
        .request(
            "PUT",
            &format!("/api/gallery-categories/{id}"),
            Some(json!({ "nameEn": "Open Air" })),
            Some(&token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.body["data"]["key"], "outdoor");
    assert_eq!(renamed.body["data"]["nameEn"], "Open Air");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/gallery-categories/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["success"], true);
    assert!(deleted.body["message"].is_string());

    let gone = app
        .request("GET", &format!("/api/gallery-categories/{id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app
        .request(
            "DELETE",
            &format!("/api/gallery-categories/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let missing_update = app
        .request(
            "PUT",
            &format!("/api/gallery-categories/{id}"),
            Some(json!({ "nameEn": "Indoor" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing_update.status, StatusCode::NOT_FOUND);
}
