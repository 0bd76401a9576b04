//! Health endpoint.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_collaborators() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["status"], "ok");
    assert_eq!(data["store"]["provider"], "memory");
    assert_eq!(data["store"]["healthy"], true);
    assert_eq!(data["images"]["provider"], "local");
}
