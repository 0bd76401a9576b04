//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use contenthub_api::AppState;
use contenthub_auth::PasswordHasher;
use contenthub_core::config::{AppConfig, StoreProvider, UploadProvider};
use contenthub_database::MemoryDocumentStore;
use contenthub_storage::ImageHostManager;

/// Admin credentials configured for every test app.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// Smallest byte strings `image::guess_format` recognizes.
pub const PNG: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D, b'I', b'H', b'D', b'R',
];
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0x00];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    _uploads: TempDir,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Create a test application after adjusting the default test config.
    pub async fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let uploads = TempDir::new().expect("Failed to create upload dir");

        let mut config = AppConfig::default();
        config.store.provider = StoreProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();
        config.auth.admin_username = ADMIN_USERNAME.to_string();
        config.auth.admin_password_hash = PasswordHasher::new()
            .hash_password(ADMIN_PASSWORD)
            .expect("Failed to hash password");
        config.uploads.provider = UploadProvider::Local;
        config.uploads.local_dir = uploads.path().to_string_lossy().into_owned();
        adjust(&mut config);

        let images = ImageHostManager::from_config(&config.uploads)
            .await
            .expect("Failed to init image host");
        let state = AppState::new(config.clone(), Arc::new(MemoryDocumentStore::new()), images);
        let router = contenthub_api::router::build_router(state);

        Self {
            router,
            config,
            _uploads: uploads,
        }
    }

    /// Login and return the session token
    pub async fn login(&self) -> String {
        let body = serde_json::json!({
            "username": ADMIN_USERNAME,
            "password": ADMIN_PASSWORD,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Create an item as admin and return its id.
    pub async fn create(&self, token: &str, entity: &str, body: Value) -> String {
        let response = self
            .request("POST", &format!("/api/{entity}"), Some(body), Some(token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_str()
            .expect("No id in create response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_headers(method, path, body, token, &[])
            .await
    }

    /// Make an HTTP request with extra headers
    pub async fn request_with_headers(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        for (name, value) in headers {
            req = req.header(*name, *value);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload one file as a multipart form.
    pub async fn upload(
        &self,
        path: &str,
        token: Option<&str>,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let boundary = "contenthub-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            );
        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        let req = req.body(Body::from(body)).expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            raw: body_bytes.to_vec(),
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body bytes
    pub raw: Vec<u8>,
}

impl TestResponse {
    /// `data` as an array of items.
    pub fn items(&self) -> &Vec<Value> {
        self.body["data"].as_array().expect("data is not an array")
    }
}
