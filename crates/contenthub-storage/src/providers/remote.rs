//! Remote image host reached over HTTP.
//!
//! The endpoint receives a multipart form with a `file` part and a `folder`
//! field, authenticated with a bearer API key, and answers with
//! `{ "url": ..., "key": ... }`. Deletion is `DELETE <endpoint>/<key>`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, multipart};
use serde::Deserialize;
use tracing::{debug, warn};

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::traits::{ImageHost, ImageUpload, StoredImage};

use super::sanitize_folder;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(alias = "secure_url")]
    url: String,
    #[serde(alias = "public_id")]
    key: String,
}

/// Forwards uploads to a third-party image hosting API.
#[derive(Debug, Clone)]
pub struct RemoteImageHost {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl RemoteImageHost {
    /// Create a client for `endpoint`.
    pub fn new(endpoint: &str, api_key: &str) -> AppResult<Self> {
        if endpoint.trim().is_empty() {
            return Err(AppError::configuration(
                "uploads.remote_endpoint is required for the remote image host",
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    fn upstream(message: &str, e: reqwest::Error) -> AppError {
        AppError::with_source(ErrorKind::ExternalService, message.to_string(), e)
    }
}

#[async_trait]
impl ImageHost for RemoteImageHost {
    fn provider_type(&self) -> &str {
        "remote"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head(&self.endpoint).send().await {
            Ok(response) => Ok(!response.status().is_server_error()),
            Err(e) => {
                warn!(error = %e, "Remote image host unreachable");
                Ok(false)
            }
        }
    }

    async fn upload(&self, upload: ImageUpload) -> AppResult<StoredImage> {
        let size = upload.data.len();
        let part = multipart::Part::bytes(upload.data.to_vec())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.content_type)
            .map_err(|e| Self::upstream("Invalid upload content type", e))?;
        let form = multipart::Form::new()
            .text("folder", sanitize_folder(&upload.folder))
            .part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::upstream("Image host request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Image host rejected upload with status {status}"
            )));
        }
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| Self::upstream("Image host returned an invalid response", e))?;

        debug!(key = %body.key, bytes = size, "Uploaded image to remote host");
        Ok(StoredImage {
            url: body.url,
            key: body.key,
        })
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let response = self
            .client
            .delete(format!("{}/{}", self.endpoint, key.trim_start_matches('/')))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| Self::upstream("Image host request failed", e))?;
        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::NOT_FOUND {
            Ok(())
        } else {
            Err(AppError::external_service(format!(
                "Image host rejected delete with status {status}"
            )))
        }
    }
}
