//! [`ContentClient`] over the ContentHub REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, multipart};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use contenthub_core::error::{AppError, ErrorKind};
use contenthub_core::result::AppResult;
use contenthub_core::types::pagination::MAX_LIMIT;
use contenthub_core::types::{Document, Fields, Pagination};
use contenthub_entity::EntityDescriptor;

use super::{ContentClient, PendingImage};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<Document>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadEnvelope {
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Talks to `<base_url>/api` with a bearer session token.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpContentClient {
    /// Create an unauthenticated client for the server at `base_url`.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client,
        })
    }

    /// Use an already issued session token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Whether a session token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Log in and keep the issued token for subsequent calls.
    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<()> {
        let response = self
            .request(Method::POST, "auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(transport)?;
        let Envelope { data } = parse::<Envelope<LoginData>>(response).await?;
        self.token = Some(data.token);
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_data(&self, builder: RequestBuilder) -> AppResult<Document> {
        let response = builder.send().await.map_err(transport)?;
        let Envelope { data } = parse::<Envelope<Document>>(response).await?;
        Ok(data)
    }
}

fn transport(e: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ServiceUnavailable,
        "Content API unreachable",
        e,
    )
}

/// Decode a success body, or map the error body onto the matching kind.
async fn parse<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Serialization, "Malformed API response", e)
        });
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|b| b.error)
        .unwrap_or_else(|_| status.to_string());
    let kind = match status {
        StatusCode::BAD_REQUEST => ErrorKind::Validation,
        StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        StatusCode::CONFLICT => ErrorKind::Conflict,
        StatusCode::SERVICE_UNAVAILABLE => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalService,
    };
    Err(AppError::new(kind, message))
}

#[async_trait]
impl ContentClient for HttpContentClient {
    async fn list(&self, entity: &EntityDescriptor) -> AppResult<Vec<Document>> {
        let mut items = Vec::new();
        let mut page = 1u64;
        loop {
            let response = self
                .request(
                    Method::GET,
                    &format!("{}?page={page}&limit={MAX_LIMIT}", entity.path),
                )
                .send()
                .await
                .map_err(transport)?;
            let body = parse::<ListEnvelope>(response).await?;
            items.extend(body.data);
            match body.pagination {
                Some(p) if p.has_next => page += 1,
                _ => break,
            }
        }
        debug!(entity = entity.path, count = items.len(), "Fetched admin listing");
        Ok(items)
    }

    async fn create(&self, entity: &EntityDescriptor, fields: Fields) -> AppResult<Document> {
        self.send_data(
            self.request(Method::POST, entity.path)
                .json(&Value::Object(fields)),
        )
        .await
    }

    async fn update(
        &self,
        entity: &EntityDescriptor,
        id: &str,
        fields: Fields,
    ) -> AppResult<Document> {
        self.send_data(
            self.request(Method::PUT, &format!("{}/{id}", entity.path))
                .json(&Value::Object(fields)),
        )
        .await
    }

    async fn delete(&self, entity: &EntityDescriptor, id: &str) -> AppResult<()> {
        let response = self
            .request(Method::DELETE, &format!("{}/{id}", entity.path))
            .send()
            .await
            .map_err(transport)?;
        parse::<Value>(response).await.map(|_| ())
    }

    async fn upload_image(
        &self,
        entity: &EntityDescriptor,
        image: PendingImage,
    ) -> AppResult<String> {
        let part = multipart::Part::bytes(image.data.to_vec())
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| AppError::validation(format!("invalid content type: {e}")))?;
        let form = multipart::Form::new().part("file", part);
        let response = self
            .request(Method::POST, &format!("{}/upload", entity.path))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        Ok(parse::<UploadEnvelope>(response).await?.image_url)
    }
}
