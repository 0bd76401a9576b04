//! Image upload configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded images end up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadProvider {
    /// Files written under `local_dir` and served from `/uploads`.
    #[default]
    Local,
    /// Files forwarded to a remote image-hosting endpoint.
    Remote,
}

/// Image upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Image host implementation.
    #[serde(default)]
    pub provider: UploadProvider,
    /// Maximum accepted file size in bytes.
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
    /// Directory for the local image host.
    #[serde(default = "default_local_dir")]
    pub local_dir: String,
    /// URL prefix under which local uploads are reachable.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Upload endpoint of the remote image host.
    #[serde(default)]
    pub remote_endpoint: String,
    /// API key sent to the remote image host as a bearer token.
    #[serde(default)]
    pub remote_api_key: String,
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            provider: UploadProvider::default(),
            max_size_bytes: default_max_size(),
            local_dir: default_local_dir(),
            public_base_url: default_public_base_url(),
            remote_endpoint: String::new(),
            remote_api_key: String::new(),
        }
    }
}

fn default_max_size() -> u64 {
    10 * 1024 * 1024
}

fn default_local_dir() -> String {
    "data/uploads".to_string()
}

fn default_public_base_url() -> String {
    "/uploads".to_string()
}
