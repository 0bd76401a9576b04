//! Image host implementations.

pub mod local;
pub mod remote;

pub use local::LocalImageHost;
pub use remote::RemoteImageHost;

/// Reduce a folder name to `[a-z0-9-]`, defaulting to `misc`.
pub(crate) fn sanitize_folder(folder: &str) -> String {
    let clean: String = folder
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if clean.is_empty() {
        "misc".to_string()
    } else {
        clean
    }
}
