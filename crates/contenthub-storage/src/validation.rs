//! Upload validation: declared type, size ceiling and content sniffing.

use image::ImageFormat;

use contenthub_core::error::AppError;
use contenthub_core::result::AppResult;

/// An accepted image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// `image/jpeg`
    Jpeg,
    /// `image/png`
    Png,
    /// `image/webp`
    WebP,
}

impl ImageKind {
    /// Parse a declared MIME type.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::WebP),
            _ => None,
        }
    }

    fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::WebP => Some(Self::WebP),
            _ => None,
        }
    }

    /// Canonical MIME type.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    /// File extension used for stored files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::WebP => "webp",
        }
    }
}

/// Check an uploaded file and return its verified kind.
///
/// The declared type must be JPEG, PNG or WebP, the size must not exceed
/// `max_size_bytes`, and the content's magic bytes must agree with the
/// declared type.
pub fn validate_image(
    declared: Option<&str>,
    data: &[u8],
    max_size_bytes: u64,
) -> AppResult<ImageKind> {
    if data.is_empty() {
        return Err(AppError::validation("file is required"));
    }
    if data.len() as u64 > max_size_bytes {
        return Err(AppError::validation(format!(
            "file exceeds the {} MB limit",
            max_size_bytes / (1024 * 1024)
        )));
    }
    let declared = declared
        .and_then(ImageKind::from_mime)
        .ok_or_else(|| AppError::validation("file must be a JPEG, PNG or WebP image"))?;
    let sniffed = image::guess_format(data)
        .ok()
        .and_then(ImageKind::from_format);
    if sniffed != Some(declared) {
        return Err(AppError::validation("file content does not match its type"));
    }
    Ok(declared)
}
