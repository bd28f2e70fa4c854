//! ImageSource trait for abstracting remote image loading.
//!
//! The engine fetches rasters (item thumbnails, customization photos, the
//! letterhead background) through this seam so generation never depends on a
//! live network: tests and embedded callers swap in the in-memory source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for image loading operations.
///
/// These never reach the engine's callers: every fetch failure degrades to a
/// placeholder at the composition layer.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("image not found: {0}")]
    NotFound(String),

    #[error("invalid image url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request for '{url}' failed: {message}")]
    Http { url: String, message: String },

    #[error("request for '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    #[error("request for '{url}' timed out")]
    Timeout { url: String },
}

/// A single bounded attempt to load the raw bytes behind an image URL.
///
/// Implementations own their timeout policy; callers never retry. URLs may be
/// absolute (`https://...`) or origin-relative upload paths (`/uploads/x.png`)
/// depending on what the implementation supports.
#[async_trait]
pub trait ImageSource: Send + Sync + Debug {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// An in-memory image source, pre-populated before use.
///
/// The simplest implementation; every URL is a plain map key. Used by the
/// integration tests and by callers that already hold their assets.
#[derive(Debug, Default)]
pub struct InMemoryImageSource {
    images: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, url: impl Into<String>, bytes: Vec<u8>) {
        if let Ok(mut images) = self.images.write() {
            images.insert(url.into(), bytes);
        }
    }

    pub fn len(&self) -> usize {
        self.images.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.images.read().map(|m| m.is_empty()).unwrap_or(true)
    }
}

#[async_trait]
impl ImageSource for InMemoryImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let images = self.images.read().map_err(|_| FetchError::Http {
            url: url.to_string(),
            message: "image store lock poisoned".to_string(),
        })?;
        images
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }

    fn name(&self) -> &'static str {
        "InMemoryImageSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_source_add_and_fetch() {
        let source = InMemoryImageSource::new();
        source.add("/uploads/logo.png", b"not really a png".to_vec());

        let bytes = source.fetch("/uploads/logo.png").await.unwrap();
        assert_eq!(bytes, b"not really a png");
    }

    #[tokio::test]
    async fn test_in_memory_source_not_found() {
        let source = InMemoryImageSource::new();
        let result = source.fetch("/uploads/missing.png").await;
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_in_memory_source_overwrite() {
        let source = InMemoryImageSource::new();
        source.add("a.png", b"old".to_vec());
        source.add("a.png", b"new".to_vec());

        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch("a.png").await.unwrap(), b"new");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            url: "https://cdn.example/x.png".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("404"));

        let err = FetchError::Timeout {
            url: "/uploads/slow.png".to_string(),
        };
        assert!(err.to_string().contains("timed out"));
    }
}
