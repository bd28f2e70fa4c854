//! HTTP-backed image source.
//!
//! Resolves origin-relative upload paths against a configured execution
//! origin, accepts absolute cross-origin URLs verbatim, and bounds every
//! request with its own timeout. One attempt per URL, no retries; the caller
//! caches outcomes, including failures.

use async_trait::async_trait;
use folio_traits::{FetchError, ImageSource};
use log::debug;
use reqwest::{Client, Url};
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// An image source that fetches over HTTP(S).
///
/// Origin-relative paths (`/uploads/chair.png`) are joined onto the
/// configured origin; without an origin they are rejected as invalid rather
/// than guessed at.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: Client,
    origin: Option<Url>,
    timeout: Duration,
}

impl HttpImageSource {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            origin: None,
            timeout,
        }
    }

    /// Sets the execution origin used to resolve relative upload paths.
    pub fn with_origin(mut self, origin: &str) -> Result<Self, FetchError> {
        let parsed = Url::parse(origin).map_err(|e| FetchError::InvalidUrl {
            url: origin.to_string(),
            message: e.to_string(),
        })?;
        self.origin = Some(parsed);
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        if url.starts_with("http://") || url.starts_with("https://") {
            return Url::parse(url).map_err(|e| FetchError::InvalidUrl {
                url: url.to_string(),
                message: e.to_string(),
            });
        }
        match &self.origin {
            Some(origin) => origin.join(url).map_err(|e| FetchError::InvalidUrl {
                url: url.to_string(),
                message: e.to_string(),
            }),
            None => Err(FetchError::InvalidUrl {
                url: url.to_string(),
                message: "relative path with no origin configured".to_string(),
            }),
        }
    }

    async fn get(&self, url: &str, resolved: Url) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(resolved)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}

impl Default for HttpImageSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resolved = self.resolve(url)?;
        debug!("fetching image '{}' as '{}'", url, resolved);

        // Each load races its own timer; a slow image never delays another.
        match tokio::time::timeout(self.timeout, self.get(url, resolved)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                url: url.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "HttpImageSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_url_passes_through() {
        let source = HttpImageSource::new();
        let url = source.resolve("https://cdn.example.com/img/a.png").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/img/a.png");
    }

    #[test]
    fn test_resolve_relative_against_origin() {
        let source = HttpImageSource::new()
            .with_origin("https://shop.example.com")
            .unwrap();
        let url = source.resolve("/uploads/chair.png").unwrap();
        assert_eq!(url.as_str(), "https://shop.example.com/uploads/chair.png");
    }

    #[test]
    fn test_resolve_relative_without_origin_is_rejected() {
        let source = HttpImageSource::new();
        let result = source.resolve("/uploads/chair.png");
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[test]
    fn test_resolve_rejects_invalid_origin() {
        let result = HttpImageSource::new().with_origin("not a url");
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_fetch_times_out_on_unroutable_host() {
        let source = HttpImageSource::with_timeout(Duration::from_millis(50));
        // RFC 5737 TEST-NET address; nothing answers, so the timer wins.
        let result = source.fetch("http://192.0.2.1/img.png").await;
        assert!(matches!(
            result,
            Err(FetchError::Timeout { .. }) | Err(FetchError::Http { .. })
        ));
    }
}
