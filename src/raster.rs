//! Per-generation image loading and decoding.
//!
//! Every remote raster flows through [`ImageCache`]: one bounded fetch per
//! URL, decoded once, memoized for the lifetime of a single generation,
//! failures included, so a broken image is never retried mid-document.

use folio_traits::ImageSource;
use folio_types::Size;
use futures::future;
use itertools::Itertools;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// A decoded raster, normalized to 8-bit RGB for PDF embedding.
#[derive(Debug, Clone)]
pub(crate) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl DecodedImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgb = image::load_from_memory(bytes)?.to_rgb8();
        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            data: rgb.into_raw(),
        })
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Memoizes fetch-and-decode outcomes by the original URL string.
///
/// Instance-scoped: one cache per generation call, never shared across
/// concurrent generations.
pub(crate) struct ImageCache {
    source: Arc<dyn ImageSource>,
    entries: HashMap<String, Option<Arc<DecodedImage>>>,
}

impl ImageCache {
    pub fn new(source: Arc<dyn ImageSource>) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    /// Returns the decoded raster for `url`, fetching it on first use.
    /// Failures are logged, memoized and surfaced as `None`; they never
    /// abort the generation.
    pub async fn fetch_and_decode(&mut self, url: &str) -> Option<Arc<DecodedImage>> {
        if let Some(cached) = self.entries.get(url) {
            return cached.clone();
        }
        let outcome = self.load(url).await;
        self.entries.insert(url.to_string(), outcome.clone());
        outcome
    }

    /// Cache-only lookup for renderers that must not suspend mid-draw.
    pub fn get(&self, url: &str) -> Option<Arc<DecodedImage>> {
        self.entries.get(url).cloned().flatten()
    }

    /// Resolves a batch of URLs concurrently before synchronous drawing
    /// begins. Each load carries its own timeout; one slow image delays
    /// nothing but itself.
    pub async fn preload<'a, I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let pending: Vec<String> = urls
            .into_iter()
            .filter(|url| !self.entries.contains_key(*url))
            .unique()
            .map(str::to_string)
            .collect();
        if pending.is_empty() {
            return;
        }
        debug!("preloading {} image(s) via {}", pending.len(), self.source.name());

        let outcomes = future::join_all(pending.iter().map(|url| self.load(url))).await;
        for (url, outcome) in pending.into_iter().zip(outcomes) {
            self.entries.insert(url, outcome);
        }
    }

    async fn load(&self, url: &str) -> Option<Arc<DecodedImage>> {
        let bytes = match self.source.fetch(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("image fetch failed for '{}': {}", url, e);
                return None;
            }
        };
        match DecodedImage::decode(&bytes) {
            Ok(decoded) => Some(Arc::new(decoded)),
            Err(e) => {
                warn!("image decode failed for '{}': {}", url, e);
                None
            }
        }
    }

    #[cfg(test)]
    fn cached_outcomes(&self) -> usize {
        self.entries.len()
    }
}
