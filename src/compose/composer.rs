//! The orchestrator: load phase, then the fixed render order, then
//! serialization.
//!
//! Per-call state (writer, cache, cursor) is created inside `generate` and
//! dropped with it, so one `Composer` can serve concurrent requests without
//! sharing cursor or cache state between them.

use crate::compose::background::Background;
use crate::compose::cursor::Cursor;
use crate::compose::sections::{branch_box, gallery, header, notes, parties, payment, table, totals};
use crate::compose::Frame;
use crate::config::ComposerConfig;
use crate::error::ComposeError;
use crate::raster::ImageCache;
use crate::render::DocWriter;
use folio_resource::HttpImageSource;
use folio_traits::ImageSource;
use folio_types::{DocumentRecord, PageMetrics, Party};
use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;

pub struct Composer {
    config: ComposerConfig,
    source: Arc<dyn ImageSource>,
}

impl Composer {
    pub fn builder() -> ComposerBuilder {
        ComposerBuilder::new()
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Renders `record` to PDF bytes.
    ///
    /// Missing optional data degrades with a logged warning; failed image
    /// loads degrade to placeholders. The result is always a structurally
    /// complete document or an assembly error, never partial output.
    pub async fn generate(&self, record: &DocumentRecord) -> Result<Vec<u8>, ComposeError> {
        debug!(
            "composing document '{}' with {} item(s) via {}",
            record.number,
            record.items.len(),
            self.source.name()
        );

        let page = self.config.page;
        let mut writer = DocWriter::new(page);
        let mut cache = ImageCache::new(Arc::clone(&self.source));

        // Load phase: the letterhead comes first so page one can use it.
        let background = Background::load(
            self.config.background_url.as_deref(),
            &mut cache,
            &mut writer,
            page,
        )
        .await;

        writer.new_page();
        background.apply(&mut writer);

        // Pinned to page one, before the flowing cursor exists.
        match &record.branch {
            Some(branch) if branch.pin_to_first_page => {
                branch_box::render(&mut writer, &self.config, branch);
            }
            Some(_) => {}
            None => warn!(
                "document '{}' has no branch, skipping letterhead box",
                record.number
            ),
        }

        let mut cursor = Cursor::new(page);
        let mut frame = Frame {
            writer: &mut writer,
            cursor: &mut cursor,
            background: &background,
            config: &self.config,
        };

        header::render(&mut frame, record);

        let client = record.client.clone().unwrap_or_else(|| {
            warn!("document '{}' has no client, rendering empty block", record.number);
            Party::default()
        });
        let counterpart = record.counterpart.clone().unwrap_or_else(|| {
            warn!(
                "document '{}' has no counterpart, rendering empty block",
                record.number
            );
            Party::default()
        });
        parties::render(&mut frame, &client, &counterpart);

        if record.items.is_empty() {
            warn!("document '{}' has no line items", record.number);
        }

        // Batch-resolve every thumbnail before the table draws: row drawing
        // is synchronous and must never wait on the network.
        let thumbnails = record
            .items
            .iter()
            .filter_map(|item| item.thumbnail_url.as_deref());
        cache.preload(thumbnails).await;

        table::render(&mut frame, &cache, &record.items);
        totals::render(&mut frame, record);
        payment::render(&mut frame, record);
        if let Some(text) = record.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            notes::render(&mut frame, text);
        }
        gallery::render(&mut frame, &mut cache, &record.items).await;

        drop(frame);
        let bytes = writer.finish()?;
        debug!(
            "document '{}' serialized to {} byte(s)",
            record.number,
            bytes.len()
        );
        Ok(bytes)
    }
}

/// Configures and builds a [`Composer`], mirroring how the rest of the
/// application wires its pipelines.
pub struct ComposerBuilder {
    config: ComposerConfig,
    source: Option<Arc<dyn ImageSource>>,
}

impl ComposerBuilder {
    pub fn new() -> Self {
        Self {
            config: ComposerConfig::default(),
            source: None,
        }
    }

    pub fn with_page_metrics(mut self, page: PageMetrics) -> Self {
        self.config.page = page;
        self
    }

    pub fn with_background_url(mut self, url: impl Into<String>) -> Self {
        self.config.background_url = Some(url.into());
        self
    }

    /// Execution origin for resolving relative upload paths, e.g.
    /// `https://shop.example.com`.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.origin = Some(origin.into());
        self
    }

    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.config.image_timeout = timeout;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.config.document_title = title.into();
        self
    }

    /// Replaces the default HTTP source; the timeout and origin settings
    /// apply to the default source only.
    pub fn with_image_source(mut self, source: Arc<dyn ImageSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(self) -> Result<Composer, ComposeError> {
        let source = match self.source {
            Some(source) => source,
            None => {
                let mut http = HttpImageSource::with_timeout(self.config.image_timeout);
                if let Some(origin) = &self.config.origin {
                    http = http
                        .with_origin(origin)
                        .map_err(|e| ComposeError::Config(e.to_string()))?;
                }
                Arc::new(http)
            }
        };
        Ok(Composer {
            config: self.config,
            source,
        })
    }
}

impl Default for ComposerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
