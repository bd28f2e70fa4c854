//! The full-bleed letterhead.
//!
//! Loaded once per generation through the shared image cache, then stretched
//! to the full page bounds immediately after every page is opened and before
//! any foreground drawing. A failed load leaves `apply` a no-op; pages
//! without a letterhead are valid output.

use crate::raster::ImageCache;
use crate::render::DocWriter;
use folio_types::PageMetrics;
use log::debug;

pub(crate) struct Background {
    xobject: Option<String>,
    metrics: PageMetrics,
}

impl Background {
    pub async fn load(
        url: Option<&str>,
        cache: &mut ImageCache,
        writer: &mut DocWriter,
        metrics: PageMetrics,
    ) -> Self {
        let xobject = match url {
            Some(url) => {
                let raster = cache.fetch_and_decode(url).await;
                if raster.is_none() {
                    debug!("letterhead '{}' unavailable, rendering plain pages", url);
                }
                raster.map(|image| writer.register_image(image.as_ref()))
            }
            None => None,
        };
        Self { xobject, metrics }
    }

    pub fn none(metrics: PageMetrics) -> Self {
        Self {
            xobject: None,
            metrics,
        }
    }

    pub fn apply(&self, writer: &mut DocWriter) {
        if let Some(name) = &self.xobject {
            writer.image(name, self.metrics.page_bounds());
        }
    }
}
