use folio_resource::DEFAULT_TIMEOUT;
use folio_types::PageMetrics;
use std::time::Duration;

/// Static configuration for a [`crate::Composer`].
///
/// Everything here is immutable during a generation; per-call state (cursor,
/// cache, page buffers) lives inside `generate` itself.
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    pub page: PageMetrics,
    /// Letterhead asset, loaded once per generation and reapplied to every
    /// page. `None` renders plain pages.
    pub background_url: Option<String>,
    /// Execution origin for resolving relative upload paths.
    pub origin: Option<String>,
    /// Budget for each individual image load.
    pub image_timeout: Duration,
    pub currency_symbol: String,
    /// Header title used when the record itself carries none.
    pub document_title: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            page: PageMetrics::a4(),
            background_url: None,
            origin: None,
            image_timeout: DEFAULT_TIMEOUT,
            currency_symbol: "$".to_string(),
            document_title: "Sales quote".to_string(),
        }
    }
}
