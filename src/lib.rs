//! Folio turns a fully-assembled order/quote record into a paginated,
//! print-ready PDF: a full-bleed letterhead repeated on every page, a fixed
//! branch box on page one, flowing header/parties/table/totals sections, and
//! remote images fetched with per-resource timeouts and cached per call.
//!
//! The engine never talks to a data store; the caller hands it a complete
//! [`DocumentRecord`] snapshot and receives bytes:
//!
//! ```ignore
//! let bytes = folio::generate(&record).await?;
//! ```
//!
//! For custom page metrics, letterheads, origins or image sources, build a
//! [`Composer`] explicitly:
//!
//! ```ignore
//! let composer = Composer::builder()
//!     .with_origin("https://shop.example.com")
//!     .with_background_url("/uploads/letterhead.png")
//!     .build()?;
//! let bytes = composer.generate(&record).await?;
//! ```

mod compose;
mod config;
mod error;
mod raster;
mod render;

pub use compose::composer::{Composer, ComposerBuilder};
pub use config::ComposerConfig;
pub use error::ComposeError;

// Re-export the seams and the model so callers need only this crate.
pub use folio_resource::HttpImageSource;
pub use folio_traits::{FetchError, ImageSource, InMemoryImageSource};
pub use folio_types::{
    Branch, Dimensions, Discount, DocumentRecord, ItemCustomization, LineItem, PageMetrics, Party,
    PaymentPlan, Quantity, ShippingPlan,
};

/// Renders `record` with the default configuration: A4 pages, no letterhead,
/// and an HTTP image source with a 5 second per-image timeout.
pub async fn generate(record: &DocumentRecord) -> Result<Vec<u8>, ComposeError> {
    Composer::builder().build()?.generate(record).await
}

/// Accepts the caller's raw JSON snapshot. A `null` or malformed record is
/// the engine's only hard failure and maps to [`ComposeError::MissingInput`];
/// everything optional degrades inside the composition pass instead.
pub async fn generate_from_json(value: serde_json::Value) -> Result<Vec<u8>, ComposeError> {
    if value.is_null() {
        return Err(ComposeError::MissingInput(
            "document record is null".to_string(),
        ));
    }
    let record: DocumentRecord = serde_json::from_value(value)
        .map_err(|e| ComposeError::MissingInput(format!("malformed document record: {e}")))?;
    generate(&record).await
}
