//! Image sources for the folio document engine.
//!
//! This crate provides the network-backed implementation of the
//! `ImageSource` trait from folio-traits.
//!
//! ## Available sources
//!
//! - [`HttpImageSource`]: fetches over HTTP(S) with a per-request timeout
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory source from folio-traits:
//! - [`InMemoryImageSource`]: pre-populated in-memory storage

mod http;

pub use http::{DEFAULT_TIMEOUT, HttpImageSource};

// Re-export the in-memory source from folio-traits for convenience
pub use folio_traits::InMemoryImageSource;
