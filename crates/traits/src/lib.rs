pub mod source;

pub use source::{FetchError, ImageSource, InMemoryImageSource};
