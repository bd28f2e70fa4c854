pub(crate) mod writer;

pub(crate) use writer::{DocWriter, FontStyle};
