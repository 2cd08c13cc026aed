//! Infrastructure layer.

pub mod source;

pub use self::source::{Snapshot, Source};
