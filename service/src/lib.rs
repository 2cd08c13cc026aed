//! Service contains the business logic of the back office.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod record;

#[cfg(doc)]
use infra::Source;

pub use self::query::Query;

/// Domain service answering back-office queries over a [`Source`] of raw
/// records.
#[derive(Clone, Debug)]
pub struct Service<Src> {
    /// [`Source`] of this [`Service`].
    source: Src,
}

impl<Src> Service<Src> {
    /// Creates a new [`Service`] over the provided [`Source`].
    #[must_use]
    pub fn new(source: Src) -> Self {
        Self { source }
    }

    /// Returns the [`Source`] of this [`Service`].
    #[must_use]
    pub fn source(&self) -> &Src {
        &self.source
    }
}
