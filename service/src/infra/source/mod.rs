//! [`Source`]-related implementations.

pub mod snapshot;

use derive_more::{Display, Error as StdError, From};

pub use self::snapshot::Snapshot;

/// Operation on a source of raw records.
pub use common::Handler as Source;

/// [`Source`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Snapshot`] error.
    Snapshot(snapshot::Error),
}
