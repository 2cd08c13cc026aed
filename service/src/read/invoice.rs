//! [`Invoice`] read model definition.

use std::ops::RangeInclusive;

use crate::domain::{invoice::IssueDate, supplier};
#[cfg(doc)]
use crate::domain::{Invoice, Supplier};

/// Wrapper around an [`Invoice`] indicating that it awaits payment.
#[derive(Clone, Copy, Debug)]
pub struct Pending<T>(pub T);

/// Selector of [`Invoice`]s issued within a period.
#[derive(Clone, Debug)]
pub struct IssuedWithin {
    /// Inclusive range of issue dates.
    pub range: RangeInclusive<IssueDate>,

    /// Restricts to [`Invoice`]s of the [`Supplier`] with this [`Cif`].
    ///
    /// [`None`] means any [`Supplier`].
    ///
    /// [`Cif`]: supplier::Cif
    pub supplier: Option<supplier::Cif>,
}

/// Span of years the stored [`Invoice`]s were issued in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IssueYears {
    /// Year the earliest [`Invoice`] was issued in.
    pub min: i32,

    /// Year the latest [`Invoice`] was issued in.
    pub max: i32,
}
