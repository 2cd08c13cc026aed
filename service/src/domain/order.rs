//! [`SupplierOrder`] definitions.

use common::{unit, DateOf};
use derive_more::{Display, From};

use super::Supplier;

/// Order placed to a [`Supplier`].
#[derive(Clone, Debug)]
pub struct SupplierOrder {
    /// [`Number`] of this [`SupplierOrder`], acting as its unique identifier.
    pub number: Number,

    /// [`Date`] when this [`SupplierOrder`] was placed.
    ///
    /// [`Date`]: common::Date
    pub placed_on: PlacementDate,

    /// Whether this [`SupplierOrder`] is still pending delivery.
    pub is_pending: bool,

    /// [`Supplier`] this [`SupplierOrder`] was placed to.
    pub supplier: Supplier,
}

/// Number of a [`SupplierOrder`], acting as its unique identifier.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, PartialEq)]
pub struct Number(i64);

/// [`Date`] when a [`SupplierOrder`] was placed.
///
/// [`Date`]: common::Date
pub type PlacementDate = DateOf<(SupplierOrder, unit::Placement)>;
