//! Domain definitions.

pub mod employee;
pub mod invoice;
pub mod order;
pub mod supplier;

pub use self::{
    employee::Employee, invoice::Invoice, order::SupplierOrder,
    supplier::Supplier,
};
