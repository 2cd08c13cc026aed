//! Raw records exchanged with the persistence layer.
//!
//! Field names of these types are the snapshot document contract, not Rust
//! naming: they mirror the column/property names the company's systems
//! exchange.

pub mod employee;
pub mod invoice;

pub use self::{employee::EmployeeRecord, invoice::InvoiceRecord};
