//! Report [`Query`] definitions.
//!
//! [`Query`]: crate::Query

pub mod invoice_years;
pub mod pending_invoices;

pub use self::{
    invoice_years::InvoiceYears, pending_invoices::PendingInvoices,
};
