//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::Date;

/// Back-office CLI of the retail management system.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Command to execute.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the current state of an employee.
    EmployeeStatus {
        /// DNI of the employee.
        #[arg(long)]
        dni: String,
    },

    /// Lists the invoices awaiting payment in a period.
    PendingInvoices {
        /// Start of the period (`YYYY-MM-DD`, inclusive).
        #[arg(long)]
        from: Date,

        /// End of the period (`YYYY-MM-DD`, inclusive).
        #[arg(long)]
        to: Date,

        /// Restrict to the supplier with this name.
        #[arg(long)]
        supplier: Option<String>,
    },

    /// Prints the span of years the stored invoices were issued in.
    InvoiceYears,
}
