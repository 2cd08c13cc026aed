//! [`PendingInvoices`] report definition.

use std::ops::RangeInclusive;

use common::{
    operations::{By, Select},
    Date,
};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::{
    domain::{supplier, Invoice, Supplier},
    infra::{source, Source},
    read::invoice::{IssuedWithin, Pending},
    Query, Service,
};

/// [`Query`] to report the [`Invoice`]s awaiting payment in a given period.
#[derive(Clone, Debug)]
pub struct PendingInvoices {
    /// Start of the period (inclusive).
    pub from: Date,

    /// End of the period (inclusive).
    pub to: Date,

    /// Restricts to [`Invoice`]s of the [`Supplier`] with this [`Name`].
    ///
    /// [`None`] means any [`Supplier`].
    ///
    /// [`Name`]: supplier::Name
    pub supplier: Option<supplier::Name>,
}

/// Output of the [`PendingInvoices`] [`Query`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Reported [`Invoice`]s, ordered by issue date ascending.
    pub rows: Vec<Pending<Invoice>>,
}

impl<Src> Query<PendingInvoices> for Service<Src>
where
    Src: Source<
            Select<By<Option<Supplier>, supplier::Name>>,
            Ok = Option<Supplier>,
            Err = Traced<source::Error>,
        > + Source<
            Select<By<Vec<Invoice>, IssuedWithin>>,
            Ok = Vec<Invoice>,
            Err = Traced<source::Error>,
        >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        PendingInvoices { from, to, supplier }: PendingInvoices,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let supplier = match supplier {
            Some(name) => {
                let supplier = self
                    .source()
                    .execute(Select(By::<Option<Supplier>, _>::new(
                        name.clone(),
                    )))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?
                    .ok_or(E::UnknownSupplier(name))
                    .map_err(tracerr::wrap!())?;
                Some(supplier.cif)
            }
            None => None,
        };

        let mut invoices = self
            .source()
            .execute(Select(By::<Vec<Invoice>, _>::new(IssuedWithin {
                range: RangeInclusive::new(from.coerce(), to.coerce()),
                supplier,
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        invoices.sort_by_key(|invoice| invoice.issued_on);

        Ok(Output {
            rows: invoices.into_iter().map(Pending).collect(),
        })
    }
}

/// Error of [`PendingInvoices`] [`Query`] execution.
#[derive(Debug, Display, StdError, From)]
pub enum ExecutionError {
    /// [`Source`] error.
    #[display("`Source` operation failed: {_0}")]
    #[from]
    Source(source::Error),

    /// No [`Supplier`] with the provided [`supplier::Name`] exists.
    #[display("`Supplier(name: {_0})` does not exist")]
    UnknownSupplier(#[error(not(source))] supplier::Name),
}
