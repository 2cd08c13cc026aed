//! [`InvoiceYears`] report definition.

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::{
    infra::{source, Source},
    read::invoice::IssueYears,
    Query, Service,
};

#[cfg(doc)]
use crate::domain::Invoice;

/// [`Query`] of the span of years the stored [`Invoice`]s were issued in.
#[derive(Clone, Copy, Debug)]
pub struct InvoiceYears;

impl<Src> Query<InvoiceYears> for Service<Src>
where
    Src: Source<
        Select<By<Option<IssueYears>, ()>>,
        Ok = Option<IssueYears>,
        Err = Traced<source::Error>,
    >,
{
    type Ok = IssueYears;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        _: InvoiceYears,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.source()
            .execute(Select(By::<Option<IssueYears>, _>::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NoInvoices)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`InvoiceYears`] [`Query`] execution.
#[derive(Debug, Display, StdError, From)]
pub enum ExecutionError {
    /// [`Source`] error.
    #[display("`Source` operation failed: {_0}")]
    #[from]
    Source(source::Error),

    /// No [`Invoice`]s are stored at all.
    #[display("no invoices are stored")]
    NoInvoices,
}
