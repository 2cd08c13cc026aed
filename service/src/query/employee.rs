//! [`Query`] collection related to a single [`Employee`].

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::{
    domain::{employee, Employee},
    infra::{source, Source},
    record::{self, EmployeeRecord},
    Query, Service,
};

/// [`Query`] of an [`Employee`] by its [`employee::Dni`].
#[derive(Clone, Debug)]
pub struct ByDni(pub employee::Dni);

impl<Src> Query<ByDni> for Service<Src>
where
    Src: Source<
        Select<By<Option<EmployeeRecord>, employee::Dni>>,
        Ok = Option<EmployeeRecord>,
        Err = Traced<source::Error>,
    >,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, ByDni(dni): ByDni) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let record = self
            .source()
            .execute(Select(By::<Option<EmployeeRecord>, _>::new(dni.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::NotFound(dni))
            .map_err(tracerr::wrap!())?;

        Employee::try_from(record)
            .map_err(|e| tracerr::new!(E::Record(e)))
    }
}

/// Error of [`ByDni`] [`Query`] execution.
#[derive(Debug, Display, StdError, From)]
pub enum ExecutionError {
    /// [`Source`] error.
    #[display("`Source` operation failed: {_0}")]
    #[from]
    Source(source::Error),

    /// No [`Employee`] with the provided [`employee::Dni`] exists.
    #[display("`Employee(dni: {_0})` does not exist")]
    NotFound(#[error(not(source))] employee::Dni),

    /// Fetched record doesn't describe a valid [`Employee`].
    #[display("invalid `Employee` record: {_0}")]
    Record(record::employee::Error),
}
