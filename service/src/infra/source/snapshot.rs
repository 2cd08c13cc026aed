//! In-memory [`Source`] backed by JSON snapshot documents.

use std::collections::HashMap;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError};
use itertools::{Itertools as _, MinMaxResult};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, supplier, Invoice, Supplier},
    infra::source::{self, Source},
    read::invoice::{IssueYears, IssuedWithin},
    record::{self, employee::EmployeeRecord, invoice::PendingInvoicesRecord},
};

/// In-memory [`Source`] of raw records, loaded from the JSON snapshot
/// documents exported by the company's persistence layer.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// [`EmployeeRecord`]s keyed by their `dni` field.
    employees: HashMap<String, EmployeeRecord>,

    /// Pending [`Invoice`]s.
    invoices: Vec<Invoice>,
}

impl Snapshot {
    /// Creates a new empty [`Snapshot`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads [`EmployeeRecord`]s from the provided JSON snapshot document (an
    /// array of records), replacing the previously loaded ones.
    ///
    /// Records are indexed by their `dni` field as-is: invalid records
    /// surface later, when the [`Employee`] they describe is queried.
    ///
    /// [`Employee`]: crate::domain::Employee
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed.
    pub fn load_employees(&mut self, json: &str) -> Result<(), Traced<Error>> {
        let records: Vec<EmployeeRecord> = serde_json::from_str(json)
            .map_err(|e| tracerr::new!(Error::Malformed(e)))?;

        self.employees = records
            .into_iter()
            .map(|record| (record.dni.clone(), record))
            .collect();

        log::debug!("loaded {} employee records", self.employees.len());
        Ok(())
    }

    /// Loads pending [`Invoice`]s from the provided JSON snapshot document,
    /// replacing the previously loaded ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not well-formed or contains an
    /// invalid invoice record.
    pub fn load_invoices(&mut self, json: &str) -> Result<(), Traced<Error>> {
        use Error as E;

        let document = PendingInvoicesRecord::from_json(json)
            .map_err(|e| tracerr::new!(E::Invoice(e)))?;

        self.invoices = document
            .pending
            .into_iter()
            .map(|record| {
                Invoice::try_from(record)
                    .map_err(|e| tracerr::new!(E::Invoice(e)))
            })
            .collect::<Result<_, _>>()?;

        log::debug!("loaded {} pending invoice records", self.invoices.len());
        Ok(())
    }
}

/// Error of loading a [`Snapshot`].
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Document is not a well-formed JSON of the expected shape.
    #[display("malformed snapshot document: {_0}")]
    Malformed(serde_json::Error),

    /// Document contains an invalid invoice record.
    #[display("invalid invoice record: {_0}")]
    Invoice(record::invoice::Error),
}

impl Source<Select<By<Option<EmployeeRecord>, employee::Dni>>> for Snapshot {
    type Ok = Option<EmployeeRecord>;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<EmployeeRecord>, employee::Dni>>,
    ) -> Result<Self::Ok, Self::Err> {
        let dni = by.into_inner();
        Ok(self.employees.get(dni.as_ref()).cloned())
    }
}

impl Source<Select<By<Option<Supplier>, supplier::Name>>> for Snapshot {
    type Ok = Option<Supplier>;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Supplier>, supplier::Name>>,
    ) -> Result<Self::Ok, Self::Err> {
        let name = by.into_inner();
        Ok(self
            .invoices
            .iter()
            .map(|invoice| &invoice.order.supplier)
            .find(|supplier| {
                AsRef::<str>::as_ref(&supplier.name)
                    .eq_ignore_ascii_case(name.as_ref())
            })
            .cloned())
    }
}

impl Source<Select<By<Vec<Invoice>, IssuedWithin>>> for Snapshot {
    type Ok = Vec<Invoice>;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Invoice>, IssuedWithin>>,
    ) -> Result<Self::Ok, Self::Err> {
        let IssuedWithin { range, supplier } = by.into_inner();
        Ok(self
            .invoices
            .iter()
            .filter(|invoice| range.contains(&invoice.issued_on))
            .filter(|invoice| {
                supplier
                    .as_ref()
                    .map_or(true, |cif| invoice.order.supplier.cif == *cif)
            })
            .cloned()
            .collect())
    }
}

impl Source<Select<By<Option<IssueYears>, ()>>> for Snapshot {
    type Ok = Option<IssueYears>;
    type Err = Traced<source::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<IssueYears>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let () = by.into_inner();
        Ok(match self.invoices.iter().map(|i| i.issued_on.year()).minmax() {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(year) => {
                Some(IssueYears { min: year, max: year })
            }
            MinMaxResult::MinMax(min, max) => Some(IssueYears { min, max }),
        })
    }
}

#[cfg(test)]
mod spec {
    use std::ops::RangeInclusive;

    use common::{
        operations::{By, Select},
        Date,
    };
    use futures::executor::block_on;

    use crate::{
        domain::{supplier, Invoice, Supplier},
        read::invoice::{IssueYears, IssuedWithin},
    };

    use super::{Snapshot, Source as _};

    const INVOICES: &str = r#"{
        "facturasPendientes": [
            {
                "fechaDeEmision": "2014-03-02",
                "importe": 1025.5,
                "cuentaBancaria": "ES9121000418450200051332",
                "pedido": {
                    "numeroDePedido": 371,
                    "fechaDeRealizacion": "2014-02-17",
                    "estaPendiente": false,
                    "proveedor": {
                        "cif": "A47000001",
                        "nombre": "Bodegas Arribas",
                        "telefono": "983123456",
                        "email": "pedidos@arribas.es"
                    }
                }
            },
            {
                "fechaDeEmision": "2016-07-11",
                "importe": 310,
                "cuentaBancaria": "ES7921000813610123456789",
                "pedido": {
                    "numeroDePedido": 518,
                    "fechaDeRealizacion": "2016-06-30",
                    "estaPendiente": true,
                    "proveedor": {
                        "cif": "B1234567J",
                        "nombre": "Lacteos Campos",
                        "telefono": "983654321",
                        "email": "ventas@lacteoscampos.es"
                    }
                }
            }
        ]
    }"#;

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::new();
        snapshot.load_invoices(INVOICES).unwrap();
        snapshot
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn finds_suppliers_case_insensitively() {
        let snapshot = snapshot();

        let supplier = block_on(snapshot.execute(Select(
            By::<Option<Supplier>, _>::new(
                "bodegas arribas".parse::<supplier::Name>().unwrap(),
            ),
        )))
        .unwrap();

        assert_eq!(
            supplier.map(|s| s.cif.to_string()),
            Some("A47000001".to_owned()),
        );
    }

    #[test]
    fn filters_invoices_by_issue_range() {
        let snapshot = snapshot();

        let invoices = block_on(snapshot.execute(Select(
            By::<Vec<Invoice>, _>::new(IssuedWithin {
                range: RangeInclusive::new(
                    date("2014-01-01").coerce(),
                    date("2014-12-31").coerce(),
                ),
                supplier: None,
            }),
        )))
        .unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].order.number.to_string(), "371");
    }

    #[test]
    fn filters_invoices_by_supplier() {
        let snapshot = snapshot();

        let invoices = block_on(snapshot.execute(Select(
            By::<Vec<Invoice>, _>::new(IssuedWithin {
                range: RangeInclusive::new(
                    date("2014-01-01").coerce(),
                    date("2019-12-31").coerce(),
                ),
                supplier: Some("B1234567J".parse().unwrap()),
            }),
        )))
        .unwrap();

        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].order.number.to_string(), "518");
    }

    #[test]
    fn reports_issue_years_span() {
        let snapshot = snapshot();

        let years = block_on(
            snapshot.execute(Select(By::<Option<IssueYears>, _>::new(()))),
        )
        .unwrap();

        assert_eq!(years, Some(IssueYears { min: 2014, max: 2016 }));
    }

    #[test]
    fn issue_years_are_undefined_without_invoices() {
        let years = block_on(
            Snapshot::new()
                .execute(Select(By::<Option<IssueYears>, _>::new(()))),
        )
        .unwrap();

        assert_eq!(years, None);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(Snapshot::new().load_invoices("{]").is_err());
        assert!(Snapshot::new().load_employees("not json").is_err());
    }
}
