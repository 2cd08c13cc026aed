//! Raw JSON records describing pending [`Invoice`]s.

use common::{date, money::Currency, Date, Money};
use derive_more::{Display, Error as StdError, From};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Invoice, Supplier, SupplierOrder};

/// Raw JSON document listing the [`Invoice`]s awaiting payment.
///
/// ```json
/// {
///   "facturasPendientes": [
///     {
///       "fechaDeEmision": "2014-03-02",
///       "importe": 1025.50,
///       "cuentaBancaria": "ES9121000418450200051332",
///       "pedido": {
///         "numeroDePedido": 371,
///         "fechaDeRealizacion": "2014-02-17",
///         "estaPendiente": false,
///         "proveedor": {
///           "cif": "A47000001",
///           "nombre": "Bodegas Arribas",
///           "telefono": "983123456",
///           "email": "pedidos@arribas.es"
///         }
///       }
///     }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct PendingInvoicesRecord {
    /// Pending [`InvoiceRecord`]s.
    #[serde(rename = "facturasPendientes")]
    pub pending: Vec<InvoiceRecord>,
}

impl PendingInvoicesRecord {
    /// Parses a [`PendingInvoicesRecord`] out of the provided JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a well-formed record.
    pub fn from_json(json: impl AsRef<str>) -> Result<Self, Error> {
        serde_json::from_str(json.as_ref()).map_err(Error::Json)
    }
}

/// Raw JSON record of a single [`Invoice`].
#[derive(Clone, Debug, Deserialize)]
pub struct InvoiceRecord {
    /// `YYYY-MM-DD` date the invoice was issued.
    #[serde(rename = "fechaDeEmision")]
    pub issued_on: String,

    /// Billed amount.
    #[serde(rename = "importe")]
    pub amount: Decimal,

    /// Bank account the invoice is to be paid to.
    #[serde(rename = "cuentaBancaria")]
    pub bank_account: String,

    /// Order the invoice bills.
    #[serde(rename = "pedido")]
    pub order: OrderRecord,
}

/// Raw JSON record of a [`SupplierOrder`].
#[derive(Clone, Debug, Deserialize)]
pub struct OrderRecord {
    /// Number of the order.
    #[serde(rename = "numeroDePedido")]
    pub number: i64,

    /// `YYYY-MM-DD` date the order was placed.
    #[serde(rename = "fechaDeRealizacion")]
    pub placed_on: String,

    /// Whether the order is still pending delivery.
    #[serde(rename = "estaPendiente")]
    pub is_pending: bool,

    /// Supplier the order was placed to.
    #[serde(rename = "proveedor")]
    pub supplier: SupplierRecord,
}

/// Raw JSON record of a [`Supplier`].
#[derive(Clone, Debug, Deserialize)]
pub struct SupplierRecord {
    /// Tax identification code of the supplier.
    pub cif: String,

    /// Name of the supplier.
    #[serde(rename = "nombre")]
    pub name: String,

    /// Phone number of the supplier.
    #[serde(rename = "telefono")]
    pub phone: Option<String>,

    /// Email address of the supplier.
    pub email: Option<String>,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = Error;

    fn try_from(record: InvoiceRecord) -> Result<Self, Self::Error> {
        use Error as E;

        let InvoiceRecord { issued_on, amount, bank_account, order } = record;

        Ok(Self {
            issued_on: Date::from_ymd_str(&issued_on)
                .map_err(|source| E::Date { field: "fechaDeEmision", source })?
                .coerce(),
            // Snapshot amounts carry no currency: the business bills in
            // euros.
            amount: Money { amount, currency: Currency::Eur },
            bank_account: bank_account.parse().map_err(|_| E::Field {
                field: "cuentaBancaria",
                value: bank_account,
            })?,
            order: order.try_into()?,
        })
    }
}

impl TryFrom<OrderRecord> for SupplierOrder {
    type Error = Error;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        use Error as E;

        let OrderRecord { number, placed_on, is_pending, supplier } = record;

        Ok(Self {
            number: number.into(),
            placed_on: Date::from_ymd_str(&placed_on)
                .map_err(|source| E::Date {
                    field: "pedido.fechaDeRealizacion",
                    source,
                })?
                .coerce(),
            is_pending,
            supplier: supplier.try_into()?,
        })
    }
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = Error;

    fn try_from(record: SupplierRecord) -> Result<Self, Self::Error> {
        use Error as E;

        let SupplierRecord { cif, name, phone, email } = record;

        Ok(Self {
            cif: cif.parse().map_err(|_| E::Field {
                field: "proveedor.cif",
                value: cif,
            })?,
            name: name.parse().map_err(|_| E::Field {
                field: "proveedor.nombre",
                value: name,
            })?,
            phone: phone
                .map(|number| {
                    number.parse().map_err(|_| E::Field {
                        field: "proveedor.telefono",
                        value: number,
                    })
                })
                .transpose()?,
            email: email
                .map(|address| {
                    address.parse().map_err(|_| E::Field {
                        field: "proveedor.email",
                        value: address,
                    })
                })
                .transpose()?,
        })
    }
}

/// Error of turning raw invoice records into domain entities.
#[derive(Debug, Display, StdError, From)]
pub enum Error {
    /// Record is not a well-formed JSON document of the expected shape.
    #[display("malformed record: {_0}")]
    #[from]
    Json(serde_json::Error),

    /// Field doesn't hold a valid `YYYY-MM-DD` date.
    #[display("field `{field}` is not a `YYYY-MM-DD` date: {source}")]
    Date {
        /// Name of the failed field.
        field: &'static str,

        /// Cause of the failure.
        source: date::ParseError,
    },

    /// Field value doesn't satisfy its format.
    #[display("field `{field}` holds invalid value `{value}`")]
    Field {
        /// Name of the failed field.
        field: &'static str,

        /// Rejected value.
        value: String,
    },
}
