//! Raw JSON records describing [`Employee`]s.

use common::{date, Date};
use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;

use crate::domain::{
    employee::{history, Availability, History, Role},
    Employee,
};

/// Raw JSON record of a single [`Employee`].
///
/// ```json
/// {
///   "dni": "12345678Z",
///   "nombre": "Hermenegildo Manuel",
///   "apellidos": "Ruipérez Núñez",
///   "fechaInicio": "2014-02-25",
///   "roles": [
///     {"comienzo": "2014-02-25", "rol": "CLERK"},
///     {"comienzo": "2015-04-14", "rol": "SUPERVISOR"}
///   ],
///   "vinculaciones": [
///     {"comienzo": "2014-02-25", "vinculacion": "EMPLOYED"}
///   ],
///   "disponibilidades": [
///     {"comienzo": "2014-02-25", "disponibilidad": "WORKING"},
///     {"comienzo": "2014-06-23", "finalPrevisto": "2014-08-29",
///      "disponibilidad": "ON_VACATION"},
///     {"comienzo": "2014-08-29", "disponibilidad": "WORKING"}
///   ]
/// }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeRecord {
    /// National ID of the [`Employee`].
    pub dni: String,

    /// Given name of the [`Employee`].
    #[serde(rename = "nombre")]
    pub first_name: String,

    /// Family name of the [`Employee`].
    #[serde(rename = "apellidos")]
    pub last_name: String,

    /// `YYYY-MM-DD` date the [`Employee`] joined the company.
    #[serde(rename = "fechaInicio")]
    pub employed_since: String,

    /// Role history entries.
    pub roles: Vec<RoleEntry>,

    /// Contractual-link history entries.
    #[serde(rename = "vinculaciones")]
    pub links: Vec<LinkEntry>,

    /// Availability history entries.
    #[serde(rename = "disponibilidades")]
    pub availabilities: Vec<AvailabilityEntry>,
}

impl EmployeeRecord {
    /// Parses an [`EmployeeRecord`] out of the provided JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a well-formed record.
    pub fn from_json(json: impl AsRef<str>) -> Result<Self, Error> {
        serde_json::from_str(json.as_ref()).map_err(Error::Json)
    }
}

/// Entry of the role history of an [`EmployeeRecord`].
#[derive(Clone, Debug, Deserialize)]
pub struct RoleEntry {
    /// `YYYY-MM-DD` date the role came into effect.
    #[serde(rename = "comienzo")]
    pub effective_from: String,

    /// Name of the role.
    #[serde(rename = "rol")]
    pub role: String,
}

/// Entry of the contractual-link history of an [`EmployeeRecord`].
#[derive(Clone, Debug, Deserialize)]
pub struct LinkEntry {
    /// `YYYY-MM-DD` date the link came into effect.
    #[serde(rename = "comienzo")]
    pub effective_from: String,

    /// Name of the contractual link.
    #[serde(rename = "vinculacion")]
    pub link: String,
}

/// Entry of the availability history of an [`EmployeeRecord`].
#[derive(Clone, Debug, Deserialize)]
pub struct AvailabilityEntry {
    /// `YYYY-MM-DD` date the availability came into effect.
    #[serde(rename = "comienzo")]
    pub effective_from: String,

    /// `YYYY-MM-DD` date the availability is expected to end, if scheduled.
    #[serde(rename = "finalPrevisto")]
    pub expected_end: Option<String>,

    /// Name of the availability state.
    #[serde(rename = "disponibilidad")]
    pub kind: String,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = Error;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        use Error as E;

        let EmployeeRecord {
            dni,
            first_name,
            last_name,
            employed_since,
            roles,
            links,
            availabilities,
        } = record;

        let roles = History::new(
            roles
                .iter()
                .map(|entry| {
                    Ok((
                        Date::from_ymd_str(&entry.effective_from).map_err(
                            |source| E::Date { field: "roles.comienzo", source },
                        )?,
                        entry.role.parse::<Role>().map_err(|_| E::Kind {
                            field: "roles.rol",
                            value: entry.role.clone(),
                        })?,
                    ))
                })
                .collect::<Result<Vec<_>, E>>()?,
        )
        .map_err(|source| E::History { attribute: "roles", source })?;

        let links = History::new(
            links
                .iter()
                .map(|entry| {
                    Ok((
                        Date::from_ymd_str(&entry.effective_from).map_err(
                            |source| E::Date {
                                field: "vinculaciones.comienzo",
                                source,
                            },
                        )?,
                        entry.link.parse().map_err(|_| E::Kind {
                            field: "vinculaciones.vinculacion",
                            value: entry.link.clone(),
                        })?,
                    ))
                })
                .collect::<Result<Vec<_>, E>>()?,
        )
        .map_err(|source| E::History { attribute: "vinculaciones", source })?;

        let availabilities = History::new(
            availabilities
                .iter()
                .map(|entry| {
                    Ok((
                        Date::from_ymd_str(&entry.effective_from).map_err(
                            |source| E::Date {
                                field: "disponibilidades.comienzo",
                                source,
                            },
                        )?,
                        Availability {
                            kind: entry.kind.parse().map_err(|_| E::Kind {
                                field: "disponibilidades.disponibilidad",
                                value: entry.kind.clone(),
                            })?,
                            expected_end: entry
                                .expected_end
                                .as_deref()
                                .map(|end| {
                                    Date::from_ymd_str(end)
                                        .map(|date| date.coerce())
                                        .map_err(|source| E::Date {
                                            field: "disponibilidades.\
                                                    finalPrevisto",
                                            source,
                                        })
                                })
                                .transpose()?,
                        },
                    ))
                })
                .collect::<Result<Vec<_>, E>>()?,
        )
        .map_err(|source| E::History {
            attribute: "disponibilidades",
            source,
        })?;

        Ok(Self {
            dni: dni
                .parse()
                .map_err(|_| E::Field { field: "dni", value: dni })?,
            first_name: first_name.parse().map_err(|_| E::Field {
                field: "nombre",
                value: first_name,
            })?,
            last_name: last_name.parse().map_err(|_| E::Field {
                field: "apellidos",
                value: last_name,
            })?,
            employed_since: Date::from_ymd_str(&employed_since)
                .map_err(|source| E::Date { field: "fechaInicio", source })?
                .coerce(),
            roles,
            links,
            availabilities,
        })
    }
}

/// Parses an [`Employee`] out of its raw JSON record.
///
/// # Errors
///
/// Returns an error if the record is malformed or any of its fields is
/// invalid. No partially initialized [`Employee`] is ever produced.
pub fn from_json(json: impl AsRef<str>) -> Result<Employee, Error> {
    EmployeeRecord::from_json(json)?.try_into()
}

/// Error of turning a raw record into an [`Employee`].
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

    /// Field holds a value outside the recognized kind set.
    #[display("field `{field}` holds unknown kind `{value}`")]
    Kind {
        /// Name of the failed field.
        field: &'static str,

        /// Rejected value.
        value: String,
    },

    /// Field value doesn't satisfy its format.
    #[display("field `{field}` holds invalid value `{value}`")]
    Field {
        /// Name of the failed field.
        field: &'static str,

        /// Rejected value.
        value: String,
    },

    /// One of the history attributes cannot be built.
    #[display("invalid `{attribute}` history: {source}")]
    History {
        /// Name of the history attribute.
        attribute: &'static str,

        /// Cause of the failure.
        source: history::InvalidError,
    },
}

#[cfg(test)]
mod spec {
    use crate::domain::employee::{history, AvailabilityKind, Role};

    use super::{from_json, Error};

    const RECORD: &str = r#"{
        "dni": "12345678Z",
        "nombre": "Hermenegildo Manuel",
        "apellidos": "Ruipérez Núñez",
        "fechaInicio": "2014-02-25",
        "roles": [
            {"comienzo": "2014-02-25", "rol": "CLERK"},
            {"comienzo": "2015-04-14", "rol": "SUPERVISOR"}
        ],
        "vinculaciones": [
            {"comienzo": "2014-02-25", "vinculacion": "EMPLOYED"}
        ],
        "disponibilidades": [
            {"comienzo": "2014-02-25", "disponibilidad": "WORKING"},
            {"comienzo": "2014-06-23", "finalPrevisto": "2014-08-29",
             "disponibilidad": "ON_VACATION"},
            {"comienzo": "2014-08-29", "disponibilidad": "WORKING"}
        ]
    }"#;

    #[test]
    fn round_trips_identity_fields() {
        let employee = from_json(RECORD).unwrap();

        assert_eq!(AsRef::<str>::as_ref(&employee.dni), "12345678Z");
        assert_eq!(employee.first_name.to_string(), "Hermenegildo Manuel");
        assert_eq!(employee.last_name.to_string(), "Ruipérez Núñez");
        assert_eq!(employee.employed_since.to_string(), "2014-02-25");
    }

    #[test]
    fn derives_current_state() {
        let employee = from_json(RECORD).unwrap();

        assert_eq!(employee.current_role(), Role::Supervisor);
        assert!(employee.is_active());

        let vacation = employee
            .availability_as_of("2014-07-01".parse().unwrap())
            .unwrap();
        assert_eq!(vacation.kind, AvailabilityKind::OnVacation);
        assert_eq!(
            vacation.expected_end.map(|d| d.to_string()),
            Some("2014-08-29".to_owned()),
        );
    }

    #[test]
    fn on_leave_employee_is_inactive() {
        let record = RECORD.replace(
            r#"{"comienzo": "2014-08-29", "disponibilidad": "WORKING"}"#,
            r#"{"comienzo": "2014-11-05", "finalPrevisto": "2015-02-05",
                "disponibilidad": "ON_LEAVE"}"#,
        );

        let employee = from_json(&record).unwrap();

        assert!(!employee.is_active());
    }

    #[test]
    fn rejects_malformed_dates() {
        let record = RECORD.replace("2014-02-25\", \"rol", "25/02/2014\", \"rol");

        assert!(matches!(
            from_json(&record),
            Err(Error::Date { field: "roles.comienzo", .. }),
        ));

        let record = RECORD.replace(
            r#""fechaInicio": "2014-02-25""#,
            r#""fechaInicio": "someday""#,
        );

        assert!(matches!(
            from_json(&record),
            Err(Error::Date { field: "fechaInicio", .. }),
        ));
    }

    #[test]
    fn rejects_unknown_kinds() {
        let record = RECORD.replace("SUPERVISOR", "ASTRONAUT");

        match from_json(&record) {
            Err(Error::Kind { field, value }) => {
                assert_eq!(field, "roles.rol");
                assert_eq!(value, "ASTRONAUT");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let record = RECORD.replace(r#""dni": "12345678Z","#, "");

        assert!(matches!(from_json(&record), Err(Error::Json(_))));
    }

    #[test]
    fn rejects_invalid_dni() {
        let record = RECORD.replace("12345678Z", "12345678A");

        assert!(matches!(
            from_json(&record),
            Err(Error::Field { field: "dni", .. }),
        ));
    }

    #[test]
    fn rejects_duplicate_history_dates() {
        let record = RECORD.replace("2015-04-14", "2014-02-25");

        assert!(matches!(
            from_json(&record),
            Err(Error::History {
                attribute: "roles",
                source: history::InvalidError::DuplicateDate(_),
            }),
        ));
    }

    #[test]
    fn rejects_empty_histories() {
        let record = RECORD.replace(
            r#"[
            {"comienzo": "2014-02-25", "vinculacion": "EMPLOYED"}
        ]"#,
            "[]",
        );

        assert!(matches!(
            from_json(&record),
            Err(Error::History {
                attribute: "vinculaciones",
                source: history::InvalidError::Empty,
            }),
        ));
    }
}
