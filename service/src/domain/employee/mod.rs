//! [`Employee`] definitions.

pub mod history;

use std::{str::FromStr, sync::LazyLock};

use common::{define_kind, unit, Date, DateOf};
use derive_more::{AsRef, Display};
use regex::Regex;

pub use self::history::History;

/// Employee of the company.
#[derive(Clone, Debug)]
pub struct Employee {
    /// [`Dni`] of this [`Employee`], acting as its unique identifier.
    ///
    /// Uniqueness across the employee population is maintained by the data
    /// source, not by this entity.
    pub dni: Dni,

    /// [`FirstName`] of this [`Employee`].
    pub first_name: FirstName,

    /// [`LastName`] of this [`Employee`].
    pub last_name: LastName,

    /// [`Date`] when this [`Employee`] joined the company.
    pub employed_since: StartDate,

    /// [`History`] of [`Role`]s this [`Employee`] has performed.
    pub roles: History<Role>,

    /// [`History`] of [`ContractualLink`]s this [`Employee`] has had with the
    /// company.
    pub links: History<ContractualLink>,

    /// [`History`] of [`Availability`] states of this [`Employee`].
    pub availabilities: History<Availability>,
}

impl Employee {
    /// Returns whether this [`Employee`] is currently active.
    ///
    /// An [`Employee`] is active only while both its latest
    /// [`ContractualLink`] and its latest [`Availability`] count as active.
    /// The performed [`Role`] never gates activity.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.availabilities.latest().kind.is_active_state()
            && self.links.latest().is_active_state()
    }

    /// Returns the current [`Role`] of this [`Employee`] (the latest one).
    #[must_use]
    pub fn current_role(&self) -> Role {
        *self.roles.latest()
    }

    /// Returns the [`Role`] this [`Employee`] performed on the provided
    /// [`Date`].
    ///
    /// [`None`] is returned in case the [`Date`] precedes the earliest role
    /// entry.
    #[must_use]
    pub fn role_as_of(&self, date: Date) -> Option<Role> {
        self.roles.as_of(date).copied()
    }

    /// Returns the [`ContractualLink`] this [`Employee`] had on the provided
    /// [`Date`].
    ///
    /// [`None`] is returned in case the [`Date`] precedes the earliest link
    /// entry.
    #[must_use]
    pub fn link_as_of(&self, date: Date) -> Option<ContractualLink> {
        self.links.as_of(date).copied()
    }

    /// Returns the [`Availability`] of this [`Employee`] on the provided
    /// [`Date`].
    ///
    /// [`None`] is returned in case the [`Date`] precedes the earliest
    /// availability entry.
    #[must_use]
    pub fn availability_as_of(&self, date: Date) -> Option<Availability> {
        self.availabilities.as_of(date).copied()
    }
}

/// National identity document number of an [`Employee`], acting as its unique
/// identifier.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str)]
pub struct Dni(String);

impl Dni {
    /// Creates a new [`Dni`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `dni` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(dni: impl Into<String>) -> Self {
        Self(dni.into())
    }

    /// Creates a new [`Dni`] if the given `dni` is valid.
    #[must_use]
    pub fn new(dni: impl Into<String>) -> Option<Self> {
        let dni = dni.into();
        Self::check(&dni).then_some(Self(dni))
    }

    /// Checks whether the given `dni` is a valid [`Dni`]: eight digits
    /// followed by the matching control letter.
    fn check(dni: impl AsRef<str>) -> bool {
        /// Regular expression checking the `8 digits + control letter` shape.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[0-9]{8}[TRWAGMYFPDXBNJZSQVHLCKE]$")
                .expect("valid regex")
        });

        /// Control letters table, indexed by `number % 23`.
        const CONTROL: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

        let dni = dni.as_ref();
        if !REGEX.is_match(dni) {
            return false;
        }

        let number = dni.as_bytes()[..8]
            .iter()
            .fold(0_usize, |n, b| n * 10 + usize::from(b - b'0'));
        dni.as_bytes()[8] == CONTROL[number % 23]
    }
}

impl FromStr for Dni {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Dni`")
    }
}

/// Given name of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct FirstName(String);

impl FirstName {
    /// Creates a new [`FirstName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`FirstName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`FirstName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for FirstName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FirstName`")
    }
}

/// Family name of an [`Employee`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
pub struct LastName(String);

impl LastName {
    /// Creates a new [`LastName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` is not empty.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`LastName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`LastName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for LastName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `LastName`")
    }
}

define_kind! {
    #[doc = "Role an [`Employee`] performs in the company."]
    enum Role {
        #[doc = "Serves customers at the counter."]
        Clerk = 1,

        #[doc = "Oversees clerks and the daily operation of a store."]
        Supervisor = 2,

        #[doc = "Runs a store and its back office."]
        Manager = 3,
    }
}

define_kind! {
    #[doc = "Contractual link between an [`Employee`] and the company."]
    enum ContractualLink {
        #[doc = "Currently under an employment contract."]
        Employed = 1,

        #[doc = "Contract was terminated."]
        Terminated = 2,

        #[doc = "Left the company upon retirement."]
        Retired = 3,
    }
}

impl ContractualLink {
    /// Indicates whether this [`ContractualLink`] counts the [`Employee`] as
    /// active.
    #[must_use]
    pub const fn is_active_state(self) -> bool {
        match self {
            Self::Employed => true,
            Self::Terminated | Self::Retired => false,
        }
    }
}

/// Availability state of an [`Employee`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Availability {
    /// Kind of this [`Availability`].
    pub kind: AvailabilityKind,

    /// [`Date`] when this [`Availability`] is expected to end.
    ///
    /// [`None`] means no end is scheduled. Informational only: activity
    /// derivation never considers it.
    pub expected_end: Option<EndDate>,
}

define_kind! {
    #[doc = "Kind of an [`Availability`]."]
    enum AvailabilityKind {
        #[doc = "Working as usual."]
        Working = 1,

        #[doc = "On vacation."]
        OnVacation = 2,

        #[doc = "On a temporary leave."]
        OnLeave = 3,
    }
}

impl AvailabilityKind {
    /// Indicates whether this [`AvailabilityKind`] counts the [`Employee`] as
    /// active.
    ///
    /// Vacationing employees remain active; only a leave suspends activity.
    #[must_use]
    pub const fn is_active_state(self) -> bool {
        match self {
            Self::Working | Self::OnVacation => true,
            Self::OnLeave => false,
        }
    }
}

/// [`Date`] when an [`Employee`] joined the company.
pub type StartDate = DateOf<(Employee, unit::Start)>;

/// [`Date`] when an [`Availability`] is expected to end.
pub type EndDate = DateOf<(Availability, unit::End)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{
        Availability, AvailabilityKind, ContractualLink, Dni, Employee,
        FirstName, History, LastName, Role,
    };

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn working(since: &str) -> (Date, Availability) {
        (
            date(since),
            Availability {
                kind: AvailabilityKind::Working,
                expected_end: None,
            },
        )
    }

    fn away(
        since: &str,
        kind: AvailabilityKind,
        until: &str,
    ) -> (Date, Availability) {
        (
            date(since),
            Availability {
                kind,
                expected_end: Some(date(until).coerce()),
            },
        )
    }

    fn employee(
        availabilities: impl IntoIterator<Item = (Date, Availability)>,
    ) -> Employee {
        Employee {
            dni: "12345678Z".parse().unwrap(),
            first_name: "Hermenegildo Manuel".parse().unwrap(),
            last_name: "Ruiperez Nunez".parse().unwrap(),
            employed_since: date("2014-02-25").coerce(),
            roles: History::new([
                (date("2014-02-25"), Role::Clerk),
                (date("2015-04-14"), Role::Supervisor),
            ])
            .unwrap(),
            links: History::new([(date("2014-02-25"), ContractualLink::Employed)])
                .unwrap(),
            availabilities: History::new(availabilities).unwrap(),
        }
    }

    #[test]
    fn is_active_when_working_and_employed() {
        let employee = employee([
            working("2014-02-25"),
            away("2014-06-23", AvailabilityKind::OnVacation, "2014-08-29"),
            working("2014-08-29"),
        ]);

        assert_eq!(employee.current_role(), Role::Supervisor);
        assert!(employee.is_active());
    }

    #[test]
    fn is_inactive_while_on_leave() {
        let employee = employee([
            working("2014-02-25"),
            away("2014-06-23", AvailabilityKind::OnVacation, "2014-08-29"),
            working("2014-08-29"),
            away("2014-11-05", AvailabilityKind::OnLeave, "2015-02-05"),
        ]);

        assert!(!employee.is_active());
    }

    #[test]
    fn is_inactive_once_terminated() {
        let mut employee = employee([working("2014-02-25")]);
        employee.links = History::new([
            (date("2014-02-25"), ContractualLink::Employed),
            (date("2016-01-31"), ContractualLink::Terminated),
        ])
        .unwrap();

        assert!(!employee.is_active());
    }

    #[test]
    fn answers_as_of_queries() {
        let employee = employee([
            working("2014-02-25"),
            away("2014-06-23", AvailabilityKind::OnVacation, "2014-08-29"),
            working("2014-08-29"),
        ]);

        assert_eq!(employee.role_as_of(date("2014-01-01")), None);
        assert_eq!(employee.role_as_of(date("2014-02-25")), Some(Role::Clerk));
        assert_eq!(
            employee.role_as_of(date("2015-04-14")),
            Some(Role::Supervisor),
        );
        assert_eq!(
            employee.link_as_of(date("2014-12-31")),
            Some(ContractualLink::Employed),
        );
        assert_eq!(
            employee.availability_as_of(date("2014-07-01")).map(|a| a.kind),
            Some(AvailabilityKind::OnVacation),
        );
    }

    #[test]
    fn activity_state_tables() {
        assert!(AvailabilityKind::Working.is_active_state());
        assert!(AvailabilityKind::OnVacation.is_active_state());
        assert!(!AvailabilityKind::OnLeave.is_active_state());

        assert!(ContractualLink::Employed.is_active_state());
        assert!(!ContractualLink::Terminated.is_active_state());
        assert!(!ContractualLink::Retired.is_active_state());
    }

    #[test]
    fn dni_validation() {
        assert!(Dni::new("12345678Z").is_some());
        assert!(Dni::new("00000000T").is_some());
        assert!(Dni::new("11111111H").is_some());

        // Wrong control letter.
        assert!(Dni::new("12345678A").is_none());
        // Wrong shape.
        assert!(Dni::new("1234567Z").is_none());
        assert!(Dni::new("123456789").is_none());
        assert!(Dni::new("12345678z").is_none());
        assert!(Dni::new("").is_none());
    }

    #[test]
    fn name_validation() {
        assert!(FirstName::new("Hermenegildo Manuel").is_some());
        assert!(FirstName::new("").is_none());
        assert!(FirstName::new(" padded ").is_none());

        assert!(LastName::new("Ruiperez Nunez").is_some());
        assert!(LastName::new("").is_none());
    }
}
