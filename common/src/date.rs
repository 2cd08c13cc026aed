//! Calendar date utilities.

use std::{cmp::Ordering, fmt, marker::PhantomData, str::FromStr};

use derive_more::{Debug, Display, Error};

/// Untyped calendar date.
pub type Date = DateOf;

/// Day-precision calendar date.
#[derive(Debug)]
pub struct DateOf<Of: ?Sized = ()> {
    /// Inner representation of the date.
    inner: time::Date,

    /// Type parameter describing the kind of date.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateOf<Of> {
    /// Creates a new [`Date`] representing the current calendar day in UTC.
    #[must_use]
    pub fn today() -> Self {
        Self {
            inner: time::OffsetDateTime::now_utc().date(),
            _of: PhantomData,
        }
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// # Errors
    ///
    /// Returns an error if the components don't form a valid calendar date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        use ParseError as E;

        let month = time::Month::try_from(month).map_err(E::ComponentRange)?;
        Ok(Self {
            inner: time::Date::from_calendar_date(year, month, day)
                .map_err(E::ComponentRange)?,
            _of: PhantomData,
        })
    }

    /// Creates a new [`Date`] from the provided `YYYY-MM-DD` string.
    ///
    /// The string is split on `-` into exactly three numeric components.
    /// Any other shape (including other ISO 8601 forms) is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid `YYYY-MM-DD` date.
    pub fn from_ymd_str(input: impl AsRef<str>) -> Result<Self, ParseError> {
        use ParseError as E;

        let mut components = input.as_ref().splitn(3, '-');
        let mut next = || components.next().ok_or(E::Format);

        let year = next()?.parse::<i32>().map_err(|_| E::Format)?;
        let month = next()?.parse::<u8>().map_err(|_| E::Format)?;
        let day = next()?.parse::<u8>().map_err(|_| E::Format)?;

        Self::from_ymd(year, month, day)
    }

    /// Returns the calendar year of this [`Date`].
    #[must_use]
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Returns the calendar month of this [`Date`] (`1..=12`).
    #[must_use]
    pub fn month(&self) -> u8 {
        u8::from(self.inner.month())
    }

    /// Returns the day of the month of this [`Date`] (`1..=31`).
    #[must_use]
    pub fn day(&self) -> u8 {
        self.inner.day()
    }

    /// Coerces one kind of [`Date`] into another.
    #[must_use]
    pub fn coerce<NewOf: ?Sized>(self) -> DateOf<NewOf> {
        DateOf {
            inner: self.inner,
            _of: PhantomData,
        }
    }
}

/// Error of parsing [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
pub enum ParseError {
    /// String is not in the `YYYY-MM-DD` shape.
    #[display("not a `YYYY-MM-DD` date")]
    Format,

    /// Parsed [`Date`] has an out of range component.
    ComponentRange(time::error::ComponentRange),
}

impl<Of: ?Sized> fmt::Display for DateOf<Of> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.inner.year(),
            u8::from(self.inner.month()),
            self.inner.day(),
        )
    }
}

impl<Of: ?Sized> FromStr for DateOf<Of> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ymd_str(s)
    }
}

impl<Of: ?Sized> Copy for DateOf<Of> {}
impl<Of: ?Sized> Clone for DateOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateOf<Of> {}
impl<Of: ?Sized> PartialEq for DateOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> From<DateOf<Of>> for time::Date {
    fn from(date: DateOf<Of>) -> Self {
        date.inner
    }
}

#[cfg(test)]
mod spec {
    use super::{Date, ParseError};

    #[test]
    fn from_ymd_str() {
        let date = Date::from_ymd_str("2014-02-25").unwrap();
        assert_eq!(date.year(), 2014);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 25);

        assert!(Date::from_ymd_str("2014-2-5").is_ok());

        assert!(matches!(
            Date::from_ymd_str("2014/02/25"),
            Err(ParseError::Format),
        ));
        assert!(matches!(
            Date::from_ymd_str("2014-02"),
            Err(ParseError::Format),
        ));
        assert!(matches!(
            Date::from_ymd_str("2014-02-25T00:00:00"),
            Err(ParseError::Format),
        ));
        assert!(matches!(
            Date::from_ymd_str("20140225"),
            Err(ParseError::Format),
        ));
        assert!(matches!(
            Date::from_ymd_str(""),
            Err(ParseError::Format),
        ));

        assert!(matches!(
            Date::from_ymd_str("2014-13-01"),
            Err(ParseError::ComponentRange(_)),
        ));
        assert!(matches!(
            Date::from_ymd_str("2014-02-30"),
            Err(ParseError::ComponentRange(_)),
        ));
    }

    #[test]
    fn ordering() {
        let earlier = Date::from_ymd_str("2014-02-25").unwrap();
        let later = Date::from_ymd_str("2015-04-14").unwrap();

        assert!(earlier < later);
        assert_eq!(earlier, Date::from_ymd_str("2014-2-25").unwrap());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Date::from_ymd_str("2014-2-5").unwrap().to_string(),
            "2014-02-05",
        );
        assert_eq!(
            "0987-12-31".parse::<Date>().unwrap().to_string(),
            "0987-12-31",
        );
    }
}
