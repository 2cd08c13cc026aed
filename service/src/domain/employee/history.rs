//! Effective-date [`History`] of an [`Employee`] attribute.
//!
//! [`Employee`]: crate::domain::Employee

use std::collections::BTreeMap;

use common::Date;
use derive_more::{Display, Error as StdError};

#[cfg(doc)]
use crate::domain::Employee;

/// Effective-date history of a single [`Employee`] attribute.
///
/// Maps the [`Date`] a value came into effect to that value, ordered by
/// calendar date ascending. Non-empty from construction on and immutable
/// afterwards, so [`History::latest()`] is total and concurrent readers need
/// no synchronization.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History<V>(BTreeMap<Date, V>);

impl<V> History<V> {
    /// Creates a new [`History`] from the provided entries.
    ///
    /// Entries may arrive in any order.
    ///
    /// # Errors
    ///
    /// - [`InvalidError::Empty`] when `entries` yields nothing.
    /// - [`InvalidError::DuplicateDate`] when two entries share an effective
    ///   [`Date`].
    pub fn new(
        entries: impl IntoIterator<Item = (Date, V)>,
    ) -> Result<Self, InvalidError> {
        use InvalidError as E;

        let mut map = BTreeMap::new();
        for (date, value) in entries {
            if map.insert(date, value).is_some() {
                return Err(E::DuplicateDate(date));
            }
        }
        if map.is_empty() {
            return Err(E::Empty);
        }

        Ok(Self(map))
    }

    /// Returns the most recent value of this [`History`].
    #[must_use]
    pub fn latest(&self) -> &V {
        self.latest_entry().1
    }

    /// Returns the most recent entry of this [`History`].
    #[must_use]
    pub fn latest_entry(&self) -> (Date, &V) {
        let (date, value) =
            self.0.last_key_value().expect("non-empty by construction");
        (*date, value)
    }

    /// Returns the earliest entry of this [`History`].
    #[must_use]
    pub fn first_entry(&self) -> (Date, &V) {
        let (date, value) =
            self.0.first_key_value().expect("non-empty by construction");
        (*date, value)
    }

    /// Returns the value in effect on the provided [`Date`].
    ///
    /// [`None`] is returned in case the [`Date`] precedes the earliest entry
    /// of this [`History`].
    #[must_use]
    pub fn as_of(&self, date: Date) -> Option<&V> {
        self.0.range(..=date).next_back().map(|(_, value)| value)
    }

    /// Returns an [`Iterator`] over the entries of this [`History`], ordered
    /// by effective [`Date`] ascending.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &V)> {
        self.0.iter().map(|(date, value)| (*date, value))
    }

    /// Returns the number of entries in this [`History`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a [`History`] is non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Error of constructing a [`History`].
#[derive(Clone, Copy, Debug, Display, Eq, StdError, PartialEq)]
pub enum InvalidError {
    /// No entries were provided.
    #[display("no entries provided")]
    Empty,

    /// Two entries share the same effective [`Date`].
    #[display("duplicate entry for date `{_0}`")]
    DuplicateDate(#[error(not(source))] Date),
}

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{History, InvalidError};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn orders_entries_by_date() {
        let history = History::new([
            (date("2015-04-14"), "supervisor"),
            (date("2014-02-25"), "clerk"),
        ])
        .unwrap();

        assert_eq!(*history.latest(), "supervisor");
        assert_eq!(history.latest_entry(), (date("2015-04-14"), &"supervisor"));
        assert_eq!(history.first_entry(), (date("2014-02-25"), &"clerk"));
        assert_eq!(
            history.iter().collect::<Vec<_>>(),
            vec![
                (date("2014-02-25"), &"clerk"),
                (date("2015-04-14"), &"supervisor"),
            ],
        );
    }

    #[test]
    fn answers_as_of_queries() {
        let history = History::new([
            (date("2014-02-25"), 1),
            (date("2014-06-23"), 2),
            (date("2014-08-29"), 3),
        ])
        .unwrap();

        assert_eq!(history.as_of(date("2014-01-01")), None);
        assert_eq!(history.as_of(date("2014-02-25")), Some(&1));
        assert_eq!(history.as_of(date("2014-02-26")), Some(&1));
        assert_eq!(history.as_of(date("2014-06-23")), Some(&2));
        assert_eq!(history.as_of(date("2014-08-28")), Some(&2));
        assert_eq!(history.as_of(date("2014-08-29")), Some(&3));
        assert_eq!(history.as_of(date("2020-01-01")), Some(&3));
    }

    #[test]
    fn single_entry_answers_everything() {
        let history = History::new([(date("2014-02-25"), "clerk")]).unwrap();

        assert_eq!(*history.latest(), "clerk");
        assert_eq!(history.as_of(date("2014-02-25")), Some(&"clerk"));
        assert_eq!(history.as_of(date("2030-12-31")), Some(&"clerk"));
        assert_eq!(history.as_of(date("2014-02-24")), None);
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(
            History::<&str>::new([]),
            Err(InvalidError::Empty),
        );
    }

    #[test]
    fn rejects_duplicate_dates() {
        assert_eq!(
            History::new([
                (date("2014-02-25"), "clerk"),
                (date("2014-02-25"), "supervisor"),
            ]),
            Err(InvalidError::DuplicateDate(date("2014-02-25"))),
        );
    }
}
