use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Format of a well-formed added date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar date a book entered the catalog, as `YYYY-MM-DD`.
///
/// The text is kept verbatim: dates loaded from disk are never normalized,
/// and an empty date is allowed for rows written without one. Ordering is
/// plain string ordering, which matches calendar order only because the
/// format is fixed-width and zero-padded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddedDate(String);

impl AddedDate {
    /// Wrap a date string exactly as given.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_FORMAT).to_string())
    }

    /// The empty date carried by rows that never had one.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the text as a calendar date, if it is one.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).ok()
    }
}

impl fmt::Display for AddedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AddedDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AddedDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_is_well_formed() {
        let today = AddedDate::today();
        assert_eq!(today.as_str().len(), 10);
        assert!(today.to_date().is_some());
    }

    #[test]
    fn verbatim_text_is_preserved() {
        let odd = AddedDate::new("sometime in 1999");
        assert_eq!(odd.as_str(), "sometime in 1999");
        assert!(odd.to_date().is_none());
    }

    #[test]
    fn string_order_matches_calendar_order_for_iso_dates() {
        let older = AddedDate::new("2023-09-30");
        let newer = AddedDate::new("2023-10-01");
        assert!(older < newer);
        assert!(AddedDate::empty() < older);
    }

    #[test]
    fn from_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(AddedDate::from_date(date).as_str(), "2024-03-07");
    }
}
