use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

/// Days the window moves per prev/next click.
pub const PAGE_SIZE: i64 = 5;

/// Dates shown at once in the picker.
pub const WINDOW_LEN: i64 = 7;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar days the backend reports as fully booked.
///
/// Dates are kept as [`NaiveDate`] so the day rendered on a button and the day
/// looked up here are always the same calendar day, whatever the host timezone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedDateSet {
    dates: BTreeSet<NaiveDate>,
}

impl BookedDateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from canonical `YYYY-MM-DD` strings, dropping anything
    /// that does not parse.
    pub fn from_strings<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = raw
            .into_iter()
            .filter_map(|s| {
                let s = s.as_ref();
                match parse_date(s) {
                    Some(date) => Some(date),
                    None => {
                        tracing::warn!("ignoring malformed booked date {s:?}");
                        None
                    }
                }
            })
            .collect();
        Self { dates }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn count(&self) -> usize {
        self.dates.len()
    }
}

impl FromIterator<NaiveDate> for BookedDateSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

/// The seven consecutive days starting `offset` days after `today`. Days past
/// the end of the calendar are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleWindow {
    pub offset: i64,
    pub dates: Vec<NaiveDate>,
}

impl VisibleWindow {
    pub fn compute(today: NaiveDate, offset: i64) -> Self {
        let offset = offset.max(0);
        let dates = (0..WINDOW_LEN)
            .filter_map(|i| {
                let days = Duration::try_days(offset.checked_add(i)?)?;
                today.checked_add_signed(days)
            })
            .collect();
        Self { offset, dates }
    }

    /// First day in display order that is not full.
    pub fn first_open(&self, booked: &BookedDateSet) -> Option<NaiveDate> {
        self.dates.iter().copied().find(|d| !booked.contains(*d))
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
