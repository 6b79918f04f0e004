use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::{
    BirthDate, GenerateError, prelude::*,
    types::{Year, days_in_year},
};

/// An inclusive span of whole birth years.
/// The start year must be less than or equal to the end year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}..={end}")]
pub struct YearRange {
    start: Year,
    end:   Year,
}

impl YearRange {
    /// Creates a new year range with validation.
    ///
    /// # Errors
    /// Returns `GenerateError::InvalidRange` if start > end or either year is
    /// outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(start: u16, end: u16) -> Result<Self, GenerateError> {
        let invalid = || GenerateError::InvalidRange { start, end };
        let (Ok(start_year), Ok(end_year)) = (Year::new(start), Year::new(end)) else {
            return Err(invalid());
        };
        if start_year > end_year {
            return Err(invalid());
        }
        tracing::debug!(start, end, "year range validated");
        Ok(Self {
            start: start_year,
            end:   end_year,
        })
    }

    /// A range covering only `year`.
    ///
    /// # Errors
    /// Returns `GenerateError::InvalidRange` if the year is out of span.
    pub fn single(year: u16) -> Result<Self, GenerateError> {
        Self::new(year, year)
    }

    /// Returns the start year of the range
    pub const fn start(&self) -> Year {
        self.start
    }

    /// Returns the end year of the range
    pub const fn end(&self) -> Year {
        self.end
    }

    /// Each year in the range, ascending
    pub fn years(&self) -> impl DoubleEndedIterator<Item = Year> + Clone + use<> {
        // every value in start..=end lies within the validated span
        (self.start.get()..=self.end.get()).filter_map(|y| Year::new(y).ok())
    }

    /// Total number of calendar days in the range
    pub fn day_count(&self) -> u64 {
        (self.start.get()..=self.end.get())
            .map(|y| u64::from(days_in_year(y)))
            .sum()
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &BirthDate) -> bool {
        self.start <= date.year() && date.year() <= self.end
    }

    /// Every calendar date in the range, in chronological order
    pub fn dates(&self) -> Dates {
        Dates {
            next:      Some(BirthDate::first_of_year(self.start)),
            last:      BirthDate::last_of_year(self.end),
            remaining: self.day_count(),
        }
    }
}

impl IntoIterator for YearRange {
    type Item = BirthDate;
    type IntoIter = Dates;

    fn into_iter(self) -> Self::IntoIter {
        self.dates()
    }
}

impl Serialize for YearRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.start.get(), self.end.get()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for YearRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (start, end) = <(u16, u16)>::deserialize(deserializer)?;
        Self::new(start, end).map_err(serde::de::Error::custom)
    }
}

/// Lazy walk over consecutive calendar days. Cloning restarts from the
/// clone point.
#[derive(Debug, Clone)]
pub struct Dates {
    next:      Option<BirthDate>,
    last:      BirthDate,
    remaining: u64,
}

impl Iterator for Dates {
    type Item = BirthDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.last {
            current.succ()
        } else {
            None
        };
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Dates {}

impl FusedIterator for Dates {}
