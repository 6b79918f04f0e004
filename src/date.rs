use std::str::FromStr;

use crate::{
    DATE_SEPARATOR, DECEMBER, DateError, JANUARY, MAX_YEAR, MIN_DAY, prelude::*,
    types::{Day, Month, Year, days_in_month},
};

/// A full calendar date within the encodable span.
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BirthDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl BirthDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range or the day does not
    /// exist in that month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a date from already-validated parts (day must have been validated
    /// against the same year and month)
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// January 1st of `year`
    pub const fn first_of_year(year: Year) -> Self {
        Self::from_parts(year, Month::JANUARY, Day::FIRST)
    }

    /// December 31st of `year`
    pub const fn last_of_year(year: Year) -> Self {
        Self::from_parts(year, Month::DECEMBER, Day::LAST_OF_DECEMBER)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// The following calendar day, or `None` past the last encodable date.
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = next_day(self.year.get(), self.month.get(), self.day.get())?;
        // next_day only yields real calendar dates, so only the year can be rejected
        Self::new(y, m, d).ok()
    }
}

// --- calendar stepping ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= DECEMBER);
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    let max = days_in_month(year, month);
    if day < max {
        Some((year, month, day + 1))
    } else {
        // roll to first of next month (respects MAX_YEAR limit)
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    /// Parses ISO `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };
        let bad = || DateError::InvalidFormat(trimmed.to_owned());
        let year = y.parse::<u16>().map_err(|_| bad())?;
        let month = m.parse::<u8>().map_err(|_| bad())?;
        let day = d.parse::<u8>().map_err(|_| bad())?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
