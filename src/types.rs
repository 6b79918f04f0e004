use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_SERIAL, MAX_YEAR, MIN_YEAR,
};
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1800..=2299),
/// the span a PESEL month offset can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is out of range.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(DateError::InvalidYear(value));
        }
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Two-digit year within its century
    #[inline]
    pub const fn within_century(self) -> u8 {
        (self.get() % CENTURY_CYCLE) as u8
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub(crate) const JANUARY: Self = Self(NonZeroU8::MIN);
    pub(crate) const DECEMBER: Self = Self(NonZeroU8::MIN.saturating_add(DECEMBER - 1));

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    pub(crate) const FIRST: Self = Self(NonZeroU8::MIN);
    pub(crate) const LAST_OF_DECEMBER: Self =
        Self(NonZeroU8::MIN.saturating_add(DAYS_IN_MONTH[DECEMBER as usize] - 1));

    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year,
            month,
            day: value,
        };
        if month == 0 || month > MAX_MONTH {
            return Err(invalid);
        }
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four digits distinguishing people born on the same day.
/// The last digit is odd for men and even for women.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct SerialNumber(u16);

impl SerialNumber {
    /// # Errors
    /// Returns `DateError::InvalidSerial` if the value exceeds `MAX_SERIAL`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        if value > MAX_SERIAL {
            return Err(DateError::InvalidSerial(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// The four decimal digits, most significant first
    pub const fn digits(self) -> [u8; 4] {
        let v = self.0;
        [
            (v / 1000) as u8,
            (v / 100 % 10) as u8,
            (v / 10 % 10) as u8,
            (v % 10) as u8,
        ]
    }

    #[inline]
    pub const fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }
}

impl TryFrom<u16> for SerialNumber {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SerialNumber> for u16 {
    fn from(serial: SerialNumber) -> Self {
        serial.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// 366 for leap years, 365 otherwise
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1800).is_ok());
        assert!(Year::new(2000).is_ok());
        assert!(Year::new(2299).is_ok());
    }

    #[test]
    fn test_year_new_out_of_span() {
        assert!(matches!(Year::new(0), Err(DateError::InvalidYear(0))));
        assert!(matches!(Year::new(1799), Err(DateError::InvalidYear(1799))));
        assert!(matches!(Year::new(2300), Err(DateError::InvalidYear(2300))));
    }

    #[test]
    fn test_year_within_century() {
        assert_eq!(Year::new(1800).expect("valid year").within_century(), 0);
        assert_eq!(Year::new(1999).expect("valid year").within_century(), 99);
        assert_eq!(Year::new(2011).expect("valid year").within_century(), 11);
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(2024).expect("valid year");
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2024).expect("valid year");
        let json = serde_json::to_string(&year).expect("serialize year");
        assert_eq!(json, "2024");

        let parsed: Year = serde_json::from_str(&json).expect("deserialize year");
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("1700");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
        assert!(matches!(Month::new(0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, 1).is_ok());
        assert!(Day::new(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, 4).is_ok());
        assert!(Day::new(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
        assert!(Day::new(0, 2024, 1).is_err());
        assert!(Day::new(1, 2024, 13).is_err());
    }

    #[test]
    fn test_serial_number() {
        assert!(SerialNumber::new(0).is_ok());
        assert!(SerialNumber::new(9999).is_ok());
        assert!(matches!(
            SerialNumber::new(10_000),
            Err(DateError::InvalidSerial(10_000))
        ));

        let serial = SerialNumber::new(407).expect("valid serial");
        assert_eq!(serial.to_string(), "0407");
        assert_eq!(serial.digits(), [0, 4, 0, 7]);
        assert!(serial.is_odd());
        assert!(!SerialNumber::new(9998).expect("valid serial").is_odd());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2020,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1800,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2200,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_all_months_have_valid_days() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
    }
}
