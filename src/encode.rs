//! Digit layout of an identifier.
//!
//! ```text
//! Y Y M M D D S S S S C
//! ```
//!
//! `YY` is the year within its century, `MM` the month plus the century
//! offset, `DD` the day, `SSSS` the serial number and `C` the check digit.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    BirthDate, CENTURY_OFFSETS, CHECKSUM_WEIGHTS, DecodeError, IDENTIFIER_LEN, MAX_MONTH, MIN_YEAR,
    Sex,
    types::{SerialNumber, Year},
};

/// Month offset for the century `year` falls in.
pub const fn century_offset(year: Year) -> u8 {
    let index = ((year.get() - MIN_YEAR) / 100) as usize;
    CENTURY_OFFSETS[index].1
}

/// Inverse of the century table: maps an encoded month back to
/// `(first year of century, calendar month)`.
pub fn decode_month(encoded: u8) -> Option<(u16, u8)> {
    CENTURY_OFFSETS.iter().find_map(|&(century, offset)| {
        let month = encoded.checked_sub(offset)?;
        (1..=MAX_MONTH).contains(&month).then_some((century, month))
    })
}

/// The six date digits `YYMMDD`.
pub const fn date_digits(date: &BirthDate) -> [u8; 6] {
    let yy = date.year().within_century();
    let mm = date.month().get() + century_offset(date.year());
    let dd = date.day().get();
    [yy / 10, yy % 10, mm / 10, mm % 10, dd / 10, dd % 10]
}

/// `YYMMDD` as a string, e.g. `112315` for 2011-03-15.
pub fn date_prefix(date: &BirthDate) -> String {
    date_digits(date).iter().map(|d| char::from(b'0' + d)).collect()
}

/// Weighted mod-10 check digit over the first ten digits.
pub fn checksum(digits: &[u8; 10]) -> u8 {
    let total: u32 = digits
        .iter()
        .zip(CHECKSUM_WEIGHTS)
        .map(|(&d, w)| u32::from(d) * u32::from(w))
        .sum();
    (total % 10) as u8
}

/// A complete 11-digit identifier together with the values it encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    digits:     [u8; IDENTIFIER_LEN],
    birth_date: BirthDate,
    serial:     SerialNumber,
}

impl Identifier {
    /// Builds the identifier for a birth date and serial number.
    pub fn encode(birth_date: BirthDate, serial: SerialNumber) -> Self {
        let mut digits = [0u8; IDENTIFIER_LEN];
        digits[..6].copy_from_slice(&date_digits(&birth_date));
        digits[6..10].copy_from_slice(&serial.digits());

        let mut body = [0u8; 10];
        body.copy_from_slice(&digits[..10]);
        digits[10] = checksum(&body);

        Self {
            digits,
            birth_date,
            serial,
        }
    }

    /// Decimal digit values, leftmost first
    pub const fn digits(&self) -> [u8; IDENTIFIER_LEN] {
        self.digits
    }

    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub const fn serial(&self) -> SerialNumber {
        self.serial
    }

    pub const fn sex(&self) -> Sex {
        Sex::of_serial(self.serial)
    }

    pub const fn check_digit(&self) -> u8 {
        self.digits[IDENTIFIER_LEN - 1]
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Identifier {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != IDENTIFIER_LEN {
            return Err(DecodeError::InvalidLength(len));
        }

        let mut digits = [0u8; IDENTIFIER_LEN];
        for (position, (slot, c)) in digits.iter_mut().zip(s.chars()).enumerate() {
            let value = c
                .to_digit(10)
                .ok_or(DecodeError::InvalidCharacter { position, found: c })?;
            *slot = value as u8;
        }

        let pair = |i: usize| digits[i] * 10 + digits[i + 1];
        let encoded_month = pair(2);
        let (century, month) =
            decode_month(encoded_month).ok_or(DecodeError::InvalidMonth(encoded_month))?;
        let year = century + u16::from(pair(0));
        let birth_date = BirthDate::new(year, month, pair(4))?;

        let serial_value = digits[6..10]
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d));
        let serial = SerialNumber::new(serial_value)?;

        let identifier = Self::encode(birth_date, serial);
        let found = digits[IDENTIFIER_LEN - 1];
        if identifier.check_digit() != found {
            return Err(DecodeError::ChecksumMismatch {
                expected: identifier.check_digit(),
                found,
            });
        }
        Ok(identifier)
    }
}

/// Parses and verifies an identifier string.
///
/// # Errors
/// Returns `DecodeError` if the string is not 11 digits, encodes no valid date,
/// or carries the wrong check digit.
pub fn decode(s: &str) -> Result<Identifier, DecodeError> {
    s.parse()
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
