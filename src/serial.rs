use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{GenerateError, SERIALS_PER_DAY, prelude::*, types::SerialNumber};

/// Sex encoded by the parity of the last serial digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[display(fmt = "male")]
    Male,
    #[display(fmt = "female")]
    Female,
}

impl Sex {
    /// Odd serials are male, even serials female
    pub const fn of_serial(serial: SerialNumber) -> Self {
        if serial.is_odd() { Self::Male } else { Self::Female }
    }
}

/// Which serial numbers to enumerate for each birth date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexFilter {
    #[display(fmt = "male")]
    Male,
    #[display(fmt = "female")]
    Female,
    #[default]
    #[display(fmt = "any")]
    Any,
}

impl SexFilter {
    pub const fn matches(self, serial: SerialNumber) -> bool {
        match self {
            Self::Male => serial.is_odd(),
            Self::Female => !serial.is_odd(),
            Self::Any => true,
        }
    }

    /// Serial numbers per birth date under this filter
    pub const fn serials_per_day(self) -> u16 {
        match self {
            Self::Male | Self::Female => SERIALS_PER_DAY / 2,
            Self::Any => SERIALS_PER_DAY,
        }
    }

    /// Matching serial numbers in ascending order.
    pub const fn serials(self) -> Serials {
        let (next, step) = match self {
            Self::Male => (1, 2),
            Self::Female => (0, 2),
            Self::Any => (0, 1),
        };
        Serials { next, step }
    }
}

impl From<Sex> for SexFilter {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => Self::Male,
            Sex::Female => Self::Female,
        }
    }
}

impl FromStr for SexFilter {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "any" => Ok(Self::Any),
            _ => Err(GenerateError::InvalidSexFilter(s.to_owned())),
        }
    }
}

/// Lazy ascending walk over the serial numbers accepted by a [`SexFilter`].
#[derive(Debug, Clone)]
pub struct Serials {
    next: u16,
    step: u16,
}

impl Iterator for Serials {
    type Item = SerialNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let serial = SerialNumber::new(self.next).ok()?;
        self.next = self.next.saturating_add(self.step);
        Some(serial)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = u16::try_from(n).unwrap_or(u16::MAX);
        self.next = self.next.saturating_add(self.step.saturating_mul(skip));
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(SERIALS_PER_DAY.saturating_sub(self.next).div_ceil(self.step));
        (n, Some(n))
    }
}

impl ExactSizeIterator for Serials {}

impl FusedIterator for Serials {}
