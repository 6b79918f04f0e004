use crate::{MAX_MONTH, MAX_SERIAL, MAX_YEAR, MIN_YEAR, prelude::*};

/// Error building a single validated value (year, month, day, serial).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid serial number: {} (must be 0-{})", "_0", MAX_SERIAL)]
    InvalidSerial(u16),
}

impl std::error::Error for DateError {}

/// Precondition failures raised before any identifier is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Start year after end year, or either outside the encodable span.
    #[error(
        "invalid year range {start}..={end} (years must be within {}..={} and start <= end)",
        MIN_YEAR,
        MAX_YEAR
    )]
    InvalidRange { start: u16, end: u16 },

    /// Sex filter is not one of `male`, `female`, `any`.
    #[error("invalid sex filter {0:?} (expected one of: male, female, any)")]
    InvalidSexFilter(String),

    #[error(transparent)]
    Date(#[from] DateError),
}

/// Reasons an 11-digit string is not a well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("identifier must be exactly 11 digits, got {0}")]
    InvalidLength(usize),

    #[error("unexpected character {found:?} at position {position}")]
    InvalidCharacter { position: usize, found: char },

    /// Encoded month falls outside every century band.
    #[error("encoded month {0:02} does not map to any supported century")]
    InvalidMonth(u8),

    #[error(transparent)]
    InvalidDate(#[from] DateError),

    #[error("checksum mismatch: expected {expected}, found {found}")]
    ChecksumMismatch { expected: u8, found: u8 },
}
