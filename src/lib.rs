//! Enumerates structurally valid PESEL numbers.
//!
//! A PESEL number is eleven digits: the birth date (with the century folded
//! into the month), a four-digit serial whose last digit carries the sex, and
//! a weighted check digit.
//!
//! ```
//! use pesel_gen::{SexFilter, generate};
//!
//! let first = generate(2011, None, Some(SexFilter::Male))?
//!     .map(|id| id.to_string())
//!     .next();
//! assert_eq!(first.as_deref(), Some("11210100013"));
//! # Ok::<(), pesel_gen::GenerateError>(())
//! ```

mod consts;
mod date;
mod encode;
mod error;
mod generator;
pub mod output;
mod prelude;
mod range;
mod serial;
mod types;

pub use consts::*;
pub use date::BirthDate;
pub use encode::{Identifier, century_offset, checksum, date_digits, date_prefix, decode, decode_month};
pub use error::{DateError, DecodeError, GenerateError};
pub use generator::{Generator, Identifiers, generate, generate_str};
pub use range::{Dates, YearRange};
pub use serial::{Serials, Sex, SexFilter};
pub use types::{Day, Month, SerialNumber, Year, days_in_month, days_in_year, is_leap_year};
