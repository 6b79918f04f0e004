/// Earliest birth year a PESEL number can encode (inclusive)
pub const MIN_YEAR: u16 = 1800;
/// Latest birth year a PESEL number can encode (inclusive)
pub const MAX_YEAR: u16 = 2299;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Month offset per century, as `(first year of century, offset)`.
/// Ordered by century; covers `MIN_YEAR..=MAX_YEAR` exactly.
pub const CENTURY_OFFSETS: [(u16, u8); 5] = [
    (1800, 80),
    (1900, 0),
    (2000, 20),
    (2100, 40),
    (2200, 60),
];

/// Per-position checksum weights over the first ten digits
pub const CHECKSUM_WEIGHTS: [u8; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Total digits in an identifier
pub const IDENTIFIER_LEN: usize = 11;

/// Largest serial number (inclusive)
pub const MAX_SERIAL: u16 = 9999;
/// Number of serial numbers available per birth date
pub const SERIALS_PER_DAY: u16 = MAX_SERIAL + 1;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
