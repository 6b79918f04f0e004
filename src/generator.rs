use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::{
    BirthDate, Dates, GenerateError, Identifier, Serials, SexFilter, YearRange,
};

/// A request for every identifier born within a span of years.
///
/// `end_year` defaults to `start_year`, `sex` defaults to [`SexFilter::Any`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Generator {
    pub start_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year:   Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex:        Option<SexFilter>,
}

impl Generator {
    pub const fn new(start_year: u16) -> Self {
        Self {
            start_year,
            end_year: None,
            sex: None,
        }
    }

    #[must_use]
    pub const fn with_end_year(mut self, end_year: u16) -> Self {
        self.end_year = Some(end_year);
        self
    }

    #[must_use]
    pub const fn with_sex(mut self, sex: SexFilter) -> Self {
        self.sex = Some(sex);
        self
    }

    /// The validated year range this request covers.
    ///
    /// # Errors
    /// Returns `GenerateError::InvalidRange` for out-of-span or reversed years.
    pub fn range(&self) -> Result<YearRange, GenerateError> {
        YearRange::new(self.start_year, self.end_year.unwrap_or(self.start_year))
    }

    pub fn filter(&self) -> SexFilter {
        self.sex.unwrap_or_default()
    }

    /// Validates the request and returns the lazy identifier sequence.
    ///
    /// # Errors
    /// Returns `GenerateError::InvalidRange` before anything is produced if the
    /// years are out of span or reversed.
    pub fn build(&self) -> Result<Identifiers, GenerateError> {
        let identifiers = Identifiers::new(self.range()?, self.filter());
        tracing::debug!(
            range = %identifiers.range,
            sex = %identifiers.filter,
            planned = identifiers.remaining,
            "identifier generator ready"
        );
        Ok(identifiers)
    }
}

/// Builds the lazy sequence of identifiers for `start_year..=end_year`.
///
/// # Errors
/// Returns `GenerateError::InvalidRange` if either year is outside
/// `1800..=2299` or `start_year > end_year`.
pub fn generate(
    start_year: u16,
    end_year: Option<u16>,
    sex: Option<SexFilter>,
) -> Result<Identifiers, GenerateError> {
    Generator {
        start_year,
        end_year,
        sex,
    }
    .build()
}

/// Like [`generate`], taking the sex filter as text (`male`, `female`, `any`).
///
/// # Errors
/// Returns `GenerateError::InvalidSexFilter` for an unrecognized filter, or
/// `GenerateError::InvalidRange` as [`generate`] does.
pub fn generate_str(
    start_year: u16,
    end_year: Option<u16>,
    sex: Option<&str>,
) -> Result<Identifiers, GenerateError> {
    let sex = sex.map(str::parse::<SexFilter>).transpose()?;
    generate(start_year, end_year, sex)
}

/// Dates in the outer loop, serial numbers in the inner loop. One identifier
/// is computed per call to `next`.
#[derive(Debug, Clone)]
pub struct Identifiers {
    range:     YearRange,
    filter:    SexFilter,
    dates:     Dates,
    current:   Option<BirthDate>,
    serials:   Serials,
    remaining: u64,
}

impl Identifiers {
    pub fn new(range: YearRange, filter: SexFilter) -> Self {
        let mut dates = range.dates();
        let current = dates.next();
        Self {
            range,
            filter,
            dates,
            current,
            serials: filter.serials(),
            remaining: range.day_count() * u64::from(filter.serials_per_day()),
        }
    }

    pub const fn range(&self) -> YearRange {
        self.range
    }

    pub const fn sex_filter(&self) -> SexFilter {
        self.filter
    }

    /// Identifiers not yet produced
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// The birth date the next identifier will carry
    pub const fn current_date(&self) -> Option<BirthDate> {
        self.current
    }

    /// The same sequence rendered as 11-character digit strings.
    pub fn into_strings(self) -> impl Iterator<Item = String> {
        self.map(|id| id.to_string())
    }
}

impl Iterator for Identifiers {
    type Item = Identifier;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let date = self.current?;
            if let Some(serial) = self.serials.next() {
                self.remaining = self.remaining.saturating_sub(1);
                return Some(Identifier::encode(date, serial));
            }
            self.current = self.dates.next();
            self.serials = self.filter.serials();
        }
    }

    /// Skips whole days without encoding the identifiers in between.
    fn nth(&mut self, mut n: usize) -> Option<Self::Item> {
        loop {
            self.current?;
            let left_today = self.serials.len();
            if n < left_today {
                self.remaining = self.remaining.saturating_sub(n as u64);
                let serial = self.serials.nth(n)?;
                self.remaining = self.remaining.saturating_sub(1);
                return self.current.map(|date| Identifier::encode(date, serial));
            }
            n -= left_today;
            self.remaining = self.remaining.saturating_sub(left_today as u64);
            self.current = self.dates.next();
            self.serials = self.filter.serials();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Identifiers {}

impl FusedIterator for Identifiers {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sex, checksum, test_utils::date};

    #[test]
    fn test_defaults() {
        let ids = generate(2011, None, None).expect("valid request");
        assert_eq!(ids.range(), YearRange::single(2011).expect("valid range"));
        assert_eq!(ids.sex_filter(), SexFilter::Any);
    }

    #[test]
    fn test_first_identifiers_follow_serial_order() {
        let first: Vec<String> = generate(2011, None, Some(SexFilter::Male))
            .expect("valid request")
            .into_strings()
            .take(3)
            .collect();
        assert_eq!(first[0], "11210100013");
        assert_eq!(first[1], format!("1121010003{}", checksum(&[1, 1, 2, 1, 0, 1, 0, 0, 0, 3])));
        assert!(first[2].starts_with("1121010005"));
    }

    #[test]
    fn test_worked_example_is_generated() {
        let found = generate(2011, None, Some(SexFilter::Male))
            .expect("valid request")
            .into_strings()
            .any(|id| id == "11231500014");
        assert!(found);

        let found = generate(1911, None, Some(SexFilter::Male))
            .expect("valid request")
            .into_strings()
            .any(|id| id == "11032300015");
        assert!(found);
    }

    #[test]
    fn test_date_rolls_over_after_last_serial() {
        let mut ids = generate(1900, None, Some(SexFilter::Female)).expect("valid request");
        let last_of_first_day = ids.nth(4_999).expect("5000 female serials on Jan 1");
        assert_eq!(last_of_first_day.birth_date(), date(1900, 1, 1));
        assert_eq!(last_of_first_day.serial().get(), 9998);

        let first_of_second_day = ids.next().expect("Jan 2 follows");
        assert_eq!(first_of_second_day.birth_date(), date(1900, 1, 2));
        assert_eq!(first_of_second_day.serial().get(), 0);
    }

    #[test]
    fn test_counts() {
        struct TestCase {
            year:     u16,
            filter:   SexFilter,
            expected: u64,
        }

        let cases = [
            TestCase { year: 2000, filter: SexFilter::Any, expected: 366 * 10_000 },
            TestCase { year: 1900, filter: SexFilter::Any, expected: 365 * 10_000 },
            TestCase { year: 2023, filter: SexFilter::Male, expected: 365 * 5_000 },
            TestCase { year: 2024, filter: SexFilter::Female, expected: 366 * 5_000 },
        ];

        for case in &cases {
            let ids = generate(case.year, Some(case.year), Some(case.filter)).expect("valid request");
            assert_eq!(ids.remaining(), case.expected, "{} {}", case.year, case.filter);
            assert_eq!(ids.len() as u64, case.expected);
        }
    }

    #[test]
    fn test_full_enumeration_count_matches_plan() {
        let ids = generate(1900, None, Some(SexFilter::Male)).expect("valid request");
        let planned = ids.remaining();
        assert_eq!(ids.count() as u64, planned);
    }

    #[test]
    fn test_every_identifier_matches_filter() {
        let ids = generate(2299, None, Some(SexFilter::Female)).expect("valid request");
        assert!(ids.take(20_000).all(|id| id.sex() == Sex::Female && id.digits()[9] % 2 == 0));
    }

    #[test]
    fn test_boundaries() {
        assert!(generate(1800, Some(1800), Some(SexFilter::Any)).is_ok());
        assert!(generate(2299, Some(2299), Some(SexFilter::Any)).is_ok());
        assert_eq!(
            generate(1799, Some(1800), Some(SexFilter::Any)).map(|_| ()),
            Err(GenerateError::InvalidRange { start: 1799, end: 1800 })
        );
        assert_eq!(
            generate(2000, Some(2300), Some(SexFilter::Any)).map(|_| ()),
            Err(GenerateError::InvalidRange { start: 2000, end: 2300 })
        );
        assert_eq!(
            generate(2001, Some(2000), None).map(|_| ()),
            Err(GenerateError::InvalidRange { start: 2001, end: 2000 })
        );
    }

    #[test]
    fn test_leap_day_presence() {
        let leap = generate(2000, Some(2000), Some(SexFilter::Any)).expect("valid request");
        assert!(leap.step_by(10_000).any(|id| id.to_string().starts_with("002229")));

        let century = generate(1900, Some(1900), Some(SexFilter::Any)).expect("valid request");
        assert!(!century.step_by(10_000).any(|id| id.to_string().starts_with("000229")));
    }

    #[test]
    fn test_generate_str() {
        let ids = generate_str(2011, None, Some("male")).expect("valid request");
        assert_eq!(ids.sex_filter(), SexFilter::Male);

        let err = generate_str(2011, None, Some("unknown")).map(|_| ());
        assert_eq!(err, Err(GenerateError::InvalidSexFilter("unknown".to_owned())));
    }

    #[test]
    fn test_early_termination_is_silent() {
        let capped: Vec<Identifier> = generate(1800, Some(2299), None)
            .expect("valid request")
            .take(5)
            .collect();
        assert_eq!(capped.len(), 5);
        assert!(capped.iter().all(|id| id.birth_date() == date(1800, 1, 1)));
    }

    #[test]
    fn test_nth_matches_stepwise_iteration() {
        let fast = generate(2000, Some(2001), Some(SexFilter::Male))
            .expect("valid request")
            .nth(5_000 * 59 + 17);
        let slow = generate(2000, Some(2001), Some(SexFilter::Male))
            .expect("valid request")
            .skip(5_000 * 59 + 17)
            .next();
        assert_eq!(fast, slow);
        assert_eq!(fast.map(|id| id.birth_date()), Some(date(2000, 2, 29)));

        let mut ids = generate(2000, None, None).expect("valid request");
        let total = ids.len();
        assert!(ids.nth(total - 1).is_some());
        assert_eq!(ids.len(), 0);
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn test_clone_restarts_from_clone_point() {
        let mut ids = generate(1950, None, None).expect("valid request");
        ids.nth(123);
        let snapshot = ids.clone();
        let a: Vec<_> = ids.take(10).collect();
        let b: Vec<_> = snapshot.take(10).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_serde() {
        let request: Generator =
            serde_json::from_str(r#"{"start_year": 2000, "end_year": 2001, "sex": "male"}"#)
                .expect("failed to deserialize request");
        assert_eq!(request, Generator::new(2000).with_end_year(2001).with_sex(SexFilter::Male));

        let minimal: Generator =
            serde_json::from_str(r#"{"start_year": 1990}"#).expect("failed to deserialize minimal request");
        assert_eq!(minimal.filter(), SexFilter::Any);
        assert_eq!(minimal.range(), YearRange::single(1990));

        let json = serde_json::to_string(&Generator::new(1990)).expect("failed to serialize request");
        assert_eq!(json, r#"{"start_year":1990}"#);
    }
}
