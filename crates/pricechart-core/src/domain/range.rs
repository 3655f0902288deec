use time::macros::date;
use time::Date;

use super::parse_calendar_date;
use crate::ValidationError;

/// Requested window of trading days.
///
/// Both ends are sent to the provider as Unix seconds at UTC midnight.
/// `start <= end` is the caller's responsibility; an inverted range is passed
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Parse both ends from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub const fn start(self) -> Date {
        self.start
    }

    pub const fn end(self) -> Date {
        self.end
    }

    pub const fn with_start(self, start: Date) -> Self {
        Self { start, ..self }
    }

    pub const fn with_end(self, end: Date) -> Self {
        Self { end, ..self }
    }

    pub fn start_unix(self) -> i64 {
        utc_midnight(self.start)
    }

    pub fn end_unix(self) -> i64 {
        utc_midnight(self.end)
    }
}

impl Default for DateRange {
    /// Calendar year 2021.
    fn default() -> Self {
        Self::new(date!(2021 - 01 - 01), date!(2021 - 12 - 31))
    }
}

/// Parse a `YYYY-MM-DD` calendar day.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    parse_calendar_date(input.trim()).ok_or_else(|| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

fn utc_midnight(day: Date) -> i64 {
    day.midnight().assume_utc().unix_timestamp()
}
