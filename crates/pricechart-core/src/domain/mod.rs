//! # Domain Models
//!
//! Canonical domain types for daily price history.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Non-empty ticker symbol |
//! | [`DateRange`] | Start/end calendar days, encoded as UTC-midnight instants |
//! | [`Record`] | One decoded trading day |
//! | [`Series`] | Index-aligned date, close and volume columns |

mod range;
mod record;
mod series;
mod symbol;

pub use range::{parse_date, DateRange};
pub use record::Record;
pub use series::Series;
pub use symbol::Symbol;

use serde::Serializer;
use time::Date;

/// Parse exactly `dddd-dd-dd`; `None` for anything else, including signed or
/// padded years and impossible days.
pub(crate) fn parse_calendar_date(input: &str) -> Option<Date> {
    if !is_calendar_layout(input.as_bytes()) {
        return None;
    }
    Date::parse(input, time::macros::format_description!("[year]-[month]-[day]")).ok()
}

fn is_calendar_layout(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Serializes dates as `YYYY-MM-DD` strings.
pub(crate) fn serialize_dates<S>(dates: &[Date], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(dates.iter().map(Date::to_string))
}
