//! Provider request URL builder.

use crate::{DateRange, Symbol};

/// Yahoo! Finance CSV download endpoint; the symbol is appended as the last
/// path segment.
pub const DEFAULT_PROVIDER_URL: &str = "https://query1.finance.yahoo.com/v7/finance/download";

const DAILY_INTERVAL: &str = "1d";
const HISTORY_EVENTS: &str = "history";

/// Build the history download URL for `symbol` over `range`.
///
/// The symbol is percent-escaped as a path segment; the range ends travel as
/// Unix seconds in `period1`/`period2`.
pub fn build_request_url(base: &str, symbol: &Symbol, range: DateRange) -> String {
    format!(
        "{}/{}?period1={}&period2={}&interval={}&events={}",
        base.trim_end_matches('/'),
        urlencoding::encode(symbol.as_str()),
        range.start_unix(),
        range.end_unix(),
        DAILY_INTERVAL,
        HISTORY_EVENTS,
    )
}
