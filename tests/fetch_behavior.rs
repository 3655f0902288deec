//! Behavior-driven tests for the fetch orchestrator.
//!
//! These tests drive `QuoteFetcher` through a canned transport, so they cover
//! URL construction, status handling and decoding without a network.

use std::sync::Arc;

use pricechart_core::{
    ChartSpec, DateRange, FetchError, FetchErrorKind, QuoteFetcher, StaticHttpClient, Symbol,
};
use pricechart_tests::PROVIDER_HEADER;
use time::macros::date;
use time::{Date, Duration, Weekday};

/// NYSE closures between 2021-01-01 and 2021-06-30.
const H1_2021_HOLIDAYS: [Date; 5] = [
    date!(2021 - 01 - 01),
    date!(2021 - 01 - 18),
    date!(2021 - 02 - 15),
    date!(2021 - 04 - 02),
    date!(2021 - 05 - 31),
];

fn trading_days(range: DateRange) -> Vec<Date> {
    let mut days = Vec::new();
    let mut day = range.start();
    while day <= range.end() {
        let weekend = matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday);
        if !weekend && !H1_2021_HOLIDAYS.contains(&day) {
            days.push(day);
        }
        day += Duration::days(1);
    }
    days
}

fn provider_body(days: &[Date]) -> String {
    let mut body = String::from(PROVIDER_HEADER);
    for (i, day) in days.iter().enumerate() {
        let close = 220.0 + i as f64 * 0.25;
        body.push_str(&format!(
            "\n{day},{close:.2},{:.2},{:.2},{close:.2},{close:.2},{}",
            close + 1.0,
            close - 1.0,
            20_000_000 + i * 1_000,
        ));
    }
    body.push('\n');
    body
}

fn fetcher(client: &Arc<StaticHttpClient>) -> QuoteFetcher {
    QuoteFetcher::new(client.clone()).with_base_url("http://provider.test/v7/finance/download")
}

// =============================================================================
// Successful fetches
// =============================================================================

#[tokio::test]
async fn when_msft_first_half_of_2021_is_requested_series_covers_every_trading_day() {
    // Given: a provider that answers with one row per trading day of H1 2021
    let range = DateRange::parse("2021-01-01", "2021-06-30").expect("valid range");
    let days = trading_days(range);
    let client = Arc::new(StaticHttpClient::csv(provider_body(&days)));
    let symbol = Symbol::parse("MSFT").expect("valid symbol");

    // When: the series is fetched
    let series = fetcher(&client)
        .fetch_series(&symbol, range)
        .await
        .expect("fetch should succeed");

    // Then: one entry per trading day, starting on the first session of the year
    assert_eq!(days.len(), 124);
    assert_eq!(series.len(), 124);
    assert_eq!(series.dates().len(), series.prices().len());
    assert_eq!(series.prices().len(), series.volumes().len());
    assert_eq!(series.dates()[0], date!(2021 - 01 - 04));
    assert_eq!(series.dates()[123], date!(2021 - 06 - 30));

    // And: exactly one request with the encoded range was made
    let requests = client.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url,
        "http://provider.test/v7/finance/download/MSFT\
         ?period1=1609459200&period2=1625011200&interval=1d&events=history"
    );
}

#[tokio::test]
async fn when_provider_returns_header_only_series_and_chart_are_empty() {
    let client = Arc::new(StaticHttpClient::csv(format!("{PROVIDER_HEADER}\n")));
    let symbol = Symbol::parse("MSFT").expect("valid symbol");

    let series = fetcher(&client)
        .fetch_series(&symbol, DateRange::default())
        .await
        .expect("empty range is not an error");
    let chart = ChartSpec::from_series(&symbol, &series);

    assert!(series.is_empty());
    assert!(chart.price().x.is_empty());
    assert!(chart.volume().y.is_empty());
}

#[tokio::test]
async fn when_symbols_are_fetched_concurrently_each_gets_its_own_series() {
    let range = DateRange::parse("2021-01-01", "2021-01-31").expect("valid range");
    let client = Arc::new(StaticHttpClient::csv(provider_body(&trading_days(range))));
    let fetcher = fetcher(&client);

    let handles = ["MSFT", "AAPL", "SPY"].map(|symbol| {
        let fetcher = fetcher.clone();
        tokio::spawn(async move { fetcher.fetch_series_for(symbol, range).await })
    });

    for handle in handles {
        let series = handle
            .await
            .expect("task should not panic")
            .expect("fetch should succeed");
        assert_eq!(series.len(), 19);
    }
    assert_eq!(client.recorded_requests().len(), 3);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn when_symbol_is_unknown_provider_404_surfaces_as_fetch_failure() {
    let client = Arc::new(StaticHttpClient::status(404));

    let error = fetcher(&client)
        .fetch_series_for("NOSUCHTICKER", DateRange::default())
        .await
        .expect_err("404 must fail");

    assert_eq!(error.kind(), FetchErrorKind::Provider);
    assert_eq!(error.to_string(), "provider returned 404 Not Found");
}

#[tokio::test]
async fn when_body_has_malformed_date_fetch_fails_with_decode_error() {
    let body = format!(
        "{PROVIDER_HEADER}\n2021-01-04,1,1,1,1,1,10\n2021/13/40,1,1,1,1,1,10\n"
    );
    let client = Arc::new(StaticHttpClient::csv(body));

    let error = fetcher(&client)
        .fetch_series_for("MSFT", DateRange::default())
        .await
        .expect_err("malformed date must fail");

    match error {
        FetchError::Decode(decode) => {
            assert_eq!(decode.line(), 3);
            assert_eq!(decode.field(), Some("Date"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn when_transport_fails_no_retry_is_attempted() {
    let client = Arc::new(StaticHttpClient::failing("dns lookup failed"));

    let error = fetcher(&client)
        .fetch_series_for("MSFT", DateRange::default())
        .await
        .expect_err("transport must fail");

    assert_eq!(error.kind(), FetchErrorKind::Transport);
    assert_eq!(client.recorded_requests().len(), 1);
}

#[tokio::test]
async fn when_symbol_is_blank_request_is_rejected_before_network() {
    let client = Arc::new(StaticHttpClient::csv(format!("{PROVIDER_HEADER}\n")));

    let error = fetcher(&client)
        .fetch_series_for("", DateRange::default())
        .await
        .expect_err("blank symbol must fail");

    assert_eq!(error.kind(), FetchErrorKind::Input);
    assert!(client.recorded_requests().is_empty());
}
