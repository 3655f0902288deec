//! Behavior-driven tests for decoding provider CSV into records and series.

use pricechart_core::{decode_rows, DecodeErrorKind, Record, Series};
use pricechart_tests::{provider_csv, MSFT_OPENING_ROWS};
use time::macros::date;

// =============================================================================
// Well-formed input
// =============================================================================

#[test]
fn when_body_has_n_rows_decoder_yields_n_records_in_order() {
    // Given: three well-formed trading days
    let csv = provider_csv(&MSFT_OPENING_ROWS);

    // When: the body is decoded
    let records: Vec<Record> = decode_rows(csv.as_bytes())
        .collect::<Result<_, _>>()
        .expect("well-formed rows decode");

    // Then: every row comes back, in source order, with close and volume intact
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.date).collect::<Vec<_>>(),
        vec![date!(2021 - 01 - 04), date!(2021 - 01 - 05), date!(2021 - 01 - 06)]
    );
    assert_eq!(
        records.iter().map(|r| r.close).collect::<Vec<_>>(),
        vec![217.690002, 217.899994, 212.25]
    );
    assert_eq!(
        records.iter().map(|r| r.volume).collect::<Vec<_>>(),
        vec![37_130_100, 23_823_000, 35_930_700]
    );
}

#[test]
fn when_body_is_decoded_into_series_columns_stay_aligned() {
    let csv = provider_csv(&[
        "2021-01-04,1.0,1.0,1.0,10.0,10.0,100",
        "2021-01-05,1.0,1.0,1.0,11.0,11.0,110",
    ]);

    let series = Series::try_assemble(decode_rows(csv.as_bytes())).expect("decodes");

    assert_eq!(series.len(), 2);
    assert_eq!(series.dates().len(), series.prices().len());
    assert_eq!(series.prices().len(), series.volumes().len());
    assert_eq!(series.prices(), &[10.0, 11.0]);
    assert_eq!(series.volumes(), &[100, 110]);
}

#[test]
fn when_body_is_header_only_series_is_empty_not_an_error() {
    let series = Series::try_assemble(decode_rows(provider_csv(&[]).as_bytes()))
        .expect("header-only body is valid");

    assert!(series.is_empty());
    assert!(series.dates().is_empty());
    assert!(series.prices().is_empty());
    assert!(series.volumes().is_empty());
}

#[test]
fn when_provider_uses_windows_line_endings_rows_still_decode() {
    let csv = "Date,Open,High,Low,Close,Volume\r\n2021-01-04,1,2,0.5,1.5,10\r\n";

    let series = Series::try_assemble(decode_rows(csv.as_bytes())).expect("crlf decodes");

    assert_eq!(series.prices(), &[1.5]);
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn when_a_date_is_malformed_no_partial_series_is_returned() {
    // Given: a valid row followed by one with an impossible slash-separated date
    let csv = provider_csv(&[
        "2021-01-04,1.0,1.0,1.0,10.0,10.0,100",
        "2021/13/40,1.0,1.0,1.0,11.0,11.0,110",
    ]);

    // When: the body is assembled
    let error = Series::try_assemble(decode_rows(csv.as_bytes()))
        .expect_err("malformed date must fail");

    // Then: the error points at the offending line and column
    assert_eq!(error.line(), 3);
    assert_eq!(error.field(), Some("Date"));
    assert_eq!(
        error.kind(),
        &DecodeErrorKind::InvalidDate(String::from("2021/13/40"))
    );
}

#[test]
fn when_a_year_carries_a_sign_the_row_is_rejected() {
    for raw in ["+2021-01-04", "-2021-01-04"] {
        // Given: an otherwise well-formed row whose year is signed
        let row = format!("{raw},1.0,1.0,1.0,10.0,10.0,100");
        let csv = provider_csv(&[row.as_str()]);

        // When: the body is assembled
        let error = Series::try_assemble(decode_rows(csv.as_bytes()))
            .expect_err("signed year must fail");

        // Then: the date is reported as invalid on the first data line
        assert_eq!(error.line(), 2);
        assert_eq!(error.kind(), &DecodeErrorKind::InvalidDate(raw.to_owned()));
    }
}

#[test]
fn when_decoding_fails_the_iterator_stops() {
    let csv = provider_csv(&[
        "2021-01-04,1.0,1.0,1.0,oops,10.0,100",
        "2021-01-05,1.0,1.0,1.0,11.0,11.0,110",
    ]);

    let mut decoder = decode_rows(csv.as_bytes());

    assert!(matches!(decoder.next(), Some(Err(_))));
    assert!(decoder.next().is_none());
    assert!(decoder.next().is_none());
}

#[test]
fn when_header_lacks_close_column_decode_fails_before_any_row() {
    let csv = "Date,Open,High,Low,Volume\n2021-01-04,1,1,1,10\n";

    let error = Series::try_assemble(decode_rows(csv.as_bytes())).expect_err("missing column");

    assert_eq!(error.kind(), &DecodeErrorKind::MissingColumn);
    assert_eq!(error.field(), Some("Close"));
    assert_eq!(error.line(), 1);
}

#[test]
fn when_header_names_differ_in_case_columns_are_not_matched() {
    let csv = "date,open,high,low,close,volume\n2021-01-04,1,1,1,1,10\n";

    let error = Series::try_assemble(decode_rows(csv.as_bytes())).expect_err("case matters");

    assert_eq!(error.kind(), &DecodeErrorKind::MissingColumn);
}
