//! CSV row decoder.
//!
//! Turns the provider's CSV body into [`Record`]s, one per data line.
//!
//! - The first line is a header; columns are found **by name**, so order and
//!   extra columns (`Adj Close`) do not matter.
//! - Dates must be exactly `YYYY-MM-DD`.
//! - Prices must be finite and non-negative; volume is an unsigned integer.
//! - The first bad line ends decoding. The iterator yields that error once and
//!   then stops; callers never see records past a failure.

use std::io::Read;
use std::iter::FusedIterator;

use csv::StringRecord;

use crate::domain::parse_calendar_date;
use crate::{DecodeError, DecodeErrorKind, Record};

pub const DATE_COLUMN: &str = "Date";
pub const OPEN_COLUMN: &str = "Open";
pub const HIGH_COLUMN: &str = "High";
pub const LOW_COLUMN: &str = "Low";
pub const CLOSE_COLUMN: &str = "Close";
pub const VOLUME_COLUMN: &str = "Volume";

const HEADER_LINE: u64 = 1;

/// Decode `reader` lazily into records.
pub fn decode_rows<R: Read>(reader: R) -> RowDecoder<R> {
    RowDecoder::new(reader)
}

/// Lazy, single-pass record iterator over a CSV byte stream.
#[derive(Debug)]
pub struct RowDecoder<R> {
    reader: csv::Reader<R>,
    columns: Option<ColumnMap>,
    row: StringRecord,
    finished: bool,
}

impl<R: Read> RowDecoder<R> {
    pub fn new(reader: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        Self {
            reader,
            columns: None,
            row: StringRecord::new(),
            finished: false,
        }
    }

    fn columns(&mut self) -> Result<ColumnMap, DecodeError> {
        if let Some(columns) = self.columns {
            return Ok(columns);
        }

        let headers = self
            .reader
            .headers()
            .map_err(|error| DecodeError::from_csv(&error))?;
        let columns = ColumnMap::from_headers(headers)?;
        self.columns = Some(columns);
        Ok(columns)
    }

    fn next_record(&mut self) -> Result<Option<Record>, DecodeError> {
        let columns = self.columns()?;

        let has_row = self
            .reader
            .read_record(&mut self.row)
            .map_err(|error| DecodeError::from_csv(&error))?;
        if !has_row {
            return Ok(None);
        }

        let line = self.row.position().map_or(0, csv::Position::line);
        columns.decode(&self.row, line).map(Some)
    }
}

impl<R: Read> Iterator for RowDecoder<R> {
    type Item = Result<Record, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<R: Read> FusedIterator for RowDecoder<R> {}

/// Header positions of the columns a record needs.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, DecodeError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| {
                    DecodeError::field_error(HEADER_LINE, name, DecodeErrorKind::MissingColumn)
                })
        };

        Ok(Self {
            date: find(DATE_COLUMN)?,
            open: find(OPEN_COLUMN)?,
            high: find(HIGH_COLUMN)?,
            low: find(LOW_COLUMN)?,
            close: find(CLOSE_COLUMN)?,
            volume: find(VOLUME_COLUMN)?,
        })
    }

    fn decode(&self, row: &StringRecord, line: u64) -> Result<Record, DecodeError> {
        let raw_date = field(row, self.date);
        let date = parse_calendar_date(raw_date).ok_or_else(|| {
            DecodeError::field_error(
                line,
                DATE_COLUMN,
                DecodeErrorKind::InvalidDate(raw_date.to_owned()),
            )
        })?;

        Ok(Record {
            date,
            open: parse_price(row, self.open, line, OPEN_COLUMN)?,
            high: parse_price(row, self.high, line, HIGH_COLUMN)?,
            low: parse_price(row, self.low, line, LOW_COLUMN)?,
            close: parse_price(row, self.close, line, CLOSE_COLUMN)?,
            volume: parse_volume(row, self.volume, line)?,
        })
    }
}

fn field(row: &StringRecord, index: usize) -> &str {
    row.get(index).unwrap_or_default()
}

fn parse_price(
    row: &StringRecord,
    index: usize,
    line: u64,
    column: &'static str,
) -> Result<f64, DecodeError> {
    let raw = field(row, index);
    let value = raw.parse::<f64>().map_err(|_| {
        DecodeError::field_error(line, column, DecodeErrorKind::InvalidNumber(raw.to_owned()))
    })?;

    if !value.is_finite() {
        return Err(DecodeError::field_error(
            line,
            column,
            DecodeErrorKind::NonFiniteValue,
        ));
    }
    if value < 0.0 {
        return Err(DecodeError::field_error(
            line,
            column,
            DecodeErrorKind::NegativeValue,
        ));
    }
    Ok(value)
}

fn parse_volume(row: &StringRecord, index: usize, line: u64) -> Result<u64, DecodeError> {
    let raw = field(row, index);
    raw.parse::<u64>().map_err(|_| {
        DecodeError::field_error(
            line,
            VOLUME_COLUMN,
            DecodeErrorKind::InvalidNumber(raw.to_owned()),
        )
    })
}
