use serde::Serialize;
use time::Date;

use super::{serialize_dates, Record};

/// Daily history as three index-aligned columns.
///
/// Position `i` of `dates`, `prices` and `volumes` describes the same trading
/// day. The columns are only filled by assembly, so their lengths are always
/// equal. An empty series means "no data in range".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    #[serde(serialize_with = "serialize_dates")]
    dates: Vec<Date>,
    prices: Vec<f64>,
    volumes: Vec<u64>,
}

impl Series {
    /// Fold records into columns, keeping source order.
    pub fn assemble<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        records.into_iter().collect()
    }

    /// Fold fallible records; the first error discards everything folded so far.
    pub fn try_assemble<I, E>(records: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<Record, E>>,
    {
        records.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Closing price per day.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn volumes(&self) -> &[u64] {
        &self.volumes
    }

    /// Rows as `(date, close, volume)` tuples.
    pub fn rows(&self) -> impl Iterator<Item = (Date, f64, u64)> + '_ {
        self.dates
            .iter()
            .zip(&self.prices)
            .zip(&self.volumes)
            .map(|((date, price), volume)| (*date, *price, *volume))
    }

    fn push(&mut self, record: Record) {
        self.dates.push(record.date);
        self.prices.push(record.close);
        self.volumes.push(record.volume);
    }
}

impl FromIterator<Record> for Series {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let records = iter.into_iter();
        let (lower, _) = records.size_hint();
        let mut series = Self {
            dates: Vec::with_capacity(lower),
            prices: Vec::with_capacity(lower),
            volumes: Vec::with_capacity(lower),
        };
        for record in records {
            series.push(record);
        }
        series
    }
}
