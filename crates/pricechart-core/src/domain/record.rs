use time::Date;

/// One decoded trading day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub date: Date,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}
