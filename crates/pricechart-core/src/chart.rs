//! Chart description built from a [`Series`].
//!
//! The JSON shape is the `{data, layout}` pair Plotly's `newPlot` takes:
//!
//! ```json
//! {
//!   "data": [
//!     {"x": ["2021-01-04"], "y": [217.69], "name": "Price", "type": "scatter"},
//!     {"x": ["2021-01-04"], "y": [37130100.0], "yaxis": "y2", "name": "Volume", "type": "bar"}
//!   ],
//!   "layout": {"title": "MSFT", "grid": {"rows": 2, "columns": 1}}
//! }
//! ```

use serde::Serialize;
use time::Date;

use crate::domain::serialize_dates;
use crate::{Series, Symbol};

pub const PRICE_TRACE: &str = "Price";
pub const VOLUME_TRACE: &str = "Volume";
const SECONDARY_AXIS: &str = "y2";

/// How a trace is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceKind {
    Scatter,
    Bar,
}

/// One named series of points sharing the date axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(serialize_with = "serialize_dates")]
    pub x: Vec<Date>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<&'static str>,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: TraceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub rows: u8,
    pub columns: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub title: String,
    pub grid: Grid,
}

/// Price and volume traces stacked in a two-row grid, titled with the symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: [Trace; 2],
    pub layout: Layout,
}

impl ChartSpec {
    pub fn from_series(symbol: &Symbol, series: &Series) -> Self {
        let dates = series.dates().to_vec();

        let price = Trace {
            x: dates.clone(),
            y: series.prices().to_vec(),
            yaxis: None,
            name: PRICE_TRACE,
            kind: TraceKind::Scatter,
        };

        let volume = Trace {
            x: dates,
            y: series.volumes().iter().map(|&volume| volume as f64).collect(),
            yaxis: Some(SECONDARY_AXIS),
            name: VOLUME_TRACE,
            kind: TraceKind::Bar,
        };

        Self {
            data: [price, volume],
            layout: Layout {
                title: symbol.to_string(),
                grid: Grid {
                    rows: 2,
                    columns: 1,
                },
            },
        }
    }

    pub fn price(&self) -> &Trace {
        &self.data[0]
    }

    pub fn volume(&self) -> &Trace {
        &self.data[1]
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
