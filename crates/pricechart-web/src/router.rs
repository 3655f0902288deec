use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use pricechart_core::{ChartSpec, Symbol};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::assets;
use crate::error::ApiError;
use crate::state::{AppState, SharedState};

/// Query string of `GET /data`.
#[derive(Debug, Default, Deserialize)]
pub struct DataQuery {
    pub symbol: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Build the application router around `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(assets::index))
        .route("/chart.js", get(assets::chart_js))
        .route("/data", get(data))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

async fn data(
    State(state): State<SharedState>,
    Query(query): Query<DataQuery>,
) -> Result<Json<ChartSpec>, ApiError> {
    let symbol = Symbol::parse(query.symbol.as_deref().unwrap_or_default())?;
    let range = state.range_for(query.start.as_deref(), query.end.as_deref())?;
    info!(%symbol, start = %range.start(), end = %range.end(), "data request");

    let series = state
        .fetcher()
        .fetch_series(&symbol, range)
        .await
        .map_err(|error| {
            warn!(%symbol, %error, kind = ?error.kind(), "can't fetch data");
            ApiError::from(error)
        })?;

    Ok(Json(ChartSpec::from_series(&symbol, &series)))
}
