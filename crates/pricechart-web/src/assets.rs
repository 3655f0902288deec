//! Page assets compiled into the binary.

use axum::http::header;
use axum::response::{Html, IntoResponse};

pub const INDEX_HTML: &str = include_str!("../assets/index.html");
pub const CHART_JS: &str = include_str!("../assets/chart.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn chart_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        CHART_JS,
    )
}
