//! # Pricechart Web
//!
//! axum routes around [`pricechart_core`]:
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | bundled `index.html` |
//! | `GET /chart.js` | bundled page script |
//! | `GET /data?symbol=<ticker>[&start=YYYY-MM-DD][&end=YYYY-MM-DD]` | chart JSON |
//!
//! `/data` answers `400` for a missing symbol or malformed date and `500`
//! with a generic message when the provider fetch fails; failure detail is
//! logged, never sent to the client.

pub mod assets;
pub mod error;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{app, DataQuery};
pub use state::{AppState, SharedState};
