//! Podium API crate - axum HTTP surface over the recommendation engine.
//!
//! Exposes recommendation, speaker lookup, keyword search, dataset stats and
//! a health check as JSON endpoints.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
