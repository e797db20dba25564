//! v1 API endpoints

pub mod predict;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route("/predict", post(predict::create_prediction))
}
