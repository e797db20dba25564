//! Heart-Risk API
//!
//! An HTTP service that validates patient vitals and delegates heart
//! disease classification to an external worker process:
//! - Accumulating field-level input validation
//! - Single-shot worker invocation with bounded wait and full stream capture
//! - One prediction endpoint reproducing the original report contract

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::classifier::WorkerClassifier;
use infrastructure::services::PredictionService;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> AppState {
    let classifier = Arc::new(WorkerClassifier::new(&config.worker));
    let prediction_service = Arc::new(PredictionService::new(classifier));

    AppState::new(prediction_service, config.worker.clone())
}
