//! Application state for shared services

use std::sync::Arc;

use crate::config::WorkerConfig;
use crate::domain::{DomainError, PredictionOutcome, PredictionRequest};
use crate::infrastructure::services::PredictionService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
    /// Worker settings, kept for readiness probing
    pub worker: WorkerConfig,
}

impl AppState {
    pub fn new(prediction_service: Arc<dyn PredictionServiceTrait>, worker: WorkerConfig) -> Self {
        Self {
            prediction_service,
            worker,
        }
    }
}

/// Trait for the prediction service operation
#[async_trait::async_trait]
pub trait PredictionServiceTrait: Send + Sync {
    async fn predict(&self, request: PredictionRequest)
        -> Result<PredictionOutcome, DomainError>;
}

#[async_trait::async_trait]
impl PredictionServiceTrait for PredictionService {
    async fn predict(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionOutcome, DomainError> {
        PredictionService::predict(self, request).await
    }
}
