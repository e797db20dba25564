//! Prediction service - the single core operation

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::{Classifier, DomainError, PredictionOutcome, PredictionRequest};

/// Runs one classification attempt for a validated request and wraps the
/// result into an outcome.
///
/// Stateless: each call is independent, nothing is cached or retried, and
/// concurrent calls share no state beyond the injected classifier.
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub async fn predict(
        &self,
        request: PredictionRequest,
    ) -> Result<PredictionOutcome, DomainError> {
        debug!(classifier = self.classifier.name(), "Running classification");

        let has_heart_disease = self.classifier.classify(&request).await?;
        Ok(PredictionOutcome::new(has_heart_disease, request, Utc::now()))
    }
}
