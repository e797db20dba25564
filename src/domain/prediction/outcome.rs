//! Finished prediction outcomes

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::request::PredictionRequest;

/// A completed classification: the boolean risk flag plus the request that
/// produced it.
///
/// Created only by the prediction service after a successful worker
/// response, so every outcome is backed by a validated request. Never
/// mutated after creation; the caller that requested it owns it.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    has_heart_disease: bool,
    source_request: PredictionRequest,
    produced_at: DateTime<Utc>,
}

impl PredictionOutcome {
    pub(crate) fn new(
        has_heart_disease: bool,
        source_request: PredictionRequest,
        produced_at: DateTime<Utc>,
    ) -> Self {
        Self {
            has_heart_disease,
            source_request,
            produced_at,
        }
    }

    pub fn has_heart_disease(&self) -> bool {
        self.has_heart_disease
    }

    pub fn source_request(&self) -> &PredictionRequest {
        &self.source_request
    }

    pub fn produced_at(&self) -> DateTime<Utc> {
        self.produced_at
    }
}
