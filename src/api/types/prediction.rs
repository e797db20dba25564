//! Prediction endpoint wire types

use serde::{Deserialize, Serialize};

use crate::domain::PredictionOutcome;

/// Successful prediction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: bool,
    /// RFC 3339 timestamp of when the outcome was produced
    pub timestamp: String,
}

impl PredictionResponse {
    pub fn from_outcome(outcome: &PredictionOutcome) -> Self {
        Self {
            prediction: outcome.has_heart_disease(),
            timestamp: outcome.produced_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serialization() {
        let response = PredictionResponse {
            prediction: true,
            timestamp: "2024-01-01T00:00:00+00:00".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"prediction\":true"));
        assert!(json.contains("\"timestamp\":\"2024-01-01T00:00:00+00:00\""));
    }
}
