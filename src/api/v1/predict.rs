//! Prediction endpoint handler

use axum::extract::State;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictionResponse};
use crate::domain::{validate, RawPredictionInput};

/// POST /v1/predict
///
/// Validation failures come back as a 400 with every offending field named;
/// any downstream invocation failure collapses to a generic 500, with the
/// detail logged here only.
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(input): Json<RawPredictionInput>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    info!(request_id = %request_id, "Processing prediction request");

    let request = match validate(&input) {
        Ok(request) => request,
        Err(errors) => {
            warn!(
                request_id = %request_id,
                error_count = errors.len(),
                "Rejecting invalid prediction input"
            );
            return Err(ApiError::validation(&errors));
        }
    };

    let outcome = state
        .prediction_service
        .predict(request)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Prediction failed");
            ApiError::from(e)
        })?;

    info!(
        request_id = %request_id,
        prediction = outcome.has_heart_disease(),
        "Prediction completed"
    );

    Ok(Json(PredictionResponse::from_outcome(&outcome)))
}
