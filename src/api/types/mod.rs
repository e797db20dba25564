//! HTTP request/response types

pub mod error;
pub mod json;
pub mod prediction;

pub use error::{ApiError, ApiErrorResponse, FieldErrorBody};
pub use json::Json;
pub use prediction::PredictionResponse;
