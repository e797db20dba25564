//! Prediction domain entities and the classification boundary

pub mod classifier;
pub mod outcome;
pub mod request;
pub mod validation;

pub use classifier::Classifier;
pub use outcome::PredictionOutcome;
pub use request::PredictionRequest;
pub use validation::{validate, RawPredictionInput, ValidationError};
