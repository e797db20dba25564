//! Domain layer - Core business logic and entities

pub mod error;
pub mod prediction;

pub use error::DomainError;
pub use prediction::{
    validate, Classifier, PredictionOutcome, PredictionRequest, RawPredictionInput,
    ValidationError,
};
