use async_trait::async_trait;
use std::fmt::Debug;

use super::request::PredictionRequest;
use crate::domain::DomainError;

/// Trait for classification backends.
///
/// The service core is defined purely in terms of this message-passing
/// contract: validated request in, boolean risk flag out. The production
/// implementation drives an external worker process, but an in-process
/// classifier can substitute behind the same interface.
///
/// Implementations run exactly one classification attempt per call, with no
/// retry and no caching; concurrent calls must be independent.
#[async_trait]
pub trait Classifier: Send + Sync + Debug {
    /// Run one classification attempt for the given request
    async fn classify(&self, request: &PredictionRequest) -> Result<bool, DomainError>;

    /// Get the classifier name, for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Scripted classifier that records the requests it receives
    #[derive(Debug)]
    pub struct MockClassifier {
        prediction: Option<bool>,
        error: Option<String>,
        seen: Mutex<Vec<PredictionRequest>>,
    }

    impl MockClassifier {
        pub fn with_prediction(prediction: bool) -> Self {
            Self {
                prediction: Some(prediction),
                error: None,
                seen: Mutex::new(Vec::new()),
            }
        }

        pub fn with_error(error: impl Into<String>) -> Self {
            Self {
                prediction: None,
                error: Some(error.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        /// Requests this classifier has been invoked with, in order
        pub fn seen_requests(&self) -> Vec<PredictionRequest> {
            self.seen.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Classifier for MockClassifier {
        async fn classify(&self, request: &PredictionRequest) -> Result<bool, DomainError> {
            self.seen.lock().unwrap().push(request.clone());

            if let Some(ref error) = self.error {
                return Err(DomainError::internal(error.clone()));
            }

            self.prediction
                .ok_or_else(|| DomainError::internal("No mock prediction configured"))
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }
}
