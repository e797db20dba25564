use thiserror::Error;

/// Core domain errors
///
/// Validation failures are not represented here; the input validator
/// reports them as an accumulated list of `ValidationError` values so the
/// caller can surface every problem at once. Everything in this enum is a
/// classification attempt that could not produce a result.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Worker exited with code {code}: {stderr}")]
    WorkerFailed { code: i32, stderr: String },

    #[error("Worker produced malformed output: {message}")]
    MalformedResponse { message: String },

    #[error("Worker did not respond within {timeout_secs}s")]
    WorkerTimeout { timeout_secs: u64 },

    #[error("Failed to launch worker: {message}")]
    Spawn { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn worker_failed(code: i32, stderr: impl Into<String>) -> Self {
        Self::WorkerFailed {
            code,
            stderr: stderr.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn worker_timeout(timeout_secs: u64) -> Self {
        Self::WorkerTimeout { timeout_secs }
    }

    pub fn spawn(message: impl Into<String>) -> Self {
        Self::Spawn {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_failed_display() {
        let error = DomainError::worker_failed(1, "Traceback: model not found");
        assert_eq!(
            error.to_string(),
            "Worker exited with code 1: Traceback: model not found"
        );
    }

    #[test]
    fn test_malformed_response_display() {
        let error = DomainError::malformed_response("missing field `prediction`");
        assert_eq!(
            error.to_string(),
            "Worker produced malformed output: missing field `prediction`"
        );
    }

    #[test]
    fn test_timeout_display() {
        let error = DomainError::worker_timeout(30);
        assert_eq!(error.to_string(), "Worker did not respond within 30s");
    }
}
