//! External worker process classifier

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::WorkerConfig;
use crate::domain::{Classifier, DomainError, PredictionRequest};

/// Minimum expected worker output; any additional fields are ignored
#[derive(Debug, Deserialize)]
struct WorkerReply {
    prediction: bool,
}

/// Classifier that delegates to an external worker process.
///
/// One invocation per request: the serialized request is passed as the
/// worker's sole trailing argument, stdout and stderr are captured in full,
/// and the exit status is only considered once both streams are drained.
/// Nothing is written to the worker's stdin. The child is spawned with
/// `kill_on_drop`, so an abandoned or timed-out request terminates the
/// worker rather than leaking it.
#[derive(Debug, Clone)]
pub struct WorkerClassifier {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl WorkerClassifier {
    pub fn new(config: &WorkerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl Classifier for WorkerClassifier {
    async fn classify(&self, request: &PredictionRequest) -> Result<bool, DomainError> {
        let payload = serde_json::to_string(request)
            .map_err(|e| DomainError::internal(format!("Failed to serialize request: {}", e)))?;

        debug!(command = %self.command, "Launching classification worker");

        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(&payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::spawn(e.to_string()))?;

        // wait_with_output drains both streams fully before reporting the
        // exit status. On timeout the dropped child is killed.
        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result
                .map_err(|e| DomainError::internal(format!("Failed to collect worker output: {}", e)))?,
            Err(_) => {
                warn!(timeout_secs = self.timeout.as_secs(), "Worker timed out, killing it");
                return Err(DomainError::worker_timeout(self.timeout.as_secs()));
            }
        };

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(code, "Worker exited with non-zero status");
            return Err(DomainError::worker_failed(code, stderr));
        }

        let reply: WorkerReply = serde_json::from_slice(&output.stdout)
            .map_err(|e| DomainError::malformed_response(e.to_string()))?;

        debug!(prediction = reply.prediction, "Worker replied");
        Ok(reply.prediction)
    }

    fn name(&self) -> &'static str {
        "worker"
    }
}
