//! Canonical job status shared by every provider adapter.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-agnostic job state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Queued,
    Started,
    Finished,
    Failed,
    Canceled,
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Queued => "queued",
            Status::Started => "started",
            Status::Finished => "finished",
            Status::Failed => "failed",
            Status::Canceled => "canceled",
            Status::Unknown => "unknown",
        }
    }

    /// Returns `true` once the job can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Finished | Status::Failed | Status::Canceled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a job as reported by a provider, recomputed on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    /// Identifier of the job on the provider side.
    pub provider_job_id: String,
    /// Name of the provider that owns the job (e.g. `"elementalconductor"`).
    pub provider_name: String,
    /// Completion percentage, 0.0 - 100.0.
    pub progress: f64,
    pub status: Status,
    /// Backend-native fields kept for diagnostics.
    #[serde(default)]
    pub provider_status: HashMap<String, serde_json::Value>,
    /// Directory the outputs are written to, when the provider knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_destination: Option<String>,
}
