//! Trait definition for transcoding providers.

use async_trait::async_trait;

use crate::error::Result;
use crate::profile::{Capabilities, TranscodeProfile};
use crate::status::JobStatus;

/// Async trait that every transcoding backend adapter implements.
///
/// Each provider wraps a single encoding service and translates between the
/// shared request/status model and the backend's own vocabulary. Providers
/// hold no per-job state; the backend is the system of record.
#[async_trait]
pub trait TranscodingProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"elementalconductor"`).
    fn name(&self) -> &'static str;

    /// Build a backend job for `profile` and submit it.
    ///
    /// `job_id` is the caller's identifier and is used to derive output
    /// locations; the returned status carries the backend's own job ID.
    async fn transcode(&self, job_id: &str, profile: &TranscodeProfile) -> Result<JobStatus>;

    /// Fetch the current status of a previously submitted job.
    async fn job_status(&self, provider_job_id: &str) -> Result<JobStatus>;

    /// Ask the backend to cancel a job.
    async fn cancel_job(&self, provider_job_id: &str) -> Result<()>;

    /// Check whether the backend has enough capacity to accept new work.
    async fn healthcheck(&self) -> Result<()>;

    /// Formats and destinations supported by this provider.
    fn capabilities(&self) -> Capabilities;
}
