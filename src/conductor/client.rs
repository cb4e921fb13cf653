use anyhow::Result;

use super::types::{CloudConfig, Job, JobRecord, Node};

/// API surface of an Elemental Conductor cluster used by the provider.
///
/// Implementations own transport, request signing and retries. Errors are
/// handed back to callers unchanged.
#[async_trait::async_trait]
pub trait ConductorClient: Send + Sync {
    /// Submit a job, returning the ID the cluster assigned to it
    async fn submit_job(&self, job: &Job) -> Result<String>;

    /// Fetch a job record by ID
    async fn get_job(&self, job_id: &str) -> Result<JobRecord>;

    /// Cancel a job by ID
    async fn cancel_job(&self, job_id: &str) -> Result<()>;

    /// List every node in the cluster
    async fn list_nodes(&self) -> Result<Vec<Node>>;

    /// Fetch the cluster's cloud configuration
    async fn get_cloud_config(&self) -> Result<CloudConfig>;
}
