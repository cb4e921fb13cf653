//! Elemental Conductor provider.
//!
//! Translates [`TranscodeProfile`]s into Conductor job descriptions and
//! Conductor job records back into canonical [`JobStatus`]es.
//!
//! # Module layout
//!
//! - [`assembly`] -- Preset partitioning, job assembly and output destination.
//! - [`status`] -- Mapping of Conductor job states to [`Status`](encodeflow_core::Status).
//! - [`health`] -- Minimum-active-worker capacity check.
//! - [`client`] -- The [`ConductorClient`] boundary to the cluster API.
//! - [`types`] -- Job and inventory types exchanged with the cluster.

pub mod assembly;
pub mod client;
pub mod health;
pub mod status;
pub mod types;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use encodeflow_core::{
    Capabilities, Error, JobStatus, Result, Status, TranscodeProfile, TranscodingProvider,
};
use tracing::{debug, info, warn};

use crate::config::{Config, ElementalConductorConfig};
use crate::registry::{ProviderFactory, ProviderRegistry};

pub use assembly::{assemble_job, output_destination, DEFAULT_PRIORITY};
pub use client::ConductorClient;
pub use status::status_map;
pub use types::*;

/// Name under which this provider is registered and mapped in presets.
pub const NAME: &str = "elementalconductor";

/// Provider backed by an Elemental Conductor cluster.
pub struct ElementalConductorProvider {
    client: Arc<dyn ConductorClient>,
    config: ElementalConductorConfig,
}

impl std::fmt::Debug for ElementalConductorProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementalConductorProvider")
            .field("host", &self.config.host)
            .field("user_login", &self.config.user_login)
            .finish_non_exhaustive()
    }
}

impl ElementalConductorProvider {
    /// Create a provider from the `[elementalconductor]` config section.
    ///
    /// Fails with [`Error::InvalidConfig`] when the section is missing or
    /// lacks connection parameters.
    pub fn new(config: &Config, client: Arc<dyn ConductorClient>) -> Result<Self> {
        let section = config
            .elementalconductor
            .as_ref()
            .ok_or_else(|| Error::invalid_config("missing [elementalconductor] section"))?;
        validate_config(section)?;

        Ok(Self {
            client,
            config: section.clone(),
        })
    }

    pub fn config(&self) -> &ElementalConductorConfig {
        &self.config
    }

    /// Build the cluster job for `profile` without submitting it.
    pub fn new_job(&self, job_id: &str, profile: &TranscodeProfile) -> Result<Job> {
        assemble_job(job_id, profile, &self.config)
    }
}

/// Check that `config` carries every connection parameter the cluster needs.
pub fn validate_config(config: &ElementalConductorConfig) -> Result<()> {
    let mut missing = Vec::new();
    if config.host.is_empty() {
        missing.push("host");
    }
    if config.user_login.is_empty() {
        missing.push("user_login");
    }
    if config.api_key.is_empty() {
        missing.push("api_key");
    }
    if config.auth_expires == 0 {
        missing.push("auth_expires");
    }

    if !missing.is_empty() {
        return Err(Error::invalid_config(format!(
            "{} requires {}",
            NAME,
            missing.join(", ")
        )));
    }
    Ok(())
}

#[async_trait]
impl TranscodingProvider for ElementalConductorProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn transcode(&self, job_id: &str, profile: &TranscodeProfile) -> Result<JobStatus> {
        let job = self.new_job(job_id, profile)?;
        let provider_job_id = self.client.submit_job(&job).await?;
        info!("Submitted job {} as {} job {}", job_id, NAME, provider_job_id);

        Ok(JobStatus {
            provider_job_id,
            provider_name: NAME.to_string(),
            progress: 0.0,
            status: Status::Queued,
            provider_status: HashMap::new(),
            output_destination: output_destination(&job),
        })
    }

    async fn job_status(&self, provider_job_id: &str) -> Result<JobStatus> {
        let record = self.client.get_job(provider_job_id).await?;
        let status = status_map(&record.status);
        debug!(
            "Job {} is {} ({}, {}%)",
            provider_job_id, status, record.status, record.percent_complete
        );

        let provider_status = HashMap::from([
            (
                "status".to_string(),
                serde_json::Value::String(record.status.clone()),
            ),
            (
                "submitted".to_string(),
                serde_json::Value::String(record.submitted.to_rfc3339()),
            ),
        ]);

        Ok(JobStatus {
            provider_job_id: provider_job_id.to_string(),
            provider_name: NAME.to_string(),
            progress: record.percent_complete,
            status,
            provider_status,
            output_destination: assembly::first_group_directory(&record.output_groups),
        })
    }

    async fn cancel_job(&self, provider_job_id: &str) -> Result<()> {
        self.client.cancel_job(provider_job_id).await?;
        info!("Cancelled {} job {}", NAME, provider_job_id);
        Ok(())
    }

    async fn healthcheck(&self) -> Result<()> {
        let cloud_config = self.client.get_cloud_config().await?;
        let nodes = self.client.list_nodes().await?;

        health::check_capacity(&cloud_config, &nodes).inspect_err(|e| {
            warn!("{} healthcheck failed: {}", NAME, e);
        })
    }

    fn capabilities(&self) -> Capabilities {
        capabilities()
    }
}

/// Formats and destinations supported by the cluster.
pub fn capabilities() -> Capabilities {
    Capabilities {
        input_formats: vec!["prores".into(), "h264".into()],
        output_formats: vec!["mp4".into(), "hls".into()],
        destinations: vec!["akamai".into(), "s3".into()],
    }
}

/// Factory that builds providers talking to the cluster through `client`.
pub fn factory(client: Arc<dyn ConductorClient>) -> ProviderFactory {
    Arc::new(move |config: &Config| -> Result<Arc<dyn TranscodingProvider>> {
        let provider = ElementalConductorProvider::new(config, client.clone())?;
        Ok(Arc::new(provider) as Arc<dyn TranscodingProvider>)
    })
}

/// Register this provider under [`NAME`].
pub fn register(registry: &mut ProviderRegistry, client: Arc<dyn ConductorClient>) {
    registry.register(NAME, factory(client));
}
