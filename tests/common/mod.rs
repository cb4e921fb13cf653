//! Shared test harness for integration tests.
//!
//! Provides [`FakeConductorClient`], an in-memory stand-in for a Conductor
//! cluster, and helpers for building configs and presets.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use parking_lot::Mutex;

use encodeflow::conductor::{CloudConfig, ConductorClient, Job, JobRecord, Node, NAME};
use encodeflow::config::{Config, ElementalConductorConfig};
use encodeflow_core::{OutputOptions, PresetMap};

#[derive(Default)]
struct ClusterState {
    jobs: HashMap<String, JobRecord>,
    submitted: Vec<Job>,
    canceled: Vec<String>,
    nodes: Vec<Node>,
    cloud_config: CloudConfig,
    fail_with: Option<String>,
}

/// In-memory cluster that records every call made through [`ConductorClient`].
#[derive(Default)]
pub struct FakeConductorClient {
    state: Mutex<ClusterState>,
}

impl FakeConductorClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert_job(&self, record: JobRecord) {
        self.state.lock().jobs.insert(record.id.clone(), record);
    }

    pub fn set_nodes(&self, nodes: Vec<Node>) {
        self.state.lock().nodes = nodes;
    }

    pub fn set_cloud_config(&self, cloud_config: CloudConfig) {
        self.state.lock().cloud_config = cloud_config;
    }

    /// Make every subsequent call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        self.state.lock().fail_with = Some(message.to_string());
    }

    pub fn submitted_jobs(&self) -> Vec<Job> {
        self.state.lock().submitted.clone()
    }

    pub fn canceled_jobs(&self) -> Vec<String> {
        self.state.lock().canceled.clone()
    }

    fn check_failure(&self) -> Result<()> {
        match &self.state.lock().fail_with {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl ConductorClient for FakeConductorClient {
    async fn submit_job(&self, job: &Job) -> Result<String> {
        self.check_failure()?;
        let mut state = self.state.lock();
        state.submitted.push(job.clone());
        Ok(format!("{}", state.submitted.len()))
    }

    async fn get_job(&self, job_id: &str) -> Result<JobRecord> {
        self.check_failure()?;
        self.state
            .lock()
            .jobs
            .get(job_id)
            .cloned()
            .ok_or_else(|| anyhow!("job not found: {}", job_id))
    }

    async fn cancel_job(&self, job_id: &str) -> Result<()> {
        self.check_failure()?;
        self.state.lock().canceled.push(job_id.to_string());
        Ok(())
    }

    async fn list_nodes(&self) -> Result<Vec<Node>> {
        self.check_failure()?;
        Ok(self.state.lock().nodes.clone())
    }

    async fn get_cloud_config(&self) -> Result<CloudConfig> {
        self.check_failure()?;
        Ok(self.state.lock().cloud_config)
    }
}

pub fn conductor_section() -> ElementalConductorConfig {
    ElementalConductorConfig {
        host: "https://mybucket.s3.amazonaws.com/destination-dir/".into(),
        user_login: "myuser".into(),
        api_key: "elemental-api-key".into(),
        auth_expires: 30,
        access_key_id: "aws-access-key".into(),
        secret_access_key: "aws-secret-key".into(),
        destination: "s3://destination".into(),
    }
}

pub fn test_config() -> Config {
    Config {
        elementalconductor: Some(conductor_section()),
    }
}

pub fn preset(name: &str, extension: &str) -> PresetMap {
    PresetMap {
        name: name.into(),
        provider_mapping: HashMap::from([
            (NAME.to_string(), name.to_string()),
            ("other".to_string(), "not relevant".to_string()),
        ]),
        output_opts: OutputOptions {
            extension: extension.into(),
        },
    }
}
