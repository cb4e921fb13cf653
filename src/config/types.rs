use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub elementalconductor: Option<ElementalConductorConfig>,
}

/// Connection and storage settings for an Elemental Conductor cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElementalConductorConfig {
    /// Base URL of the Conductor API.
    #[serde(default)]
    pub host: String,

    #[serde(default)]
    pub user_login: String,

    #[serde(default)]
    pub api_key: String,

    /// Lifetime of signed API requests, in seconds
    #[serde(default)]
    pub auth_expires: u64,

    /// Credentials the cluster uses to read sources and write outputs
    #[serde(default)]
    pub access_key_id: String,

    #[serde(default)]
    pub secret_access_key: String,

    /// Base location for job outputs (e.g. `s3://bucket/outputs`)
    #[serde(default)]
    pub destination: String,
}
