//! Job and inventory types exchanged with an Elemental Conductor cluster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Job description
// ---------------------------------------------------------------------------

/// A complete job description, ready to be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub input: Input,
    pub priority: u32,
    pub output_groups: Vec<OutputGroup>,
    pub stream_assemblies: Vec<StreamAssembly>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub file_input: Location,
}

/// A URI plus the credentials the cluster uses to access it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub uri: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputGroupType {
    #[serde(rename = "file_group_settings")]
    File,
    #[serde(rename = "apple_live_group_settings")]
    AppleLive,
}

/// Delivery-mode specific settings of an output group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputGroupSettings {
    #[serde(rename = "file_group_settings")]
    File { destination: Location },
    #[serde(rename = "apple_live_group_settings")]
    AppleLive {
        destination: Location,
        /// Segment length in seconds.
        segment_duration: u32,
    },
}

impl OutputGroupSettings {
    pub fn group_type(&self) -> OutputGroupType {
        match self {
            OutputGroupSettings::File { .. } => OutputGroupType::File,
            OutputGroupSettings::AppleLive { .. } => OutputGroupType::AppleLive,
        }
    }

    pub fn destination(&self) -> &Location {
        match self {
            OutputGroupSettings::File { destination }
            | OutputGroupSettings::AppleLive { destination, .. } => destination,
        }
    }
}

/// Outputs sharing a delivery mode and destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputGroup {
    /// 1-based position of the group within the job.
    pub order: u32,
    pub settings: OutputGroupSettings,
    pub outputs: Vec<Output>,
}

impl OutputGroup {
    pub fn group_type(&self) -> OutputGroupType {
        self.settings.group_type()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    /// Name of the [`StreamAssembly`] rendered into this output.
    pub stream_assembly_name: String,
    /// Suffix appended to the output file name.
    pub name_modifier: String,
    /// Global index of the preset this output was built from.
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
}

/// Container formats understood by the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Container {
    #[serde(rename = "mp4")]
    Mpeg4,
    #[serde(rename = "webm")]
    Webm,
    #[serde(rename = "mov")]
    QuickTime,
    #[serde(rename = "m3u8")]
    AppleHttpLiveStreaming,
}

impl Container {
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::Mpeg4 => "mp4",
            Container::Webm => "webm",
            Container::QuickTime => "mov",
            Container::AppleHttpLiveStreaming => "m3u8",
        }
    }
}

/// Binding of a generated stream name to a cluster preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamAssembly {
    pub name: String,
    pub preset: String,
}

// ---------------------------------------------------------------------------
// Job records
// ---------------------------------------------------------------------------

/// A job as reported back by the cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    /// Raw status string, e.g. `running` or `complete`.
    pub status: String,
    #[serde(default)]
    pub percent_complete: f64,
    pub submitted: DateTime<Utc>,
    #[serde(default)]
    pub output_groups: Vec<OutputGroup>,
}

// ---------------------------------------------------------------------------
// Cluster inventory
// ---------------------------------------------------------------------------

/// Product running on a cluster node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeProduct {
    /// Management node.
    #[serde(rename = "Elemental Conductor File")]
    ConductorFile,
    /// Encoding worker.
    #[serde(rename = "Elemental Server")]
    Server,
    #[serde(other)]
    Other,
}

impl NodeProduct {
    pub fn is_worker(&self) -> bool {
        matches!(self, NodeProduct::Server)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub name: String,
    pub product: NodeProduct,
    /// Lifecycle status, e.g. `active`, `starting`, `error`.
    pub status: String,
}

/// Cluster-wide settings relevant to admission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Minimum number of worker nodes that must be active.
    pub min_nodes: usize,
}
