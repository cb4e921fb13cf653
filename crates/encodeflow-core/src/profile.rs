//! Transcode request types.
//!
//! A [`TranscodeProfile`] is what callers hand to a provider: one source
//! file, the presets to render it with, and optional adaptive streaming
//! parameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A provider-agnostic transcode request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscodeProfile {
    /// Location of the source media (e.g. `s3://bucket/video.mov`).
    pub source_media: String,
    /// Presets to render, in order. The order determines stream numbering.
    pub presets: Vec<PresetMap>,
    #[serde(default)]
    pub streaming_params: Option<StreamingParams>,
}

/// A named preset along with its provider-specific counterparts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetMap {
    pub name: String,
    /// Provider name -> provider-specific preset name.
    #[serde(default)]
    pub provider_mapping: HashMap<String, String>,
    #[serde(default)]
    pub output_opts: OutputOptions,
}

impl PresetMap {
    /// Look up the preset name to use for `provider`.
    pub fn preset_for(&self, provider: &str) -> Option<&str> {
        self.provider_mapping.get(provider).map(String::as_str)
    }
}

/// Output settings that are independent of the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Target file extension (e.g. `mp4`, `m3u8`). May be empty.
    #[serde(default)]
    pub extension: String,
}

/// Adaptive streaming parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingParams {
    /// Delivery protocol identifier (e.g. `hls`).
    #[serde(default)]
    pub protocol: String,
    /// Segment duration in seconds.
    #[serde(default)]
    pub segment_duration: u32,
}

/// Static description of what a provider accepts and produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub input_formats: Vec<String>,
    pub output_formats: Vec<String>,
    pub destinations: Vec<String>,
}
