//! Translation of a [`TranscodeProfile`] into a cluster [`Job`].
//!
//! Presets are numbered by their position in the request before they are
//! split by delivery mode, so `stream_<i>` always refers to the i-th preset
//! no matter which output group it ends up in.

use encodeflow_core::{Error, PresetMap, Result, TranscodeProfile};
use tracing::debug;

use super::types::{
    Container, Input, Job, Location, Output, OutputGroup, OutputGroupSettings, StreamAssembly,
};
use super::NAME;
use crate::config::ElementalConductorConfig;

/// Priority given to every submitted job.
pub const DEFAULT_PRIORITY: u32 = 50;

/// Extensions that select segmented (HLS) delivery. Matched case-sensitively.
const ADAPTIVE_EXTENSIONS: &[&str] = &["hls", "ts", "m3u8", ".ts"];

/// Container used for progressive outputs, keyed by extension.
const PROGRESSIVE_CONTAINERS: &[(&str, Container)] = &[
    ("mp4", Container::Mpeg4),
    ("webm", Container::Webm),
    ("mov", Container::QuickTime),
];

/// How an output is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// A single progressive file.
    Progressive,
    /// Segmented adaptive streaming.
    Adaptive,
}

impl DeliveryMode {
    pub fn for_extension(extension: &str) -> Self {
        if ADAPTIVE_EXTENSIONS.contains(&extension) {
            DeliveryMode::Adaptive
        } else {
            DeliveryMode::Progressive
        }
    }

    /// Container for an output with the given extension in this mode.
    ///
    /// Unknown progressive extensions have no container; the cluster picks
    /// one from the preset.
    pub fn container(&self, extension: &str) -> Option<Container> {
        match self {
            DeliveryMode::Adaptive => Some(Container::AppleHttpLiveStreaming),
            DeliveryMode::Progressive => PROGRESSIVE_CONTAINERS
                .iter()
                .find(|(ext, _)| *ext == extension)
                .map(|(_, container)| *container),
        }
    }
}

/// Outputs split by delivery mode, plus every stream assembly in preset order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    pub adaptive: Vec<Output>,
    pub progressive: Vec<Output>,
    pub stream_assemblies: Vec<StreamAssembly>,
}

/// Build outputs and stream assemblies for `presets`.
///
/// Fails with [`Error::PresetMapNotFound`] as soon as a preset has no
/// mapping for this provider; nothing is returned in that case.
pub fn partition_presets(presets: &[PresetMap]) -> Result<Partition> {
    let mut partition = Partition::default();

    for (index, preset) in presets.iter().enumerate() {
        let Some(provider_preset) = preset.preset_for(NAME) else {
            debug!("Preset {} has no {} mapping", preset.name, NAME);
            return Err(Error::PresetMapNotFound);
        };

        let stream_name = format!("stream_{index}");
        let extension = preset.output_opts.extension.as_str();
        let mode = DeliveryMode::for_extension(extension);

        let output = Output {
            stream_assembly_name: stream_name.clone(),
            name_modifier: format!("_{}", preset.name),
            order: index,
            container: mode.container(extension),
        };
        match mode {
            DeliveryMode::Adaptive => partition.adaptive.push(output),
            DeliveryMode::Progressive => partition.progressive.push(output),
        }

        partition.stream_assemblies.push(StreamAssembly {
            name: stream_name,
            preset: provider_preset.to_string(),
        });
    }

    Ok(partition)
}

/// Assemble the complete cluster job for `profile`.
pub fn assemble_job(
    job_id: &str,
    profile: &TranscodeProfile,
    config: &ElementalConductorConfig,
) -> Result<Job> {
    let partition = partition_presets(&profile.presets)?;

    let credentials = |uri: String| Location {
        uri,
        username: config.access_key_id.clone(),
        password: config.secret_access_key.clone(),
    };
    let destination = format!(
        "{}/{}/video",
        config.destination.trim_end_matches('/'),
        job_id
    );

    let mut output_groups = Vec::with_capacity(2);
    if !partition.adaptive.is_empty() {
        let segment_duration = profile
            .streaming_params
            .as_ref()
            .map(|params| params.segment_duration)
            .unwrap_or_default();
        output_groups.push(OutputGroup {
            order: 1,
            settings: OutputGroupSettings::AppleLive {
                destination: credentials(destination.clone()),
                segment_duration,
            },
            outputs: partition.adaptive,
        });
    }
    if !partition.progressive.is_empty() {
        output_groups.push(OutputGroup {
            order: output_groups.len() as u32 + 1,
            settings: OutputGroupSettings::File {
                destination: credentials(destination),
            },
            outputs: partition.progressive,
        });
    }

    debug!(
        "Assembled job {} with {} output groups and {} streams",
        job_id,
        output_groups.len(),
        partition.stream_assemblies.len()
    );

    Ok(Job {
        input: Input {
            file_input: credentials(profile.source_media.clone()),
        },
        priority: DEFAULT_PRIORITY,
        output_groups,
        stream_assemblies: partition.stream_assemblies,
    })
}

/// Directory holding the outputs of `job`.
///
/// Both group kinds share a destination base, so the first group decides.
pub fn output_destination(job: &Job) -> Option<String> {
    first_group_directory(&job.output_groups)
}

pub(crate) fn first_group_directory(groups: &[OutputGroup]) -> Option<String> {
    groups
        .first()
        .map(|group| parent_dir(&group.settings.destination().uri))
}

fn parent_dir(uri: &str) -> String {
    match uri.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => uri[..idx].to_string(),
        None => ".".to_string(),
    }
}
