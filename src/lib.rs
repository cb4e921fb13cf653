//! encodeflow - Elemental Conductor transcoding provider
//!
//! This library crate exposes the provider, its configuration and the
//! provider registry for use by the surrounding transcoding service.

pub mod conductor;
pub mod config;
pub mod registry;

pub use conductor::{ElementalConductorProvider, NAME as PROVIDER_NAME};
pub use encodeflow_core::{
    Capabilities, Error, JobStatus, PresetMap, Result, Status, StreamingParams, TranscodeProfile,
    TranscodingProvider,
};
pub use registry::{ProviderFactory, ProviderRegistry};
