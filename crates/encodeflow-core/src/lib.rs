//! encodeflow-core: backend-agnostic transcoding types.
//!
//! Every provider adapter speaks in terms of this crate: it receives a
//! [`TranscodeProfile`], reports progress as a [`JobStatus`] with a canonical
//! [`Status`], and fails with the unified [`Error`].

pub mod error;
pub mod profile;
pub mod provider;
pub mod status;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use profile::*;
pub use provider::TranscodingProvider;
pub use status::{JobStatus, Status};
