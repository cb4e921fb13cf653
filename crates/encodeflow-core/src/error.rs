//! Unified error type for transcoding providers.
//!
//! Every failure a provider can report is an expected, caller-actionable
//! outcome, so each one gets its own variant that callers can match on.

/// Unified error type covering all provider failure modes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required connection parameters are missing or malformed.
    #[error("invalid provider config: {0}")]
    InvalidConfig(String),

    /// A preset in the request has no entry for the active provider.
    #[error("preset not found in provider mapping")]
    PresetMapNotFound,

    /// The backend client failed; the underlying error is kept as-is.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),

    /// Fewer active worker nodes than the backend's configured minimum.
    #[error(
        "there are not enough active nodes. {required} nodes required to be active, but found only {found}"
    )]
    NotEnoughNodes {
        /// Minimum number of active workers required by the backend.
        required: usize,
        /// Active workers actually observed.
        found: usize,
    },

    /// No provider factory is registered under the requested name.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),
}

impl Error {
    /// Convenience constructor for [`Error::InvalidConfig`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    /// Returns `true` for failures raised by the backend client rather than
    /// by the provider itself.
    pub fn is_backend(&self) -> bool {
        matches!(self, Error::Backend(_))
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
