//! Provider registry for constructing [`TranscodingProvider`]s by name.
//!
//! The outer system picks a provider name per request; the registry maps
//! that name to a factory which validates configuration and builds the
//! adapter.

use std::sync::Arc;

use encodeflow_core::{Error, Result, TranscodingProvider};

use crate::config::Config;

/// Builds a provider from application configuration.
pub type ProviderFactory =
    Arc<dyn Fn(&Config) -> Result<Arc<dyn TranscodingProvider>> + Send + Sync>;

/// Registry of provider factories, kept in registration order.
///
/// # Examples
///
/// ```rust,ignore
/// let mut registry = ProviderRegistry::new();
/// encodeflow::conductor::register(&mut registry, Arc::new(my_client));
///
/// let provider = registry.create("elementalconductor", &config)?;
/// ```
#[derive(Default)]
pub struct ProviderRegistry {
    factories: Vec<(&'static str, ProviderFactory)>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Register `factory` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: &'static str, factory: ProviderFactory) {
        if let Some(entry) = self.factories.iter_mut().find(|(n, _)| *n == name) {
            tracing::debug!("Replacing provider factory {}", name);
            entry.1 = factory;
        } else {
            self.factories.push((name, factory));
        }
    }

    /// Look up the factory registered under `name`.
    pub fn get_factory(&self, name: &str) -> Result<&ProviderFactory> {
        self.factories
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, factory)| factory)
            .ok_or_else(|| Error::ProviderNotFound(name.to_string()))
    }

    /// Build the provider registered under `name` from `config`.
    pub fn create(&self, name: &str, config: &Config) -> Result<Arc<dyn TranscodingProvider>> {
        let factory = self.get_factory(name)?;
        factory(config)
    }

    /// Names of all registered providers.
    pub fn names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|(name, _)| *name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use encodeflow_core::{Capabilities, JobStatus, Status, TranscodeProfile};

    /// A minimal stub provider used for testing.
    struct StubProvider {
        provider_name: &'static str,
    }

    #[async_trait]
    impl TranscodingProvider for StubProvider {
        fn name(&self) -> &'static str {
            self.provider_name
        }

        async fn transcode(&self, job_id: &str, _profile: &TranscodeProfile) -> Result<JobStatus> {
            self.job_status(job_id).await
        }

        async fn job_status(&self, provider_job_id: &str) -> Result<JobStatus> {
            Ok(JobStatus {
                provider_job_id: provider_job_id.to_string(),
                provider_name: self.provider_name.to_string(),
                progress: 0.0,
                status: Status::Queued,
                provider_status: Default::default(),
                output_destination: None,
            })
        }

        async fn cancel_job(&self, _provider_job_id: &str) -> Result<()> {
            Ok(())
        }

        async fn healthcheck(&self) -> Result<()> {
            Ok(())
        }

        fn capabilities(&self) -> Capabilities {
            Capabilities::default()
        }
    }

    fn stub_factory(name: &'static str) -> ProviderFactory {
        Arc::new(move |_config: &Config| -> Result<Arc<dyn TranscodingProvider>> {
            Ok(Arc::new(StubProvider {
                provider_name: name,
            }) as Arc<dyn TranscodingProvider>)
        })
    }

    #[test]
    fn empty_registry_has_no_providers() {
        let registry = ProviderRegistry::new();
        assert!(registry.names().is_empty());
        let err = registry.create("stub", &Config::default()).err().unwrap();
        assert!(matches!(err, Error::ProviderNotFound(ref name) if name == "stub"));
    }

    #[test]
    fn create_by_name() {
        let mut registry = ProviderRegistry::new();
        registry.register("first", stub_factory("first"));
        registry.register("second", stub_factory("second"));

        assert_eq!(registry.names(), vec!["first", "second"]);
        let provider = registry.create("second", &Config::default()).unwrap();
        assert_eq!(provider.name(), "second");
    }

    #[test]
    fn re_registering_replaces_factory() {
        let mut registry = ProviderRegistry::new();
        registry.register("stub", stub_factory("old"));
        registry.register("stub", stub_factory("new"));

        assert_eq!(registry.names(), vec!["stub"]);
        let provider = registry.create("stub", &Config::default()).unwrap();
        assert_eq!(provider.name(), "new");
    }
}
