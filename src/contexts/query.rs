//! Read-only queries over a freshly loaded kubeconfig

use log::debug;

use crate::error::Result;
use crate::kubeconfig::{ConfigEnv, Kubeconfig, KubeconfigLoader};

use super::models::{ContextOverview, ContextSummary};

/// Project every context to `(name, cluster)`, sorted by name ascending.
///
/// The map's iteration order is unspecified, so the sort is what makes the output
/// reproducible.
pub fn summarize(config: &Kubeconfig) -> Vec<ContextSummary> {
    let mut contexts: Vec<ContextSummary> = config
        .contexts
        .iter()
        .map(|(name, ctx)| ContextSummary::new(name.as_str(), ctx.cluster.as_str()))
        .collect();

    contexts.sort_by(|a, b| a.name.cmp(&b.name));
    contexts
}

/// Answers context queries. Every call reloads the kubeconfig; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct ContextQueryService {
    env: ConfigEnv,
}

impl ContextQueryService {
    pub fn new(env: ConfigEnv) -> Self {
        Self { env }
    }

    /// Service bound to the running process environment
    pub fn from_process() -> Self {
        Self::new(ConfigEnv::from_process())
    }

    fn load(&self) -> Result<Kubeconfig> {
        KubeconfigLoader::from_env(&self.env).load()
    }

    /// The `current-context` value verbatim, empty if unset.
    /// Not checked against the defined contexts.
    pub fn current_context(&self) -> Result<String> {
        let config = self.load()?;
        debug!("Current context: {:?}", config.current_context);
        Ok(config.current_context)
    }

    /// All contexts as `(name, cluster)` pairs sorted by name
    pub fn list_contexts(&self) -> Result<Vec<ContextSummary>> {
        let config = self.load()?;
        let contexts = summarize(&config);
        debug!("Found {} contexts", contexts.len());
        Ok(contexts)
    }

    /// Both answers from one read of the kubeconfig
    pub fn overview(&self) -> Result<ContextOverview> {
        let config = self.load()?;
        let contexts = summarize(&config);
        debug!(
            "Found {} contexts, current-context={:?}",
            contexts.len(),
            config.current_context
        );
        Ok(ContextOverview {
            current: config.current_context,
            contexts,
        })
    }
}
