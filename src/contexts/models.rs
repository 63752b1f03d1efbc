//! Context query result models

use serde::Serialize;

/// A context projected down to its name and cluster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSummary {
    pub name: String,
    pub cluster: String,
}

impl ContextSummary {
    pub fn new(name: impl Into<String>, cluster: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cluster: cluster.into(),
        }
    }
}

/// Current context and sorted context list taken from a single load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContextOverview {
    pub current: String,
    pub contexts: Vec<ContextSummary>,
}

impl ContextOverview {
    /// Whether `name` is the selected context
    pub fn is_current(&self, name: &str) -> bool {
        !self.current.is_empty() && self.current == name
    }
}
