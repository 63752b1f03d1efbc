//! Kubeconfig data models

use serde::Deserialize;
use std::collections::HashMap;

/// Parsed kubeconfig: the selected context plus every named context.
///
/// On disk `contexts` is a list of `{name, context}` entries; it is folded into a
/// map keyed by name while deserializing, rejecting duplicate names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawKubeconfig")]
pub struct Kubeconfig {
    /// Name of the selected context, empty when unset
    pub current_context: String,
    /// Map of context name to context record
    pub contexts: HashMap<String, Context>,
}

/// A single context record
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Context {
    /// Cluster this context points at
    #[serde(default)]
    pub cluster: String,
    /// User entry used for authentication
    #[serde(default)]
    pub user: String,
    /// Default namespace
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Kubeconfig as it appears in the file, before contexts are keyed by name
#[derive(Deserialize)]
struct RawKubeconfig {
    #[serde(rename = "current-context", default)]
    current_context: Option<String>,
    #[serde(default)]
    contexts: Option<Vec<NamedContext>>,
}

#[derive(Deserialize)]
struct NamedContext {
    name: String,
    #[serde(default)]
    context: Option<Context>,
}

impl TryFrom<RawKubeconfig> for Kubeconfig {
    type Error = String;

    fn try_from(raw: RawKubeconfig) -> Result<Self, Self::Error> {
        let named = raw.contexts.unwrap_or_default();
        let mut contexts = HashMap::with_capacity(named.len());

        for entry in named {
            if contexts.contains_key(&entry.name) {
                return Err(format!("duplicate context name \"{}\"", entry.name));
            }
            contexts.insert(entry.name, entry.context.unwrap_or_default());
        }

        Ok(Self {
            current_context: raw.current_context.unwrap_or_default(),
            contexts,
        })
    }
}

impl Kubeconfig {
    /// Parse kubeconfig YAML. Blank input yields an empty configuration.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yml::from_str(content).map_err(|e| e.to_string())
    }
}
