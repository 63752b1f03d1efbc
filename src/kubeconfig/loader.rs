//! Kubeconfig file loading

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{KctxError, Result};

use super::locate::{resolve_path, ConfigEnv};
use super::models::Kubeconfig;

/// Reads and parses the kubeconfig at one resolved path
pub struct KubeconfigLoader {
    config_path: PathBuf,
}

impl Default for KubeconfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl KubeconfigLoader {
    /// Create a loader for the path selected by the process environment
    pub fn new() -> Self {
        Self::from_env(&ConfigEnv::from_process())
    }

    /// Create a loader for the path selected by the given environment
    pub fn from_env(env: &ConfigEnv) -> Self {
        Self {
            config_path: resolve_path(env),
        }
    }

    /// Create a loader for an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the kubeconfig from disk.
    /// A missing or unreadable file is an error; there is no default configuration.
    pub fn load(&self) -> Result<Kubeconfig> {
        debug!("Loading kubeconfig from {}", self.config_path.display());

        let content =
            fs::read_to_string(&self.config_path).map_err(|e| KctxError::SourceUnavailable {
                path: self.config_path.clone(),
                source: e,
            })?;

        let config = Kubeconfig::from_yaml(&content).map_err(|message| KctxError::Parse {
            path: self.config_path.clone(),
            message,
        })?;

        debug!(
            "Loaded kubeconfig {}: {} contexts, current-context={:?}",
            self.config_path.display(),
            config.contexts.len(),
            config.current_context
        );
        Ok(config)
    }
}
