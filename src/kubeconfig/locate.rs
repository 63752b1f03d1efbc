//! Kubeconfig path resolution

use log::debug;
use std::path::PathBuf;

use crate::config::kubeconfig as kubeconfig_config;

/// Ambient inputs that decide where the kubeconfig lives.
///
/// Passed explicitly so resolution can be exercised without touching the real
/// process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigEnv {
    /// Value of the override variable (`KUBECONFIG`), if set
    pub kubeconfig: Option<String>,
    /// Home directory of the invoking user
    pub home: Option<PathBuf>,
}

impl ConfigEnv {
    /// Capture `KUBECONFIG` and the home directory from the running process
    pub fn from_process() -> Self {
        Self {
            kubeconfig: std::env::var(kubeconfig_config::ENV_VAR).ok(),
            home: dirs::home_dir(),
        }
    }

    /// Same as [`ConfigEnv::from_process`] but with an explicit override path
    pub fn with_override(kubeconfig: Option<String>) -> Self {
        Self {
            kubeconfig,
            home: dirs::home_dir(),
        }
    }
}

/// Resolve the kubeconfig path:
/// 1. `KUBECONFIG` (if set and non-empty), verbatim
/// 2. `<home>/.kube/config`
pub fn resolve_path(env: &ConfigEnv) -> PathBuf {
    if let Some(path) = env.kubeconfig.as_deref() {
        if !path.is_empty() {
            debug!(
                "Using kubeconfig from {} env var: {}",
                kubeconfig_config::ENV_VAR,
                path
            );
            return PathBuf::from(path);
        }
    }

    let path = env
        .home
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(kubeconfig_config::DIR_NAME)
        .join(kubeconfig_config::FILE_NAME);
    debug!("Using default kubeconfig path: {}", path.display());
    path
}
