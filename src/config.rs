/// Configuration constants for locating the kubeconfig file
pub mod kubeconfig {
    /// Environment variable that overrides the default kubeconfig path
    pub const ENV_VAR: &str = "KUBECONFIG";

    /// Directory under HOME holding the default kubeconfig
    pub const DIR_NAME: &str = ".kube";

    /// Default kubeconfig file name inside `DIR_NAME`
    pub const FILE_NAME: &str = "config";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
