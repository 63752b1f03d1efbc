//! Kubeconfig location and loading
//!
//! Decides which kubeconfig file to read (`KUBECONFIG` override, else
//! `~/.kube/config`) and parses it into a [`Kubeconfig`].

mod loader;
mod locate;
mod models;

pub use loader::KubeconfigLoader;
pub use locate::{resolve_path, ConfigEnv};
pub use models::{Context, Kubeconfig};
