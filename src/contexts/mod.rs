//! Context queries
//!
//! Answers "which context is selected?" and "which contexts exist, and on which
//! cluster?" from a kubeconfig loaded fresh for every query.

mod commands;
mod models;
mod query;

pub use commands::run_context_command;
pub use models::{ContextOverview, ContextSummary};
pub use query::{summarize, ContextQueryService};
