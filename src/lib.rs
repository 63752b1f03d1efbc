//! kctx - Inspect kubeconfig contexts
//!
//! Resolves the kubeconfig file the way kubectl does for a single file
//! (`KUBECONFIG` override, else `~/.kube/config`) and answers two questions:
//! which context is currently selected, and which contexts exist with the
//! cluster each one targets.
//!
//! # Example
//!
//! ```bash
//! # Show the selected context
//! kctx current-context
//!
//! # List contexts, sorted by name
//! kctx get-contexts
//!
//! # Use an alternate kubeconfig and emit JSON
//! kctx --kubeconfig ~/clusters/lab.yaml get-contexts -o json
//! ```
//!
//! As a library:
//!
//! ```no_run
//! use kctx::ContextQueryService;
//!
//! let service = ContextQueryService::from_process();
//! for ctx in service.list_contexts()? {
//!     println!("{} -> {}", ctx.name, ctx.cluster);
//! }
//! # Ok::<(), kctx::KctxError>(())
//! ```

pub mod cli;
pub mod config;
pub mod contexts;
pub mod error;
pub mod kubeconfig;
pub mod output;

pub use cli::{Cli, Command, GetContextsArgs, OutputFormat};
pub use contexts::{run_context_command, summarize, ContextOverview, ContextQueryService, ContextSummary};
pub use error::{KctxError, Result};
pub use kubeconfig::{resolve_path, ConfigEnv, Context, Kubeconfig, KubeconfigLoader};
