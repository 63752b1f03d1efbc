//! Context command handlers

use crate::cli::{Command, GetContextsArgs};
use crate::error::Result;
use crate::output::{formatter_for, rows_from_overview};

use super::query::ContextQueryService;

/// Dispatch a CLI command and return the text to print
pub fn run_context_command(command: &Command, service: &ContextQueryService) -> Result<String> {
    match command {
        Command::CurrentContext => run_current_context(service),
        Command::GetContexts(args) => run_get_contexts(service, args),
    }
}

/// Show the current-context, empty when unset
fn run_current_context(service: &ContextQueryService) -> Result<String> {
    service.current_context()
}

/// List contexts in the requested format
fn run_get_contexts(service: &ContextQueryService, args: &GetContextsArgs) -> Result<String> {
    let overview = service.overview()?;
    let rows = rows_from_overview(&overview);
    formatter_for(args.output, args.no_headers).render(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::kubeconfig::ConfigEnv;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
current-context: prod
contexts:
  - name: prod
    context:
      cluster: c1
  - name: dev
    context:
      cluster: c2
"#;

    fn test_service(dir: &TempDir, content: &str) -> ContextQueryService {
        let path = dir.path().join("config");
        fs::write(&path, content).unwrap();
        ContextQueryService::new(ConfigEnv {
            kubeconfig: Some(path.to_string_lossy().into_owned()),
            home: None,
        })
    }

    fn get_contexts(output: OutputFormat) -> Command {
        Command::GetContexts(GetContextsArgs {
            output,
            no_headers: false,
        })
    }

    #[test]
    fn test_current_context_command() {
        let dir = TempDir::new().unwrap();
        let service = test_service(&dir, SAMPLE);
        let out = run_context_command(&Command::CurrentContext, &service).unwrap();
        assert_eq!(out, "prod");
    }

    #[test]
    fn test_current_context_unset() {
        let dir = TempDir::new().unwrap();
        let service = test_service(&dir, "contexts: []\n");
        let out = run_context_command(&Command::CurrentContext, &service).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_get_contexts_name_output_sorted() {
        let dir = TempDir::new().unwrap();
        let service = test_service(&dir, SAMPLE);
        let out = run_context_command(&get_contexts(OutputFormat::Name), &service).unwrap();
        assert_eq!(out, "dev\nprod");
    }

    #[test]
    fn test_get_contexts_csv_marks_current() {
        let dir = TempDir::new().unwrap();
        let service = test_service(&dir, SAMPLE);
        let out = run_context_command(&get_contexts(OutputFormat::Csv), &service).unwrap();
        assert_eq!(out, "current,name,cluster\nfalse,dev,c2\ntrue,prod,c1");
    }

    #[test]
    fn test_get_contexts_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let service = ContextQueryService::new(ConfigEnv {
            kubeconfig: Some(dir.path().join("absent").to_string_lossy().into_owned()),
            home: None,
        });
        let err = run_context_command(&get_contexts(OutputFormat::Table), &service).unwrap_err();
        assert!(err.is_source_unavailable());
    }
}
