use std::fmt;
use std::path::PathBuf;

/// Errors produced while loading a kubeconfig or presenting its contexts
#[derive(Debug)]
pub enum KctxError {
    /// Kubeconfig file could not be opened or read (missing, permission denied)
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Kubeconfig contents do not match the expected structure
    Parse { path: PathBuf, message: String },
    /// Failed to serialize results for display
    Output(String),
}

impl KctxError {
    /// True when the kubeconfig could not be read at all
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, KctxError::SourceUnavailable { .. })
    }

    /// True when the kubeconfig was read but could not be parsed
    pub fn is_parse(&self) -> bool {
        matches!(self, KctxError::Parse { .. })
    }
}

impl fmt::Display for KctxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KctxError::SourceUnavailable { path, source } => {
                write!(f, "Cannot read kubeconfig {}: {}", path.display(), source)
            }
            KctxError::Parse { path, message } => {
                write!(f, "Cannot parse kubeconfig {}: {}", path.display(), message)
            }
            KctxError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for KctxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KctxError::SourceUnavailable { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for KctxError {
    fn from(err: serde_json::Error) -> Self {
        KctxError::Output(err.to_string())
    }
}

impl From<serde_yml::Error> for KctxError {
    fn from(err: serde_yml::Error) -> Self {
        KctxError::Output(err.to_string())
    }
}

/// Result type alias for kubeconfig operations
pub type Result<T> = std::result::Result<T, KctxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_source_unavailable_display() {
        let err = KctxError::SourceUnavailable {
            path: PathBuf::from("/nowhere/config"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/config"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_parse_display() {
        let err = KctxError::Parse {
            path: PathBuf::from("/tmp/config"),
            message: "duplicate context name \"dev\"".to_string(),
        };
        assert!(err.to_string().contains("Cannot parse kubeconfig"));
        assert!(err.to_string().contains("duplicate context name"));
    }

    #[test]
    fn test_kind_helpers() {
        let unavailable = KctxError::SourceUnavailable {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(unavailable.is_source_unavailable());
        assert!(!unavailable.is_parse());

        let parse = KctxError::Parse {
            path: PathBuf::from("x"),
            message: "bad".to_string(),
        };
        assert!(parse.is_parse());
        assert!(!parse.is_source_unavailable());
    }

    #[test]
    fn test_error_source_io() {
        let err = KctxError::SourceUnavailable {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());

        let err = KctxError::Output("boom".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KctxError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: KctxError = json_err.into();
        match err {
            KctxError::Output(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected KctxError::Output"),
        }
    }
}
