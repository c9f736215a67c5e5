//! Scaffolding error taxonomy.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result type for scaffolding operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Errors that can abort a scaffolding run.
///
/// Every variant aborts the whole pipeline: nothing is retried, and no
/// rollback of a partially materialized project directory is attempted.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The target directory (or a file of that name) already exists.
    #[error("folder {} already exists", .0.display())]
    TargetExists(PathBuf),

    /// The requested template key is not registered.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// The registry has no templates to fall back on.
    #[error("no templates are registered")]
    NoTemplates,

    /// The dependency installer cannot be run in this environment.
    #[error("{0} was not found; install it and try again")]
    InstallerUnavailable(String),

    /// Fetching or persisting the template archive failed.
    #[error("failed to download {url}: {reason}")]
    Download {
        /// The archive URL that was being fetched.
        url: String,
        /// Transport, HTTP status, or filesystem failure description.
        reason: String,
    },

    /// The archive could not be unpacked into the project directory.
    #[error("failed to extract template archive: {0}")]
    Extraction(String),

    /// The placeholder pattern is not a valid regular expression.
    #[error("invalid placeholder pattern: {0}")]
    Pattern(String),

    /// Rewriting a scaffolded file failed.
    #[error("failed to rewrite {}: {reason}", .path.display())]
    Rewrite {
        /// The file (or tree) that could not be rewritten.
        path: PathBuf,
        /// Read or write failure description.
        reason: String,
    },

    /// The installer process could not be spawned or monitored.
    #[error("failed to run {program}: {reason}")]
    InstallerSpawn {
        /// The installer program name.
        program: String,
        /// Spawn or I/O failure description.
        reason: String,
    },

    /// The installer ran but exited with a failure status.
    #[error("dependency installation failed ({status})")]
    Installer {
        /// The subprocess's exit status.
        status: ExitStatus,
    },
}

impl ScaffoldError {
    /// Exit code to surface from the process for this error.
    ///
    /// Installer failures propagate the subprocess's own exit code;
    /// every other error maps to 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Installer { status } => status.code().unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_installer_errors_exit_with_one() {
        let error = ScaffoldError::UnknownTemplate("rails".to_string());
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn messages_are_single_human_readable_lines() {
        let error = ScaffoldError::Download {
            url: "http://example.com/starter.zip".to_string(),
            reason: "connection refused".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("http://example.com/starter.zip"));
        assert!(!message.contains('\n'));
    }
}
