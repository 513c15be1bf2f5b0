//! Errors raised by the publish pipeline.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Errors that can occur during a publish run.
///
/// Every variant is fatal. Variants raised by the generation step are
/// returned before the publish directory is touched.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Project directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    #[error("Documentation tool not found: {tool}")]
    ToolNotFound {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to run {tool}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} doc failed with {status}")]
    ToolFailed { tool: String, status: ExitStatus },

    #[error("Generated docs not found: {}", .0.display())]
    DocsMissing(PathBuf),

    #[error("Failed to remove {}", path.display())]
    Reset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {}", path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// Process exit code for this failure.
    ///
    /// A generator that exits non-zero hands its own code through; a
    /// generator killed by a signal and every other failure map to 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            PublishError::ToolFailed { status, .. } => status
                .code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|code| *code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
