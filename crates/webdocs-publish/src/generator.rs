//! Invocation of the external documentation generator.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::PublishError;

/// Runs `<tool> doc --no-deps --target-dir <dir>` inside a project.
#[derive(Debug, Clone)]
pub struct DocGenerator {
    tool: String,
    project_dir: PathBuf,
    target_dir: PathBuf,
}

impl DocGenerator {
    /// Create a generator for `project_dir` writing into `target_dir`.
    pub fn new(
        tool: impl Into<String>,
        project_dir: impl Into<PathBuf>,
        target_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            tool: tool.into(),
            project_dir: project_dir.into(),
            target_dir: target_dir.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.arg("doc")
            .arg("--no-deps")
            .arg("--target-dir")
            .arg(&self.target_dir)
            .current_dir(&self.project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the generator and wait for it to exit.
    ///
    /// Returns the generated doc directory, which is guaranteed to exist.
    pub async fn run(&self) -> Result<PathBuf, PublishError> {
        if !self.project_dir.is_dir() {
            return Err(PublishError::ProjectNotFound(self.project_dir.clone()));
        }

        tracing::info!(
            "Running {} doc in {}",
            self.tool,
            self.project_dir.display()
        );

        let status = self
            .command()
            .status()
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => PublishError::ToolNotFound {
                    tool: self.tool.clone(),
                    source,
                },
                _ => PublishError::ToolSpawn {
                    tool: self.tool.clone(),
                    source,
                },
            })?;

        if !status.success() {
            return Err(PublishError::ToolFailed {
                tool: self.tool.clone(),
                status,
            });
        }

        let doc_dir = self.target_dir.join("doc");
        if !doc_dir.is_dir() {
            return Err(PublishError::DocsMissing(doc_dir));
        }

        Ok(doc_dir)
    }
}
