//! Generate-reset-mirror pipeline.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::PublishConfig;
use crate::error::PublishError;
use crate::generator::DocGenerator;
use crate::mirror::{mirror_tree, reset_dir};

/// Result of a publish run.
#[derive(Debug)]
pub struct PublishResult {
    /// Number of files published
    pub files: usize,

    /// Number of directories published
    pub dirs: usize,

    /// Total bytes published
    pub bytes: u64,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Publish directory
    pub publish_dir: PathBuf,
}

/// Publishes generated documentation.
pub struct Publisher {
    config: PublishConfig,
    generator: DocGenerator,
}

impl Publisher {
    /// Create a new publisher. Paths in `config` should already be resolved.
    pub fn new(config: PublishConfig) -> Self {
        let generator = DocGenerator::new(
            config.tool.clone(),
            config.project_dir.clone(),
            config.target_dir.clone(),
        );

        Self { config, generator }
    }

    /// Run the pipeline.
    ///
    /// The publish directory is only removed once the generator has exited
    /// successfully and left a doc tree behind.
    pub async fn publish(&self) -> Result<PublishResult, PublishError> {
        let start = Instant::now();

        let doc_dir = self.generator.run().await?;

        tracing::info!("Resetting {}", self.config.publish_dir.display());
        reset_dir(&self.config.publish_dir)?;

        tracing::info!(
            "Copying {} to {}",
            doc_dir.display(),
            self.config.publish_dir.display()
        );
        let stats = mirror_tree(&doc_dir, &self.config.publish_dir)?;

        if stats.files == 0 {
            tracing::warn!("Generated doc tree at {} is empty", doc_dir.display());
        }

        Ok(PublishResult {
            files: stats.files,
            dirs: stats.dirs,
            bytes: stats.bytes,
            duration_ms: start.elapsed().as_millis() as u64,
            publish_dir: self.config.publish_dir.clone(),
        })
    }
}
