//! Publish command.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use webdocs_publish::{load_config, Publisher, CONFIG_FILE};

/// Run the publish pipeline from the current working directory.
pub async fn run() -> Result<()> {
    let root = env::current_dir().context("Failed to determine working directory")?;
    let config = load_config(&root.join(CONFIG_FILE))?.resolve(&root);

    tracing::info!(
        "Publishing docs for {}",
        display_relative(&config.project_dir, &root)
    );

    let result = Publisher::new(config).publish().await?;

    tracing::info!(
        "Published {} files ({} bytes) in {}ms",
        result.files,
        result.bytes,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.publish_dir.display());

    Ok(())
}

/// Show `path` relative to `root` where possible.
fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
