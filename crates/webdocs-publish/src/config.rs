//! Publish configuration and `webdocs.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the optional configuration file in the working directory.
pub const CONFIG_FILE: &str = "webdocs.toml";

/// Paths and tool used by a publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Root of the project whose docs are generated
    pub project_dir: PathBuf,

    /// Documentation generator executable
    pub tool: String,

    /// Directory passed to the generator as `--target-dir`
    pub target_dir: PathBuf,

    /// Directory the generated docs are mirrored into
    pub publish_dir: PathBuf,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from(default_project()),
            tool: default_tool(),
            target_dir: PathBuf::from(default_target_dir()),
            publish_dir: PathBuf::from(default_publish_dir()),
        }
    }
}

impl PublishConfig {
    /// Anchor every relative path at `root`.
    ///
    /// The generator runs with the project as its current directory, so
    /// `--target-dir` has to be absolute for the output to land in our tree.
    pub fn resolve(self, root: &Path) -> Self {
        Self {
            project_dir: root.join(self.project_dir),
            tool: self.tool,
            target_dir: root.join(self.target_dir),
            publish_dir: root.join(self.publish_dir),
        }
    }
}

/// Errors that can occur while loading `webdocs.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Configuration file structure (webdocs.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    source: SourceSection,
    #[serde(default)]
    build: BuildSection,
    #[serde(default)]
    publish: PublishSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SourceSection {
    #[serde(default = "default_project")]
    project: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BuildSection {
    #[serde(default = "default_tool")]
    tool: String,
    #[serde(default = "default_target_dir")]
    target_dir: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PublishSection {
    #[serde(default = "default_publish_dir")]
    dir: String,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            project: default_project(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            target_dir: default_target_dir(),
        }
    }
}

impl Default for PublishSection {
    fn default() -> Self {
        Self {
            dir: default_publish_dir(),
        }
    }
}

impl From<ConfigFile> for PublishConfig {
    fn from(file: ConfigFile) -> Self {
        Self {
            project_dir: PathBuf::from(file.source.project),
            tool: file.build.tool,
            target_dir: PathBuf::from(file.build.target_dir),
            publish_dir: PathBuf::from(file.publish.dir),
        }
    }
}

fn default_project() -> String {
    "../lotus-script".to_string()
}
fn default_tool() -> String {
    "cargo".to_string()
}
fn default_target_dir() -> String {
    "target".to_string()
}
fn default_publish_dir() -> String {
    "public".to_string()
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str, path: &Path) -> Result<PublishConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into())
}

/// Load configuration from `path` if it exists, falling back to defaults.
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<PublishConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(PublishConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, path)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}
