//! Publishing pipeline for webdocs.
//!
//! Runs `cargo doc` against a sibling project, then replaces the publish
//! directory with a mirror of the generated `doc` tree.

pub mod config;
pub mod error;
pub mod generator;
pub mod mirror;
pub mod publisher;

pub use config::{load_config, ConfigError, PublishConfig, CONFIG_FILE};
pub use error::PublishError;
pub use generator::DocGenerator;
pub use mirror::{mirror_tree, reset_dir, MirrorStats};
pub use publisher::{PublishResult, Publisher};
