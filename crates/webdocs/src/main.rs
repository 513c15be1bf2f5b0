//! webdocs CLI - builds API docs for the scripting crate and publishes them.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use webdocs_publish::PublishError;

mod commands;

/// Regenerate the scripting crate's docs and mirror them into `public/`.
///
/// Paths can be overridden with an optional `webdocs.toml` in the working
/// directory.
#[derive(Parser)]
#[command(name = "webdocs")]
#[command(about = "Build and publish API documentation")]
#[command(version)]
pub struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .init();

    match commands::publish::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Exit status for a failed run: the generator's own code when it failed,
/// 1 otherwise.
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<PublishError>()
        .map(PublishError::exit_code)
        .unwrap_or(1)
}
