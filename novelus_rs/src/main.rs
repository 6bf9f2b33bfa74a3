//! # novelus
//!
//! Command line front end for the Novelus IP landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Write dist/index.html
//! novelus build
//!
//! # Serve images from a CDN
//! novelus build --out public --asset-base https://cdn.example.com/img
//!
//! # Verify in-page navigation
//! novelus check
//! ```

mod args;
mod commands;
mod config;

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use novelus_site::PageOptions;
use tracing::{debug, info};

use args::{Args, Command};
use config::NovelusConfig;

fn init_logging(level: &str) {
    // stderr only: stdout carries `render` and `content` output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn load_config(args: &Args) -> Result<NovelusConfig> {
    match &args.config {
        Some(path) => NovelusConfig::load_from_path(path),
        None => Ok(NovelusConfig::load(&env::current_dir()?)),
    }
}

fn with_asset_base(mut options: PageOptions, asset_base: Option<String>) -> PageOptions {
    if let Some(base) = asset_base {
        options.asset_base = base;
    }
    options
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = load_config(&args)?;
    let options = config.page_options();
    debug!(?options, "page options");

    let stdout = io::stdout();
    match args.command {
        Command::Build { out, asset_base } => {
            info!("Building novelus v{}", env!("CARGO_PKG_VERSION"));
            let path = commands::build(&with_asset_base(options, asset_base), &out)?;
            println!("{}", path.display());
        }
        Command::Render { asset_base } => {
            commands::render(&with_asset_base(options, asset_base), &mut stdout.lock())?;
        }
        Command::Check => {
            commands::check(&options, &mut stdout.lock())?;
        }
        Command::Content => {
            commands::content(&mut stdout.lock())?;
        }
    }
    Ok(())
}

/// A reader closing stdout early (`novelus render | head`) is not a failure.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[novelus] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_base_flag_overrides_config() {
        let options = with_asset_base(PageOptions::default(), Some("/cdn".into()));
        assert_eq!(options.asset_base, "/cdn");
        let options = with_asset_base(PageOptions::default(), None);
        assert_eq!(options.asset_base, "/images");
    }

    #[test]
    fn broken_pipe_is_recognised_through_context() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::BrokenPipe))
            .context("Failed to write rendered page");
        assert!(is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("Failed to read config")));
    }
}
