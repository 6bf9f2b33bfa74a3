//! Command line arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "novelus")]
#[command(about = "Render the Novelus IP landing page to static HTML")]
#[command(version)]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Config file (default: ./novelus.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page and write <OUT>/index.html
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
        /// Base URL for images (overrides the config file)
        #[arg(long)]
        asset_base: Option<String>,
    },
    /// Render the page to stdout
    Render {
        /// Base URL for images (overrides the config file)
        #[arg(long)]
        asset_base: Option<String>,
    },
    /// Verify that every in-page link resolves to exactly one section
    Check,
    /// Print the page datasets as JSON
    Content,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn build_defaults_to_dist() {
        let args = Args::try_parse_from(["novelus", "build"]).unwrap();
        match args.command {
            Command::Build { out, asset_base } => {
                assert_eq!(out, PathBuf::from("dist"));
                assert!(asset_base.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["novelus", "check", "--log-level", "debug", "--config", "x.toml"])
                .unwrap();
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
    }
}
