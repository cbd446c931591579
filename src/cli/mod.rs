//! Command-line interface for docvars.
//!
//! # Commands
//!
//! - `render` - Render a Markdown documentation tree with build variables
//! - `literals` - List the string constants extracted from the source file
//! - `var` - Resolve build variables through the resolver script
//! - `vars` - Show the precomputed version variables
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging
//! - `--quiet` / `-q` - No logging at all
//! - `--config` / `-c` - Path to a `docvars.toml` (default: `./docvars.toml` if present)
//!
//! `RUST_LOG` always takes precedence over the verbosity flags.
//!
//! # Examples
//!
//! ```bash
//! K0S_VERSION=v1.28.4+k0s.0 docvars render docs site
//! docvars literals --format json
//! docvars -c ci/docvars.toml var kubernetes_version
//! ```

mod common;
mod literals;
mod render;
mod var;
mod vars;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::DocsConfig;

/// Render version-dependent documentation.
#[derive(Parser, Debug)]
#[command(
    name = "docvars",
    about = "Fill documentation templates with source constants and build variables",
    version,
    author
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all logging; errors are still reported
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file
    ///
    /// Without this flag `docvars.toml` in the current directory is used when
    /// it exists, and built-in defaults otherwise.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every Markdown page of a directory tree
    Render(render::RenderCommand),

    /// List literals extracted from the source file
    Literals(literals::LiteralsCommand),

    /// Resolve one or more build variables
    Var(var::VarCommand),

    /// Show the precomputed version variables
    Vars(vars::VarsCommand),
}

impl Cli {
    /// Set up logging, load the configuration and run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns the first failure of the subcommand; nothing is retried.
    pub fn execute(self) -> Result<()> {
        self.init_logging();

        let config = DocsConfig::load_with_optional(self.config.clone())?;
        tracing::debug!("Using source file {}", config.source_path().display());

        match self.command {
            Commands::Render(cmd) => cmd.execute(&config),
            Commands::Literals(cmd) => cmd.execute(&config),
            Commands::Var(cmd) => cmd.execute(&config),
            Commands::Vars(cmd) => cmd.execute(&config),
        }
    }

    /// Log filter derived from the flags, used when `RUST_LOG` is unset.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "off"
        } else {
            "warn"
        }
    }

    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}
