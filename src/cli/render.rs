//! Render a documentation tree.
//!
//! ```bash
//! K0S_VERSION=v1.28.4+k0s.0 docvars render docs site
//! ```
//!
//! Every `*.md` file under the input directory is rendered with the
//! configured variables and written to the mirrored path in the output
//! directory; everything else is copied. The first failure aborts the run.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::build_variables;
use crate::config::DocsConfig;
use crate::templating::DocsRenderer;

#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Directory containing the Markdown templates
    input: PathBuf,

    /// Directory receiving the rendered pages
    output: PathBuf,
}

impl RenderCommand {
    pub fn execute(self, config: &DocsConfig) -> Result<()> {
        let variables = build_variables(config)?;
        let renderer = DocsRenderer::new(variables);

        let summary = renderer
            .render_tree(&self.input, &self.output)
            .with_context(|| format!("Failed to render {}", self.input.display()))?;

        let (hits, misses) = renderer.variables().resolver().cache_stats();
        tracing::debug!("Build variable cache: {} hit(s), {} miss(es)", hits, misses);

        println!(
            "{} {} page(s), copied {} file(s) into {}",
            "Rendered".green().bold(),
            summary.rendered,
            summary.copied,
            self.output.display()
        );
        Ok(())
    }
}
