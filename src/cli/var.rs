//! Resolve build variables through the configured resolver script.
//!
//! ```bash
//! docvars var kubernetes_version etcd_version
//! ```
//!
//! Each distinct name runs the script once, even if repeated on the command line.

use anyhow::Result;
use clap::Args;

use super::common::{OutputFormat, build_resolver, format_pairs};
use crate::config::DocsConfig;
use crate::resolver::BuildVarResolver;

#[derive(Args, Debug)]
pub struct VarCommand {
    /// Build variable names
    #[arg(required = true)]
    names: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl VarCommand {
    pub fn execute(self, config: &DocsConfig) -> Result<()> {
        let resolver = build_resolver(config);
        print!("{}", self.render(&resolver)?);
        Ok(())
    }

    fn render(&self, resolver: &BuildVarResolver) -> Result<String> {
        let resolved = self
            .names
            .iter()
            .map(|name| resolver.resolve(name).map(|value| (name.as_str(), value)))
            .collect::<Result<Vec<_>, _>>()?;
        format_pairs(resolved.iter().map(|(name, value)| (*name, value.as_str())), self.format)
    }
}
