//! Print the precomputed template variables.
//!
//! ```bash
//! K0S_VERSION=v1.28.4+k0s.0 docvars vars
//! # k0s_docker_version = v1.28.4-k0s.0
//! # k0s_version = v1.28.4+k0s.0
//! # k8s_version = v1.28.4
//! ```

use anyhow::Result;
use clap::Args;

use super::common::{OutputFormat, build_variables, format_pairs};
use crate::config::DocsConfig;

#[derive(Args, Debug)]
pub struct VarsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl VarsCommand {
    pub fn execute(self, config: &DocsConfig) -> Result<()> {
        let variables = build_variables(config)?;
        let values = variables.values();
        print!(
            "{}",
            format_pairs(values.iter().map(|(k, v)| (k.as_str(), v.as_str())), self.format)?
        );
        Ok(())
    }
}
