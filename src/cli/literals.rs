//! Show the literals extracted from the configured source file.
//!
//! ```bash
//! docvars literals                    # every literal
//! docvars literals --format json      # as a JSON object
//! docvars literals EtcdVersion        # selected names; unknown names fail
//! ```

use anyhow::Result;
use clap::Args;

use super::common::{OutputFormat, format_pairs, load_literals};
use crate::config::DocsConfig;
use crate::literals::LiteralTable;

#[derive(Args, Debug)]
pub struct LiteralsCommand {
    /// Only show these names (each must exist)
    names: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl LiteralsCommand {
    pub fn execute(self, config: &DocsConfig) -> Result<()> {
        let table = load_literals(config)?;
        print!("{}", self.render(&table)?);
        Ok(())
    }

    fn render(&self, table: &LiteralTable) -> Result<String> {
        if self.names.is_empty() {
            return format_pairs(table.iter(), self.format);
        }

        let selected = self
            .names
            .iter()
            .map(|name| Ok((name.as_str(), table.lookup(name)?)))
            .collect::<Result<Vec<_>, crate::core::DocvarsError>>()?;
        format_pairs(selected, self.format)
    }
}
