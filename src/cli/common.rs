//! Shared plumbing for the subcommands: building the literal table, the
//! resolver and the full template namespace from a [`DocsConfig`].

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::config::DocsConfig;
use crate::literals::{LiteralTable, extract_literals_with};
use crate::resolver::BuildVarResolver;
use crate::templating::TemplateVariables;
use crate::version::VersionStrings;

/// Output format for listing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `name = value` line per entry
    Text,
    /// A single JSON object
    Json,
}

/// Scan the configured source file.
///
/// # Errors
///
/// Returns an error if the pattern override is invalid or the file cannot be read.
pub fn load_literals(config: &DocsConfig) -> Result<LiteralTable> {
    let pattern = config.declaration_pattern()?;
    let path = config.source_path();
    extract_literals_with(&path, &pattern)
        .with_context(|| format!("Failed to extract literals from {}", path.display()))
}

/// Resolver backed by the configured script.
pub fn build_resolver(config: &DocsConfig) -> BuildVarResolver {
    BuildVarResolver::new(config.process_runner())
}

/// Everything a page can reference, built once per run.
///
/// # Errors
///
/// Fails if the version variable is unset, the source file cannot be scanned
/// or the prefixed dependency version cannot be resolved.
pub fn build_variables(config: &DocsConfig) -> Result<TemplateVariables> {
    let versions = VersionStrings::from_env(&config.version_env)?;
    let literals = load_literals(config)?;
    let resolver = build_resolver(config);

    TemplateVariables::for_build(config, &versions, literals, resolver).with_context(|| {
        format!("Failed to resolve build variable '{}'", config.variables.prefixed_source)
    })
}

/// Format `(name, value)` pairs for printing.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_pairs<'a, I>(pairs: I, format: OutputFormat) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    match format {
        OutputFormat::Text => {
            Ok(pairs.into_iter().map(|(name, value)| format!("{name} = {value}\n")).collect())
        }
        OutputFormat::Json => {
            let map: BTreeMap<&str, &str> = pairs.into_iter().collect();
            let mut json = serde_json::to_string_pretty(&map)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let out = format_pairs([("A", "1"), ("B", "two")], OutputFormat::Text).unwrap();
        assert_eq!(out, "A = 1\nB = two\n");
    }

    #[test]
    fn test_format_json() {
        let out = format_pairs([("B", "2"), ("A", "1")], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["A"], "1");
        assert_eq!(parsed["B"], "2");
    }

    #[test]
    fn test_format_empty_text() {
        let out = format_pairs(std::iter::empty::<(&str, &str)>(), OutputFormat::Text).unwrap();
        assert!(out.is_empty());
    }
}
