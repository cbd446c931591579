//! Configuration for a documentation build (`docvars.toml`).
//!
//! Every field is optional; an absent file means all defaults. Relative paths
//! (the source file and a path-like resolver program) are resolved against the
//! directory containing the configuration file.
//!
//! # Example
//!
//! ```toml
//! source_file = "pkg/constant/constant_shared.go"
//! version_env = "K0S_VERSION"
//!
//! [resolver]
//! program = "./vars.sh"
//!
//! [variables]
//! prefixed_version = "k8s_version"
//! prefixed_source = "kubernetes_version"
//! prefix = "v"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::DocvarsError;
use crate::literals::DeclarationPattern;
use crate::resolver::ProcessRunner;
use crate::version::DEFAULT_VERSION_ENV;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "docvars.toml";

/// Default source file scanned for literals.
pub const DEFAULT_SOURCE_FILE: &str = "pkg/constant/constant_shared.go";

/// Default resolver script.
pub const DEFAULT_RESOLVER_PROGRAM: &str = "./vars.sh";

/// Top-level `docvars.toml` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Source file scanned for `name = "value"` declarations
    pub source_file: PathBuf,

    /// Override for the declaration pattern (must define `name` and `value` groups)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration_pattern: Option<String>,

    /// Environment variable holding the primary version string
    pub version_env: String,

    /// How build variables are resolved
    pub resolver: ResolverConfig,

    /// Names under which precomputed values are exposed to templates
    pub variables: VariableNames,

    /// Directory relative paths resolve against; the config file's directory
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// `[resolver]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Program to run; bare names are searched in `PATH`
    pub program: String,
    /// Fixed arguments passed before the variable name
    pub args: Vec<String>,
}

/// `[variables]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariableNames {
    /// Template variable holding the primary version
    pub version: String,
    /// Template variable holding the normalized version
    pub normalized_version: String,
    /// Template variable holding the prefixed dependency version
    pub prefixed_version: String,
    /// Build variable whose value is prefixed
    pub prefixed_source: String,
    /// Prefix prepended to the build variable
    pub prefix: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source_file: PathBuf::from(DEFAULT_SOURCE_FILE),
            declaration_pattern: None,
            version_env: DEFAULT_VERSION_ENV.to_string(),
            resolver: ResolverConfig::default(),
            variables: VariableNames::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_RESOLVER_PROGRAM.to_string(),
            args: Vec::new(),
        }
    }
}

impl Default for VariableNames {
    fn default() -> Self {
        Self {
            version: "k0s_version".to_string(),
            normalized_version: "k0s_docker_version".to_string(),
            prefixed_version: "k8s_version".to_string(),
            prefixed_source: "kubernetes_version".to_string(),
            prefix: "v".to_string(),
        }
    }
}

impl DocsConfig {
    /// Load from an explicit path, or from `docvars.toml` in the current
    /// directory if it exists, or fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly given file is missing, or if a file
    /// exists but cannot be read or parsed.
    pub fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(DocvarsError::ConfigError {
                        message: format!("config file {} does not exist", path.display()),
                    }
                    .into());
                }
                Self::load_from(&path)
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Self = toml::from_str(&content).map_err(|e| DocvarsError::ConfigError {
            message: format!("{}: {e}", path.display()),
        })?;
        config.base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text; `base_dir` is left at `.`.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::ConfigError`] for invalid TOML or unknown keys.
    pub fn parse(content: &str) -> Result<Self, DocvarsError> {
        toml::from_str(content).map_err(|e| DocvarsError::ConfigError {
            message: e.to_string(),
        })
    }

    /// Source file path, resolved against [`base_dir`](Self::base_dir).
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.source_file)
    }

    /// Compile the configured (or default) declaration pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::InvalidPattern`] for a bad override.
    pub fn declaration_pattern(&self) -> Result<DeclarationPattern, DocvarsError> {
        match &self.declaration_pattern {
            Some(pattern) => DeclarationPattern::new(pattern),
            None => Ok(DeclarationPattern::default()),
        }
    }

    /// Build the real resolver runner, running in [`base_dir`](Self::base_dir).
    pub fn process_runner(&self) -> ProcessRunner {
        ProcessRunner::new(self.resolver.program.clone())
            .with_args(self.resolver.args.clone())
            .with_working_dir(self.base_dir.clone())
    }
}
