//! Version strings taken from the build environment.
//!
//! The primary version (e.g. `v1.28.4+k0s.0`) is passed in by the release
//! tooling through an environment variable. Container image tags cannot
//! contain `+`, so a normalized form with `-` in its place is derived too.

use serde::Serialize;

use crate::core::DocvarsError;

/// Environment variable holding the primary version string.
pub const DEFAULT_VERSION_ENV: &str = "K0S_VERSION";

/// Character not allowed in image tags.
const RESERVED_CHAR: char = '+';

/// Replacement for [`RESERVED_CHAR`].
const SEPARATOR: char = '-';

/// Primary and normalized version strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionStrings {
    /// Version exactly as given
    pub primary: String,
    /// Version with every `+` replaced by `-`
    pub normalized: String,
}

impl VersionStrings {
    pub fn new(primary: impl Into<String>) -> Self {
        let primary = primary.into();
        let normalized = normalize_version(&primary);
        Self {
            primary,
            normalized,
        }
    }

    /// Read the primary version from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::MissingEnvironmentVariable`] if `var` is unset
    /// or not valid Unicode.
    pub fn from_env(var: &str) -> Result<Self, DocvarsError> {
        Self::from_lookup(var, |key| std::env::var(key).ok())
    }

    /// Read the primary version through an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::MissingEnvironmentVariable`] if the lookup yields nothing.
    pub fn from_lookup<F>(var: &str, lookup: F) -> Result<Self, DocvarsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let primary = lookup(var).ok_or_else(|| DocvarsError::MissingEnvironmentVariable {
            name: var.to_string(),
        })?;
        tracing::debug!("Primary version from {}: {}", var, primary);
        Ok(Self::new(primary))
    }
}

/// Replace every reserved `+` with `-`.
pub fn normalize_version(version: &str) -> String {
    version.replace(RESERVED_CHAR, &SEPARATOR.to_string())
}

/// Join a fixed prefix with a resolved value, e.g. `v` + `1.28.4`.
pub fn prefixed_version(prefix: &str, value: &str) -> String {
    format!("{prefix}{value}")
}
