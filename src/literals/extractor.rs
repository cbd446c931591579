//! Line-oriented extraction of `name = "value"` declarations.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use super::LiteralTable;
use crate::core::DocvarsError;

/// Single-line declaration pattern: `[const|var] Name = "value"`.
///
/// The value may contain escaped quotes; escapes are kept verbatim.
pub const DEFAULT_DECLARATION_PATTERN: &str =
    r#"^\s*(?:(?:const|var)\s+)?(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*=\s*"(?P<value>(?:[^"\\]|\\.)*)""#;

/// Compiled declaration pattern guaranteed to expose `name` and `value` groups.
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    regex: Regex,
}

impl DeclarationPattern {
    /// Compile a custom pattern.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::InvalidPattern`] if the regex does not compile or
    /// does not define both the `name` and `value` capture groups.
    pub fn new(pattern: &str) -> Result<Self, DocvarsError> {
        let regex = Regex::new(pattern).map_err(|e| DocvarsError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        for group in ["name", "value"] {
            if !regex.capture_names().flatten().any(|n| n == group) {
                return Err(DocvarsError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: format!("missing named capture group `{group}`"),
                });
            }
        }

        Ok(Self {
            regex,
        })
    }

    /// Match a single line, returning the captured name and value.
    pub fn match_line<'l>(&self, line: &'l str) -> Option<(&'l str, &'l str)> {
        let caps = self.regex.captures(line)?;
        Some((caps.name("name")?.as_str(), caps.name("value")?.as_str()))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for DeclarationPattern {
    fn default() -> Self {
        static DEFAULT: OnceLock<Regex> = OnceLock::new();
        let regex = DEFAULT
            .get_or_init(|| {
                Regex::new(DEFAULT_DECLARATION_PATTERN)
                    .expect("default declaration pattern is a valid regex")
            })
            .clone();
        Self {
            regex,
        }
    }
}

/// Extract literals from `path` using the default declaration pattern.
///
/// # Errors
///
/// See [`extract_literals_with`].
pub fn extract_literals(path: &Path) -> Result<LiteralTable, DocvarsError> {
    extract_literals_with(path, &DeclarationPattern::default())
}

/// Scan `path` line by line and collect every declaration matched by `pattern`.
///
/// Later declarations of the same name overwrite earlier ones. Declarations
/// spanning several lines are not recognised. Finding nothing is not an error.
///
/// # Errors
///
/// - [`DocvarsError::FileNotFound`] if `path` does not exist
/// - [`DocvarsError::Decode`] if the file is not valid UTF-8
/// - [`DocvarsError::Io`] for any other read failure
pub fn extract_literals_with(
    path: &Path,
    pattern: &DeclarationPattern,
) -> Result<LiteralTable, DocvarsError> {
    tracing::debug!("Extracting literals from {} with pattern {}", path.display(), pattern.as_str());

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DocvarsError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => DocvarsError::io("read", path, &e),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| DocvarsError::Decode {
        what: path.display().to_string(),
        reason: e.utf8_error().to_string(),
    })?;

    let table = extract_from_str(&text, pattern);
    tracing::debug!("Extracted {} literal(s) from {}", table.len(), path.display());
    Ok(table)
}

/// Apply `pattern` to each line of `text`.
pub fn extract_from_str(text: &str, pattern: &DeclarationPattern) -> LiteralTable {
    let mut entries = BTreeMap::new();

    for (idx, line) in text.lines().enumerate() {
        if let Some((name, value)) = pattern.match_line(line) {
            tracing::trace!("line {}: {} = {:?}", idx + 1, name, value);
            if let Some(previous) = entries.insert(name.to_string(), value.to_string()) {
                tracing::debug!("Literal {} redeclared on line {}, replacing {:?}", name, idx + 1, previous);
            }
        }
    }

    LiteralTable::from_entries(entries)
}
