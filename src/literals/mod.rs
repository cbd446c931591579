//! Literal extraction from a source file.
//!
//! The documentation quotes constants that live in the project's source code
//! (image names, versions, default paths). Instead of copying them by hand,
//! the build scans one source file once and exposes every
//! `[const|var] Name = "value"` declaration it finds.
//!
//! The scan is a best-effort, single-line heuristic:
//!
//! - each line is matched independently, in file order
//! - a later declaration of the same name replaces the earlier value
//! - declarations spread over several lines, or without a double-quoted
//!   string value, are silently skipped
//!
//! Skipping is safe because every lookup of an unknown name through
//! [`LiteralTable::lookup`] is a hard error, so a constant that disappeared
//! from the scan still breaks the build.
//!
//! # Examples
//!
//! ```rust,no_run
//! use docvars::literals::extract_literals;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), docvars::core::DocvarsError> {
//! let table = extract_literals(Path::new("pkg/constant/constant_shared.go"))?;
//! println!("etcd: {}", table.lookup("EtcdVersion")?);
//! # Ok(())
//! # }
//! ```

mod extractor;
mod table;

pub use extractor::{
    DEFAULT_DECLARATION_PATTERN, DeclarationPattern, extract_from_str, extract_literals,
    extract_literals_with,
};
pub use table::LiteralTable;
