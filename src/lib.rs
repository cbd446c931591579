//! docvars - fill documentation templates with values taken from a source tree
//!
//! Pages are Markdown files rendered with [Tera](https://keats.github.io/tera/).
//! Three kinds of values are available to them:
//!
//! - **Literals**: string constants scanned out of one source file and
//!   looked up with `{{ literal(name="EtcdVersion") }}`
//! - **Build variables**: values printed by a resolver script
//!   (`./vars.sh <name>`), fetched lazily with
//!   `{{ build_var(name="etcd_version") }}` and cached for the whole run
//! - **Version variables**: `k0s_version`, `k0s_docker_version` and
//!   `k8s_version`, computed once from the environment
//!
//! Any missing value aborts the build; nothing is silently left blank.
//!
//! # Modules
//!
//! - [`literals`] - Regex-driven constant extraction
//! - [`resolver`] - Lazy, cached build variable resolution
//! - [`version`] - Version string normalization
//! - [`templating`] - Tera functions and the page renderer
//! - [`config`] - `docvars.toml` loading
//! - [`cli`] - Command-line interface
//! - [`core`] - Error types and user-facing error reports
//! - [`utils`] - Small shared helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use docvars::literals::extract_literals;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), docvars::core::DocvarsError> {
//! let table = extract_literals(Path::new("pkg/constant/constant_shared.go"))?;
//! println!("etcd {}", table.lookup("EtcdVersion")?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod literals;
pub mod resolver;
pub mod templating;
pub mod utils;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
