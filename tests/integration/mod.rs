//! Integration test suite for docvars
//!
//! End-to-end tests driving the `docvars` binary against temporary projects.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **render**: Rendering documentation trees
//! - **literals**: The `literals` command and strict literal lookups
//! - **variables**: The `var` and `vars` commands
//! - **config**: `docvars.toml` handling
//!
//! Resolver scripts are POSIX shell, so most tests are Unix-only.

#[path = "../common/mod.rs"]
mod common;

mod config;
mod literals;
mod render;
mod variables;
