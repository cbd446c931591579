//! Test utilities for docvars
//!
//! Helpers shared by unit tests and the integration suite (enable the
//! `test-utils` feature to use them from outside the crate):
//!
//! - [`init_test_logging`] installs a test-friendly tracing subscriber once
//! - [`FakeRunner`] replaces the resolver script with canned, recorded output

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::core::DocvarsError;
use crate::resolver::{CommandOutput, CommandRunner};

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` if set, otherwise uses `level`; with neither, logging
/// stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// In-memory [`CommandRunner`] returning canned output and recording every call.
///
/// Names without a canned result fail with [`DocvarsError::Invocation`], the
/// same way a missing script would.
#[derive(Debug, Default, Clone)]
pub struct FakeRunner {
    outputs: Arc<Mutex<HashMap<String, CommandOutput>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed for `name`, printing `stdout`.
    pub fn with_output(self, name: &str, stdout: &str) -> Self {
        self.with_result(name, CommandOutput::ok(stdout))
    }

    /// Return `output` (successful or not) for `name`.
    pub fn with_result(self, name: &str, output: CommandOutput) -> Self {
        self.outputs.lock().unwrap().insert(name.to_string(), output);
        self
    }

    /// Shared handle on the recorded invocations, in call order.
    pub fn calls(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }

    /// Shared handle on the canned outputs, to change them mid-test.
    pub fn outputs(&self) -> Arc<Mutex<HashMap<String, CommandOutput>>> {
        Arc::clone(&self.outputs)
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, name: &str) -> Result<CommandOutput, DocvarsError> {
        self.calls.lock().unwrap().push(name.to_string());
        self.outputs.lock().unwrap().get(name).cloned().ok_or_else(|| DocvarsError::Invocation {
            program: "fake-resolver".to_string(),
            reason: format!("no canned output for '{name}'"),
        })
    }
}
