//! Lazy, memoizing resolution of build variables.
//!
//! Some documented values (the bundled Kubernetes version, for instance) are
//! only known to the build system. The [`BuildVarResolver`] asks an external
//! resolver script for them, one variable name per invocation:
//!
//! ```text
//! <resolver-program> [fixed-args...] <variable-name>
//! ```
//!
//! The script must exit 0 and print the value on stdout. Surrounding
//! whitespace is stripped.
//!
//! # Memoization
//!
//! The script runs at most once per distinct name per resolver instance. A
//! second request for the same name is answered from the [`VariableCache`]
//! even if the script would now print something else. The cache lock is held
//! across check, run and insert so the guarantee also holds when the template
//! engine calls in from several threads.
//!
//! # Failure policy
//!
//! Every failure is fatal to the build and leaves the cache untouched for the
//! failing name:
//!
//! - [`DocvarsError::Invocation`] - the script cannot be started
//! - [`DocvarsError::Command`] - the script exited unsuccessfully
//! - [`DocvarsError::Decode`] - the script succeeded but printed invalid UTF-8

mod cache;
mod command_builder;
mod runner;

pub use cache::VariableCache;
pub use command_builder::{CommandOutput, ScriptCommand};
pub use runner::{CommandRunner, ProcessRunner};

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::DocvarsError;

/// Resolves build variables through a [`CommandRunner`], caching each result
/// for the lifetime of the resolver.
pub struct BuildVarResolver {
    runner: Box<dyn CommandRunner>,
    cache: Mutex<VariableCache>,
}

impl std::fmt::Debug for BuildVarResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildVarResolver").field("cached", &self.cache_len()).finish()
    }
}

impl BuildVarResolver {
    /// Create a resolver with an empty cache.
    pub fn new(runner: impl CommandRunner + 'static) -> Self {
        Self {
            runner: Box::new(runner),
            cache: Mutex::new(VariableCache::new()),
        }
    }

    // The cache is append-only, so a poisoned lock still guards consistent data.
    fn lock_cache(&self) -> MutexGuard<'_, VariableCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve `name`, running the external resolver only on first request.
    ///
    /// # Errors
    ///
    /// - [`DocvarsError::InvalidVariableName`] if `name` is empty
    /// - [`DocvarsError::Invocation`] if the resolver cannot be started
    /// - [`DocvarsError::Command`] if the resolver exits unsuccessfully
    /// - [`DocvarsError::Decode`] if the resolver succeeds but prints invalid UTF-8
    pub fn resolve(&self, name: &str) -> Result<String, DocvarsError> {
        if name.is_empty() {
            return Err(DocvarsError::InvalidVariableName);
        }

        let mut cache = self.lock_cache();
        if let Some(value) = cache.get(name) {
            tracing::trace!("Build variable {} served from cache", name);
            return Ok(value.to_string());
        }

        tracing::debug!("Resolving build variable {}", name);
        let output = self.runner.run(name)?;

        if !output.success {
            return Err(DocvarsError::Command {
                name: name.to_string(),
                status: output.describe_status(),
                stderr: output.stderr,
            });
        }

        let value = output.stdout.trim().to_string();
        tracing::debug!("Build variable {} = {:?}", name, value);
        Ok(cache.insert(name, value).to_string())
    }

    /// Return the cached value for `name` without resolving it.
    pub fn cached(&self, name: &str) -> Option<String> {
        self.lock_cache().peek(name).map(str::to_string)
    }

    /// Number of distinct names resolved so far.
    pub fn cache_len(&self) -> usize {
        self.lock_cache().len()
    }

    /// `(hits, misses)` since the resolver was created.
    pub fn cache_stats(&self) -> (usize, usize) {
        self.lock_cache().stats()
    }

    /// Sorted copy of every resolved variable.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock_cache().snapshot()
    }
}
