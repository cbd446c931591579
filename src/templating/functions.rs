//! Tera functions backed by the literal table and the build variable resolver.
//!
//! Both functions take a single `name` argument:
//!
//! ```markdown
//! Kubernetes {{ build_var(name="kubernetes_version") }} with etcd {{ literal(name="EtcdVersion") }}
//! ```
//!
//! Failures are chained into the Tera error so the original
//! [`DocvarsError`](crate::core::DocvarsError) can be recovered by walking
//! the error sources.

use std::collections::HashMap;
use std::sync::Arc;

use crate::literals::LiteralTable;
use crate::resolver::BuildVarResolver;

/// Name of the literal lookup function.
pub const LITERAL_FUNCTION: &str = "literal";

/// Name of the build variable lookup function.
pub const BUILD_VAR_FUNCTION: &str = "build_var";

fn name_argument<'a>(function: &str, args: &'a HashMap<String, tera::Value>) -> tera::Result<&'a str> {
    args.get("name").and_then(tera::Value::as_str).ok_or_else(|| {
        tera::Error::msg(format!("{function}() requires a string `name` argument"))
    })
}

/// Create the `literal(name=...)` function.
///
/// Unknown names are errors; there is no default value.
pub fn create_literal_function(literals: Arc<LiteralTable>) -> impl tera::Function + 'static {
    move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
        let name = name_argument(LITERAL_FUNCTION, args)?;
        let value = literals.lookup(name).map_err(|e| {
            tera::Error::chain(format!("{LITERAL_FUNCTION}(name=\"{name}\") failed"), e)
        })?;
        Ok(tera::Value::String(value.to_string()))
    }
}

/// Create the `build_var(name=...)` function.
pub fn create_build_var_function(resolver: Arc<BuildVarResolver>) -> impl tera::Function + 'static {
    move |args: &HashMap<String, tera::Value>| -> tera::Result<tera::Value> {
        let name = name_argument(BUILD_VAR_FUNCTION, args)?;
        let value = resolver.resolve(name).map_err(|e| {
            tera::Error::chain(format!("{BUILD_VAR_FUNCTION}(name=\"{name}\") failed"), e)
        })?;
        Ok(tera::Value::String(value))
    }
}
