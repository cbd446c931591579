//! Exposure of computed variables to Tera templates.
//!
//! A documentation page sees one flat namespace:
//!
//! | Name | Kind | Backed by |
//! |------|------|-----------|
//! | `literal(name=...)` | function | [`LiteralTable`] (unknown names are fatal) |
//! | `build_var(name=...)` | function | [`BuildVarResolver`] |
//! | `k0s_version` | string | primary version from the environment |
//! | `k0s_docker_version` | string | primary version with `+` replaced by `-` |
//! | `k8s_version` | string | prefix + resolved `kubernetes_version` |
//!
//! The string names are configurable (see [`crate::config::VariableNames`]).
//!
//! [`TemplateVariables`] only assembles that namespace; resolution lives in
//! [`crate::literals`] and [`crate::resolver`], so both can be exercised
//! without Tera.
//!
//! # Literal Blocks
//!
//! Pages that document the template syntax itself can wrap examples in a
//! `literal` fence; the block is emitted as a plain code fence, unrendered:
//!
//! ````markdown
//! ```literal
//! {{ build_var(name="kubernetes_version") }}
//! ```
//! ````

mod functions;
mod renderer;

pub use functions::{
    BUILD_VAR_FUNCTION, LITERAL_FUNCTION, create_build_var_function, create_literal_function,
};
pub use renderer::{DocsRenderer, RenderSummary};

use std::collections::BTreeMap;
use std::sync::Arc;
use tera::{Context as TeraContext, Tera};

use crate::config::DocsConfig;
use crate::core::DocvarsError;
use crate::literals::LiteralTable;
use crate::resolver::BuildVarResolver;
use crate::version::{VersionStrings, prefixed_version};

/// The name → value/callable mapping handed to the template engine.
#[derive(Debug, Clone)]
pub struct TemplateVariables {
    literals: Arc<LiteralTable>,
    resolver: Arc<BuildVarResolver>,
    values: BTreeMap<String, String>,
}

impl TemplateVariables {
    /// Namespace with the two lookup functions and no precomputed strings.
    pub fn new(literals: LiteralTable, resolver: BuildVarResolver) -> Self {
        Self {
            literals: Arc::new(literals),
            resolver: Arc::new(resolver),
            values: BTreeMap::new(),
        }
    }

    /// Add a precomputed string variable.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Assemble the full namespace for a build.
    ///
    /// The prefixed dependency version is resolved eagerly, so a failing
    /// resolver aborts the build before any page is rendered.
    ///
    /// # Errors
    ///
    /// Propagates any resolver failure for the prefixed source variable.
    pub fn for_build(
        config: &DocsConfig,
        versions: &VersionStrings,
        literals: LiteralTable,
        resolver: BuildVarResolver,
    ) -> Result<Self, DocvarsError> {
        let names = &config.variables;
        let dependency = resolver.resolve(&names.prefixed_source)?;

        Ok(Self::new(literals, resolver)
            .with_value(&names.version, &versions.primary)
            .with_value(&names.normalized_version, &versions.normalized)
            .with_value(&names.prefixed_version, prefixed_version(&names.prefix, &dependency)))
    }

    pub fn literals(&self) -> &LiteralTable {
        &self.literals
    }

    pub fn resolver(&self) -> &BuildVarResolver {
        &self.resolver
    }

    /// Precomputed string variables, sorted by name.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Tera context holding the precomputed string variables.
    pub fn context(&self) -> TeraContext {
        let mut context = TeraContext::new();
        for (name, value) in &self.values {
            context.insert(name.as_str(), value);
        }
        context
    }

    /// Register `literal()` and `build_var()` on `tera`.
    pub fn register_functions(&self, tera: &mut Tera) {
        tera.register_function(LITERAL_FUNCTION, create_literal_function(Arc::clone(&self.literals)));
        tera.register_function(
            BUILD_VAR_FUNCTION,
            create_build_var_function(Arc::clone(&self.resolver)),
        );
    }
}
