//! Capability dispatch loop (startup orchestration).
//!
//! The registry owns the ordered module list the loader produced and drives
//! one capability at a time over it. The rules are deliberately rigid:
//!
//! - **Load order is the only order.** Modules are invoked in the exact
//!   order the loader emitted them; the registry never reorders or
//!   parallelizes.
//! - **First failure aborts the pass.** Binding failures are deployment or
//!   programming mistakes, not transient faults, so there are no retries
//!   and no partial recovery. The caller must discard the partially filled
//!   context — a half-registered server must never start serving.
//! - **Errors stay diagnosable.** The registry wraps the underlying cause
//!   with the failing module's identity before surfacing it.

use thiserror::Error;

use gatehouse_core::{Application, BindingError, ModuleId};
use gatehouse_server::ServerContext;

use crate::capability::ServiceModule;

/// A module failed to complete registration.
///
/// Wraps the offending module's identity around the underlying
/// [`BindingError`] so startup diagnostics can name the module.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("module `{module}` failed to bind: {source}")]
pub struct DispatchError {
    module: ModuleId,
    source: BindingError,
}

impl DispatchError {
    /// Identity of the module that failed.
    pub fn module(&self) -> ModuleId {
        self.module
    }

    /// The underlying binding failure.
    pub fn cause(&self) -> &BindingError {
        &self.source
    }
}

/// Ordered set of loaded modules plus the dispatch loop over their
/// capabilities.
pub struct BindingRegistry {
    modules: Vec<Box<dyn ServiceModule>>,
}

impl BindingRegistry {
    /// Build a registry from the loader's output. The vector's order is the
    /// binding order and is preserved as-is.
    pub fn new(modules: Vec<Box<dyn ServiceModule>>) -> Self {
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module identities in load order.
    pub fn module_ids(&self) -> Vec<ModuleId> {
        self.modules.iter().map(|m| m.id()).collect()
    }

    /// Invoke the servlet capability on every module that supports it, in
    /// load order. Modules without the capability are skipped, not errors.
    ///
    /// Returns the number of modules that contributed. On the first failure
    /// the pass stops: no later module is invoked and the partially filled
    /// `context` must be discarded by the caller.
    pub fn bind_servlets(
        &self,
        application: &Application,
        context: &mut ServerContext,
    ) -> Result<usize, DispatchError> {
        let mut contributed = 0;
        for module in &self.modules {
            let Some(binding) = module.as_servlet_binding() else {
                tracing::debug!(module = %module.id(), "no servlet binding; skipped");
                continue;
            };

            binding
                .contribute(application, context)
                .map_err(|source| {
                    tracing::error!(module = %module.id(), error = %source, "servlet binding failed");
                    DispatchError {
                        module: module.id(),
                        source,
                    }
                })?;

            tracing::debug!(module = %module.id(), "servlet binding contributed");
            contributed += 1;
        }
        Ok(contributed)
    }
}
