//! Binding error model.

use thiserror::Error;

/// Result type used across the binding protocol.
pub type BindingResult<T> = Result<T, BindingError>;

/// A module could not complete registration.
///
/// This is the *expected* failure channel of the protocol: bad deployment
/// configuration, an unavailable dependency, a route already claimed by an
/// earlier module. Contract violations (a capability called outside the
/// registration phase, a poisoned lock) are panics and are never represented
/// here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The module's configuration block is missing a required value or
    /// failed to parse.
    #[error("invalid module configuration: {0}")]
    Configuration(String),

    /// Something the module needs to build its handlers is not available in
    /// this deployment.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// The route or mount point was already claimed.
    #[error("route conflict: {0}")]
    RouteConflict(String),

    /// Handler construction failed for a reason other than configuration.
    #[error("handler construction failed: {0}")]
    Handler(String),
}

impl BindingError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn missing_dependency(msg: impl Into<String>) -> Self {
        Self::MissingDependency(msg.into())
    }

    pub fn route_conflict(msg: impl Into<String>) -> Self {
        Self::RouteConflict(msg.into())
    }

    pub fn handler(msg: impl Into<String>) -> Self {
        Self::Handler(msg.into())
    }
}
