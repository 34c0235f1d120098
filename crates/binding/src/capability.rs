//! Capability contracts implemented by service modules.

use gatehouse_core::{Application, BindingResult, ModuleId};
use gatehouse_server::ServerContext;

/// Marker for all binding capabilities.
///
/// Zero behavior and zero state; every concrete capability trait extends
/// this so the protocol can speak about "a binding capability" generically.
pub trait ServiceBinding {}

/// Capability: this module can mount HTTP handlers into the shared server
/// context.
pub trait ServletBinding: ServiceBinding {
    /// Install this module's handlers.
    ///
    /// Called exactly once per module per process lifetime, during the
    /// registration phase (before the server accepts connections).
    /// Implementations may register zero or more routes and must not assume
    /// anything about the context beyond "accepts further registrations" —
    /// in particular, not which routes earlier modules claimed.
    ///
    /// Returning an error aborts the whole binding pass; see
    /// [`crate::BindingRegistry::bind_servlets`].
    fn contribute(
        &self,
        application: &Application,
        context: &mut ServerContext,
    ) -> BindingResult<()>;
}

/// An independently packaged unit contributing zero or more capabilities to
/// the host application.
///
/// Capability membership is a property of the module's type, fixed at load
/// time: a module opts into a capability by overriding the matching `as_*`
/// accessor to return itself. The registry never downcasts or reflects, so
/// the capability query stays compile-time checked.
pub trait ServiceModule: Send + Sync {
    /// Stable identity. Also the key for the module's configuration block
    /// and the name surfaced in diagnostics when binding fails.
    fn id(&self) -> ModuleId;

    /// The servlet capability, if this module mounts HTTP handlers.
    fn as_servlet_binding(&self) -> Option<&dyn ServletBinding> {
        None
    }
}
