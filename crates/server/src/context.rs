//! Route table under construction.

use std::collections::BTreeSet;

use axum::Router;
use axum::routing::MethodRouter;
use gatehouse_core::{BindingError, BindingResult};

/// Mutable registration surface of the HTTP server.
///
/// During the binding phase, modules add routes and mounts; nobody reads
/// another module's entries back out. Registration is strictly additive and
/// each path/prefix can be claimed exactly once — a second claim is a
/// [`BindingError::RouteConflict`] at registration time rather than a panic
/// deep inside the router when serving starts.
///
/// `into_router` consumes the context, so the "no mutation once serving
/// begins" invariant holds at the type level: a served context no longer
/// exists to be mutated.
#[derive(Default)]
pub struct ServerContext {
    routes: Vec<(String, MethodRouter)>,
    mounts: Vec<(String, Router)>,
    claimed: BTreeSet<String>,
}

impl ServerContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler at an exact path.
    ///
    /// A module serving several methods on one path combines them on a
    /// single `MethodRouter` (`get(..).post(..)`); the path itself can only
    /// be claimed once.
    pub fn route(&mut self, path: &str, handler: MethodRouter) -> BindingResult<()> {
        self.claim(path)?;
        self.routes.push((path.to_string(), handler));
        Ok(())
    }

    /// Mount a whole sub-router under a path prefix.
    pub fn mount(&mut self, prefix: &str, router: Router) -> BindingResult<()> {
        self.claim(prefix)?;
        self.mounts.push((prefix.to_string(), router));
        Ok(())
    }

    fn claim(&mut self, path: &str) -> BindingResult<()> {
        if !path.starts_with('/') {
            return Err(BindingError::configuration(format!(
                "route path must start with '/': `{path}`"
            )));
        }
        if !self.claimed.insert(path.to_string()) {
            return Err(BindingError::route_conflict(path));
        }
        Ok(())
    }

    /// Number of entries registered so far (routes plus mounts).
    pub fn route_count(&self) -> usize {
        self.routes.len() + self.mounts.len()
    }

    /// Claimed paths and prefixes, in registration order.
    pub fn paths(&self) -> Vec<&str> {
        self.routes
            .iter()
            .map(|(path, _)| path.as_str())
            .chain(self.mounts.iter().map(|(prefix, _)| prefix.as_str()))
            .collect()
    }

    /// Consume the registration surface and produce the serving router.
    ///
    /// After this point no further registration is possible.
    pub fn into_router(self) -> Router {
        let mut router = Router::new();
        for (path, handler) in self.routes {
            router = router.route(&path, handler);
        }
        for (prefix, sub) in self.mounts {
            router = router.nest(&prefix, sub);
        }
        router
    }
}

impl core::fmt::Debug for ServerContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ServerContext")
            .field("claimed", &self.claimed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    async fn ok() -> &'static str {
        "ok"
    }

    #[test]
    fn routes_accumulate_in_registration_order() {
        let mut ctx = ServerContext::new();
        ctx.route("/b", get(ok)).unwrap();
        ctx.route("/a", get(ok)).unwrap();
        ctx.mount("/sub", Router::new()).unwrap();

        assert_eq!(ctx.paths(), vec!["/b", "/a", "/sub"]);
        assert_eq!(ctx.route_count(), 3);
    }

    #[test]
    fn duplicate_path_is_a_route_conflict() {
        let mut ctx = ServerContext::new();
        ctx.route("/x", get(ok)).unwrap();

        let err = ctx.route("/x", get(ok)).unwrap_err();
        assert_eq!(err, BindingError::route_conflict("/x"));

        // The conflicting entry was not added.
        assert_eq!(ctx.route_count(), 1);
    }

    #[test]
    fn mount_and_route_share_the_claim_space() {
        let mut ctx = ServerContext::new();
        ctx.mount("/api", Router::new()).unwrap();

        let err = ctx.route("/api", get(ok)).unwrap_err();
        assert!(matches!(err, BindingError::RouteConflict(_)));
    }

    #[test]
    fn relative_paths_are_rejected() {
        let mut ctx = ServerContext::new();
        let err = ctx.route("x", get(ok)).unwrap_err();
        assert!(matches!(err, BindingError::Configuration(_)));
    }
}
