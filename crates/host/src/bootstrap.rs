//! Startup sequence: construct the application, run the binding pass,
//! publish the router.

use axum::Router;
use thiserror::Error;

use gatehouse_binding::DispatchError;
use gatehouse_core::Application;
use gatehouse_server::ServerContext;

use crate::config::{ConfigError, HostConfig};
use crate::modules;

/// Fatal startup failure. The process must exit without binding a socket.
#[derive(Debug, Error)]
pub enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Binding(#[from] DispatchError),
}

/// Load deployment configuration from the environment and build the app.
///
/// This is the binary's entrypoint into the startup sequence; tests call
/// [`build_app`] directly with a constructed config.
pub fn boot() -> Result<(HostConfig, Router), BootError> {
    let config = HostConfig::load()?;
    let app = build_app(&config)?;
    Ok((config, app))
}

/// Run the registration phase and produce the serving router.
///
/// Any failure here means no server starts: a partially registered context
/// is dropped on the error path, never served.
pub fn build_app(config: &HostConfig) -> Result<Router, BootError> {
    let mut application =
        Application::new(config.server_name.as_str(), env!("CARGO_PKG_VERSION"));
    for (module, block) in &config.modules {
        application = application.with_module_config(module.clone(), block.clone());
    }

    let registry = modules::load_modules(config);
    let mut context = ServerContext::new();
    let contributed = registry.bind_servlets(&application, &mut context)?;

    tracing::info!(
        modules = registry.len(),
        contributed,
        routes = context.route_count(),
        "binding phase complete"
    );

    Ok(context.into_router())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_an_app() {
        build_app(&HostConfig::default()).unwrap();
    }

    #[test]
    fn misconfigured_module_aborts_the_boot() {
        let mut config = HostConfig::default();
        // Malformed block: `path` is required by the echo module.
        config
            .modules
            .insert("echo".to_string(), serde_json::json!({}));

        let err = build_app(&config).unwrap_err();
        assert!(err.to_string().contains("echo"));
    }
}
