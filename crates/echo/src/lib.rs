//! Bundled echo module: a configuration-driven JSON echo endpoint.
//!
//! This module only works when the deployment provides a configuration
//! block; it is the canonical exercise of the expected-failure path of the
//! binding protocol (missing block, malformed block, bad path).

use axum::routing::post;
use axum::Json;
use serde::Deserialize;

use gatehouse_binding::{ServiceBinding, ServiceModule, ServletBinding};
use gatehouse_core::{Application, BindingError, BindingResult, ModuleId};
use gatehouse_server::ServerContext;

pub const MODULE_ID: ModuleId = ModuleId::new("echo");

#[derive(Debug, Deserialize)]
struct EchoConfig {
    /// Route the echo handler is mounted at. Must be absolute.
    path: String,
}

/// Echoes the JSON request body back inside an envelope.
#[derive(Debug, Default)]
pub struct EchoModule;

impl EchoModule {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceBinding for EchoModule {}

impl ServletBinding for EchoModule {
    fn contribute(
        &self,
        application: &Application,
        context: &mut ServerContext,
    ) -> BindingResult<()> {
        let raw = application.module_config(MODULE_ID.as_str()).ok_or_else(|| {
            BindingError::missing_dependency(format!(
                "configuration block `{MODULE_ID}` is required"
            ))
        })?;

        let config: EchoConfig = serde_json::from_value(raw.clone())
            .map_err(|err| BindingError::configuration(format!("echo config: {err}")))?;

        if !config.path.starts_with('/') {
            return Err(BindingError::configuration(format!(
                "echo path must start with '/': `{}`",
                config.path
            )));
        }

        context.route(&config.path, post(echo))
    }
}

impl ServiceModule for EchoModule {
    fn id(&self) -> ModuleId {
        MODULE_ID
    }

    fn as_servlet_binding(&self) -> Option<&dyn ServletBinding> {
        Some(self)
    }
}

async fn echo(Json(body): Json<serde_json::Value>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "echo": body }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_config(config: serde_json::Value) -> Application {
        Application::new("test", "0.0.0").with_module_config(MODULE_ID.as_str(), config)
    }

    #[test]
    fn registers_the_configured_path() {
        let app = app_with_config(serde_json::json!({ "path": "/echo" }));
        let mut ctx = ServerContext::new();

        EchoModule::new().contribute(&app, &mut ctx).unwrap();

        assert_eq!(ctx.paths(), vec!["/echo"]);
    }

    #[test]
    fn missing_config_block_is_a_missing_dependency() {
        let app = Application::new("test", "0.0.0");
        let mut ctx = ServerContext::new();

        let err = EchoModule::new().contribute(&app, &mut ctx).unwrap_err();
        assert!(matches!(err, BindingError::MissingDependency(_)));
    }

    #[test]
    fn malformed_config_block_is_a_configuration_error() {
        let app = app_with_config(serde_json::json!({ "route": "/echo" }));
        let mut ctx = ServerContext::new();

        let err = EchoModule::new().contribute(&app, &mut ctx).unwrap_err();
        assert!(matches!(err, BindingError::Configuration(_)));
    }

    #[test]
    fn relative_echo_path_is_rejected_before_registration() {
        let app = app_with_config(serde_json::json!({ "path": "echo" }));
        let mut ctx = ServerContext::new();

        let err = EchoModule::new().contribute(&app, &mut ctx).unwrap_err();
        assert!(matches!(err, BindingError::Configuration(_)));
        assert_eq!(ctx.route_count(), 0);
    }
}
