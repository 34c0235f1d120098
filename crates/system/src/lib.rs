//! Bundled system module: health and server-info endpoints.
//!
//! Every deployment loads this module first, so `/health` and
//! `/system/info` are always available regardless of what else is
//! configured.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use gatehouse_binding::{ServiceBinding, ServiceModule, ServletBinding};
use gatehouse_core::{Application, BindingResult, ModuleId};
use gatehouse_server::ServerContext;

pub const MODULE_ID: ModuleId = ModuleId::new("system");

/// Static server identity, snapshotted from the application at bind time.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub server_name: String,
    pub version: String,
    pub instance_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl From<&Application> for ServerInfo {
    fn from(application: &Application) -> Self {
        Self {
            server_name: application.server_name().to_string(),
            version: application.version().to_string(),
            instance_id: application.instance_id(),
            started_at: application.started_at(),
        }
    }
}

/// Health and server-info endpoints.
#[derive(Debug, Default)]
pub struct SystemModule;

impl SystemModule {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceBinding for SystemModule {}

impl ServletBinding for SystemModule {
    fn contribute(
        &self,
        application: &Application,
        context: &mut ServerContext,
    ) -> BindingResult<()> {
        // Snapshot: handlers never hold a reference into the application.
        let info = ServerInfo::from(application);

        context.route("/health", get(health))?;
        context.route(
            "/system/info",
            get(move || {
                let info = info.clone();
                async move { Json(info) }
            }),
        )?;
        Ok(())
    }
}

impl ServiceModule for SystemModule {
    fn id(&self) -> ModuleId {
        MODULE_ID
    }

    fn as_servlet_binding(&self) -> Option<&dyn ServletBinding> {
        Some(self)
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}
