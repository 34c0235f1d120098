//! Host application state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The single live host instance.
///
/// Exactly one `Application` exists per process. It is constructed before any
/// capability is invoked and passed by shared reference into every capability
/// operation, so modules can read host configuration while registering. The
/// module list itself lives in the registry, not here; keeping it out of
/// `Application` lets the dispatch loop borrow the application immutably
/// while iterating modules.
#[derive(Debug, Clone)]
pub struct Application {
    server_name: String,
    version: String,
    instance_id: Uuid,
    started_at: DateTime<Utc>,
    module_config: BTreeMap<String, serde_json::Value>,
}

impl Application {
    pub fn new(server_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
            version: version.into(),
            instance_id: Uuid::now_v7(),
            started_at: Utc::now(),
            module_config: BTreeMap::new(),
        }
    }

    /// Attach a per-module configuration block (builder style, used by the
    /// host while assembling the application from deployment config).
    pub fn with_module_config(
        mut self,
        module: impl Into<String>,
        config: serde_json::Value,
    ) -> Self {
        self.module_config.insert(module.into(), config);
        self
    }

    /// Human-facing deployment name.
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// Package version of the host binary.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Per-process instance id (UUIDv7, minted at construction).
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Configuration block for a module, if the deployment provides one.
    ///
    /// Modules deserialize this themselves; the host treats the block as an
    /// opaque JSON value.
    pub fn module_config(&self, module: &str) -> Option<&serde_json::Value> {
        self.module_config.get(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_config_is_keyed_by_module_name() {
        let app = Application::new("test", "0.0.0")
            .with_module_config("echo", serde_json::json!({ "path": "/echo" }));

        assert_eq!(
            app.module_config("echo").unwrap()["path"].as_str(),
            Some("/echo")
        );
        assert!(app.module_config("system").is_none());
    }

    #[test]
    fn each_application_gets_a_fresh_instance_id() {
        let a = Application::new("test", "0.0.0");
        let b = Application::new("test", "0.0.0");
        assert_ne!(a.instance_id(), b.instance_id());
    }
}
