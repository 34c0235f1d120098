//! Module loader.
//!
//! The one place that knows the concrete module types. The order modules are
//! pushed here is the load order, and therefore the binding order the
//! registry preserves; it is fixed in code, so it is stable across restarts.
//! Deployment configuration only toggles membership of optional modules,
//! never order.

use gatehouse_binding::{BindingRegistry, ServiceModule};

use crate::config::HostConfig;

/// Assemble the ordered module list for this deployment.
pub fn load_modules(config: &HostConfig) -> BindingRegistry {
    let mut modules: Vec<Box<dyn ServiceModule>> = Vec::new();

    // Always present, always first: health must be up before anything else.
    modules.push(Box::new(gatehouse_system::SystemModule::new()));

    // Optional modules, opted in by the presence of their config block.
    if config.modules.contains_key(gatehouse_echo::MODULE_ID.as_str()) {
        modules.push(Box::new(gatehouse_echo::EchoModule::new()));
    }

    BindingRegistry::new(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_core::ModuleId;

    #[test]
    fn default_deployment_loads_only_the_system_module() {
        let registry = load_modules(&HostConfig::default());
        assert_eq!(registry.module_ids(), vec![ModuleId::new("system")]);
    }

    #[test]
    fn echo_is_loaded_after_system_when_configured() {
        let mut config = HostConfig::default();
        config
            .modules
            .insert("echo".to_string(), serde_json::json!({ "path": "/echo" }));

        let registry = load_modules(&config);
        assert_eq!(
            registry.module_ids(),
            vec![ModuleId::new("system"), ModuleId::new("echo")]
        );
    }
}
