//! Deployment configuration for the host process.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{path}`")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file `{path}`")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Deployment configuration.
///
/// Loaded from an optional JSON file; every field has a sensible default so
/// a bare process comes up serving the system module only.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Human-facing deployment name, surfaced on `/system/info`.
    pub server_name: String,

    /// Listen address for the HTTP server.
    pub bind_addr: String,

    /// Per-module configuration blocks, keyed by module id. Presence of a
    /// key also opts optional modules into this deployment.
    pub modules: BTreeMap<String, serde_json::Value>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            server_name: "gatehouse".to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            modules: BTreeMap::new(),
        }
    }
}

impl HostConfig {
    /// Load from the file named by `GATEHOUSE_CONFIG`, or defaults if unset.
    /// `GATEHOUSE_BIND` overrides the bind address either way.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("GATEHOUSE_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("GATEHOUSE_BIND") {
            config.bind_addr = addr;
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_no_optional_modules() {
        let config = HostConfig::default();
        assert_eq!(config.server_name, "gatehouse");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.modules.is_empty());
    }

    #[test]
    fn parses_a_full_config_document() {
        let config: HostConfig = serde_json::from_str(
            r#"{
                "server_name": "staging",
                "bind_addr": "127.0.0.1:9000",
                "modules": { "echo": { "path": "/echo" } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.server_name, "staging");
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert!(config.modules.contains_key("echo"));
    }

    #[test]
    fn unknown_top_level_fields_are_rejected() {
        let result: Result<HostConfig, _> =
            serde_json::from_str(r#"{ "server_nam": "typo" }"#);
        assert!(result.is_err());
    }
}
