//! Module identity.

/// Stable identity of a service module.
///
/// Module ids are declared as compile-time constants by the module crates
/// themselves (`pub const MODULE_ID: ModuleId = ModuleId::new("system");`)
/// and double as the key for per-module configuration blocks and for
/// diagnostics when a binding fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(&'static str);

impl ModuleId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_id_displays_its_name() {
        const ID: ModuleId = ModuleId::new("inventory");
        assert_eq!(ID.to_string(), "inventory");
        assert_eq!(ID.as_str(), "inventory");
    }

    #[test]
    fn module_ids_compare_by_name() {
        assert_eq!(ModuleId::new("a"), ModuleId::new("a"));
        assert_ne!(ModuleId::new("a"), ModuleId::new("b"));
    }
}
