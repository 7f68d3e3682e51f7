//! Process-wide widget registry
//!
//! Built once from the built-in widgets and never modified afterwards.

use dashkit_core::{RegistryError, WidgetRegistry};
use once_cell::sync::OnceCell;

static GLOBAL_REGISTRY: OnceCell<WidgetRegistry> = OnceCell::new();

/// Build a registry containing every built-in widget
pub fn builtin_registry() -> Result<WidgetRegistry, RegistryError> {
    let mut builder = WidgetRegistry::builder();
    dashkit_widgets::register_all(&mut builder);
    builder.build()
}

/// Initialize the global registry, reporting registration defects.
///
/// Registration finishes before the reference is published, so every caller
/// sees the complete table. Later calls return the same registry.
pub fn try_init_global() -> Result<&'static WidgetRegistry, RegistryError> {
    GLOBAL_REGISTRY.get_or_try_init(builtin_registry)
}

/// Get the global registry
///
/// # Panics
/// Panics on first use if the built-in registrations are inconsistent. That
/// is a packaging defect, so it fails before any dashboard is rendered
/// rather than on an individual lookup.
pub fn global_registry() -> &'static WidgetRegistry {
    match try_init_global() {
        Ok(registry) => registry,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_registry_is_shared() {
        let a = global_registry() as *const WidgetRegistry;
        let b = try_init_global().unwrap() as *const WidgetRegistry;
        assert_eq!(a, b);
        assert!(global_registry().contains("Graph"));
    }
}
