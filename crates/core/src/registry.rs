//! Registry of widget kinds
//!
//! Two co-indexed tables keyed by [`WidgetTypeKey`]: one holding the factory
//! for each widget kind, one holding its [`WidgetMetadata`]. Entries are
//! collected in a [`RegistryBuilder`] and validated once by
//! [`RegistryBuilder::build`]; the resulting [`WidgetRegistry`] is read-only.

use crate::error::{RegistrationDefect, RegistryError};
use crate::widget::BoxedWidget;
use dashkit_types::{WidgetConfig, WidgetMetadata, WidgetTypeKey};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Function that creates a widget instance
pub type WidgetFactory = fn() -> BoxedWidget;

/// Collects widget registrations before the registry is frozen
#[derive(Default)]
pub struct RegistryBuilder {
    implementations: HashMap<WidgetTypeKey, WidgetFactory>,
    metadata: HashMap<WidgetTypeKey, WidgetMetadata>,
    order: Vec<WidgetTypeKey>,
    conflicts: Vec<RegistrationDefect>,
}

impl RegistryBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn track(&mut self, key: &WidgetTypeKey) {
        if !self.order.contains(key) {
            self.order.push(key.clone());
        }
    }

    /// Register the implementation half of a widget kind.
    ///
    /// A repeated registration for the same key keeps the first factory.
    pub fn register_implementation(
        &mut self,
        key: impl Into<WidgetTypeKey>,
        factory: WidgetFactory,
    ) -> &mut Self {
        let key = key.into();
        self.track(&key);
        if self.implementations.contains_key(&key) {
            debug!("Implementation for widget type {} already registered", key);
        } else {
            debug!("Registered implementation for widget type {}", key);
            self.implementations.insert(key, factory);
        }
        self
    }

    /// Register the metadata half of a widget kind.
    ///
    /// Registering identical metadata again is a no-op. Different metadata
    /// for an existing key is recorded as a defect and reported by `build`.
    pub fn register_metadata(
        &mut self,
        key: impl Into<WidgetTypeKey>,
        metadata: WidgetMetadata,
    ) -> &mut Self {
        let key = key.into();
        self.track(&key);
        match self.metadata.get(&key) {
            Some(existing) if *existing == metadata => {
                debug!("Metadata for widget type {} already registered", key);
            }
            Some(_) => {
                warn!("Conflicting metadata registered for widget type {}", key);
                self.conflicts
                    .push(RegistrationDefect::ConflictingMetadata(key));
            }
            None => {
                debug!("Registered metadata for widget type {}", key);
                self.metadata.insert(key, metadata);
            }
        }
        self
    }

    /// Register both halves of a widget kind
    pub fn register(
        &mut self,
        key: impl Into<WidgetTypeKey>,
        factory: WidgetFactory,
        metadata: WidgetMetadata,
    ) -> &mut Self {
        let key = key.into();
        self.register_implementation(key.clone(), factory);
        self.register_metadata(key, metadata)
    }

    /// Validate every registration and freeze the tables.
    ///
    /// Checks, per key in registration order: both tables hold an entry, the
    /// display name is non-empty, the factory's widget reports the same id,
    /// and the default config is accepted by a freshly created widget.
    pub fn build(self) -> Result<WidgetRegistry, RegistryError> {
        if let Some(defect) = self.conflicts.into_iter().next() {
            return Err(defect.into());
        }

        for key in &self.order {
            let factory = self
                .implementations
                .get(key)
                .ok_or_else(|| RegistrationDefect::MissingImplementation(key.clone()))?;
            let metadata = self
                .metadata
                .get(key)
                .ok_or_else(|| RegistrationDefect::MissingMetadata(key.clone()))?;

            if metadata.name.trim().is_empty() {
                return Err(RegistrationDefect::EmptyName(key.clone()).into());
            }

            let mut widget = factory();
            if widget.id() != key.as_str() {
                return Err(RegistrationDefect::IdMismatch {
                    key: key.clone(),
                    id: widget.id().to_string(),
                }
                .into());
            }

            widget
                .apply_config(&metadata.default_config)
                .map_err(|e| RegistrationDefect::InvalidDefaultConfig {
                    key: key.clone(),
                    reason: format!("{:#}", e),
                })?;
        }

        info!("Widget registry built with {} widget types", self.order.len());

        Ok(WidgetRegistry {
            implementations: self.implementations,
            metadata: self.metadata,
            order: self.order,
        })
    }
}

/// Immutable, validated table of widget kinds.
///
/// Every key has exactly one factory and one metadata record. Nothing can be
/// added, removed or changed once built, so a shared reference may be handed
/// to any number of readers.
pub struct WidgetRegistry {
    implementations: HashMap<WidgetTypeKey, WidgetFactory>,
    metadata: HashMap<WidgetTypeKey, WidgetMetadata>,
    order: Vec<WidgetTypeKey>,
}

impl WidgetRegistry {
    /// Start collecting registrations
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up the factory for a widget kind
    pub fn resolve_implementation(&self, key: &str) -> Result<WidgetFactory, RegistryError> {
        self.implementations
            .get(key)
            .copied()
            .ok_or_else(|| RegistryError::UnknownWidgetType(key.into()))
    }

    /// Look up the metadata for a widget kind
    pub fn resolve_metadata(&self, key: &str) -> Result<&WidgetMetadata, RegistryError> {
        self.metadata
            .get(key)
            .ok_or_else(|| RegistryError::UnknownWidgetType(key.into()))
    }

    /// All registered keys in registration order
    pub fn list_registered_types(&self) -> Vec<WidgetTypeKey> {
        self.order.clone()
    }

    /// Fresh, independently owned copy of a widget kind's default config
    pub fn instantiate_default_config(&self, key: &str) -> Result<WidgetConfig, RegistryError> {
        self.resolve_metadata(key)
            .map(|metadata| metadata.default_config.clone())
    }

    /// Create a widget instance with its default config applied
    pub fn create_widget(&self, key: &str) -> Result<BoxedWidget, RegistryError> {
        let factory = self.resolve_implementation(key)?;
        let defaults = self.instantiate_default_config(key)?;
        let mut widget = factory();
        // Defaults were validated against this factory in `build`
        if let Err(e) = widget.apply_config(&defaults) {
            warn!("Default config rejected by widget type {}: {}", key, e);
        }
        Ok(widget)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.implementations.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::surface::DrawSurface;
    use crate::widget::{ConfigSchema, Widget};
    use anyhow::Result;
    use serde_json::{json, Value};

    /// Minimal widget used to exercise the registry
    pub(crate) struct CounterWidget {
        id: &'static str,
        config: WidgetConfig,
    }

    impl Widget for CounterWidget {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            "Counter"
        }

        fn config_schema(&self) -> ConfigSchema {
            ConfigSchema::default()
        }

        fn apply_config(&mut self, config: &WidgetConfig) -> Result<()> {
            if let Some(step) = config.get("step") {
                if !step.is_u64() {
                    anyhow::bail!("step must be a positive integer");
                }
            }
            self.config = config.clone();
            Ok(())
        }

        fn config(&self) -> WidgetConfig {
            self.config.clone()
        }

        fn update_data(&mut self, _data: &HashMap<String, Value>) {}

        fn draw(&self, surface: &mut dyn DrawSurface, _width: f64, _height: f64) -> Result<()> {
            surface.text(0.0, 0.0, "counter", Default::default());
            Ok(())
        }
    }

    pub(crate) fn counter_factory() -> BoxedWidget {
        Box::new(CounterWidget {
            id: "Counter",
            config: WidgetConfig::new(),
        })
    }

    fn misnamed_factory() -> BoxedWidget {
        Box::new(CounterWidget {
            id: "Other",
            config: WidgetConfig::new(),
        })
    }

    pub(crate) fn counter_metadata() -> WidgetMetadata {
        WidgetMetadata::new("Counter", "mdi:counter", "Counts things")
            .configurable(true)
            .with_default_config([("step".to_string(), json!(1))].into_iter().collect())
    }

    pub(crate) fn counter_registry() -> WidgetRegistry {
        let mut builder = RegistryBuilder::new();
        builder.register("Counter", counter_factory, counter_metadata());
        builder.build().unwrap()
    }

    #[test]
    fn test_resolve_registered_key() {
        let registry = counter_registry();
        let factory = registry.resolve_implementation("Counter").unwrap();
        assert_eq!(factory().id(), "Counter");
        assert_eq!(registry.resolve_metadata("Counter").unwrap().name, "Counter");
        assert!(registry.contains("Counter"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_key_fails_both_lookups() {
        let registry = counter_registry();
        assert!(matches!(
            registry.resolve_implementation("Heatmap"),
            Err(RegistryError::UnknownWidgetType(ref k)) if k == "Heatmap"
        ));
        assert_eq!(
            registry.resolve_metadata("Heatmap").unwrap_err(),
            RegistryError::UnknownWidgetType("Heatmap".into())
        );
        assert!(registry
            .instantiate_default_config("Heatmap")
            .unwrap_err()
            .is_unknown_widget_type());
        assert!(registry.create_widget("Heatmap").is_err());
    }

    #[test]
    fn test_listing_keeps_registration_order() {
        fn second() -> BoxedWidget {
            Box::new(CounterWidget {
                id: "Second",
                config: WidgetConfig::new(),
            })
        }

        let mut builder = RegistryBuilder::new();
        builder
            .register("Second", second, WidgetMetadata::new("Second", "mdi:two", ""))
            .register("Counter", counter_factory, counter_metadata());
        let registry = builder.build().unwrap();

        let keys = registry.list_registered_types();
        assert_eq!(keys, vec![WidgetTypeKey::new("Second"), WidgetTypeKey::new("Counter")]);
        assert_eq!(keys, registry.list_registered_types());
    }

    #[test]
    fn test_default_config_is_copied() {
        let registry = counter_registry();
        let mut first = registry.instantiate_default_config("Counter").unwrap();
        let second = registry.instantiate_default_config("Counter").unwrap();
        assert_eq!(first, second);

        first.insert("step".to_string(), json!(99));
        first.insert("label".to_string(), json!("mine"));

        assert_eq!(second["step"], json!(1));
        let fresh = registry.instantiate_default_config("Counter").unwrap();
        assert_eq!(fresh["step"], json!(1));
        assert!(!fresh.contains_key("label"));
    }

    #[test]
    fn test_create_widget_applies_defaults() {
        let registry = counter_registry();
        let widget = registry.create_widget("Counter").unwrap();
        assert_eq!(widget.config()["step"], json!(1));
    }

    #[test]
    fn test_missing_metadata_is_a_defect() {
        let mut builder = RegistryBuilder::new();
        builder.register_implementation("Counter", counter_factory);
        assert_eq!(
            builder.build().err(),
            Some(RegistrationDefect::MissingMetadata("Counter".into()).into())
        );
    }

    #[test]
    fn test_missing_implementation_is_a_defect() {
        let mut builder = RegistryBuilder::new();
        builder.register_metadata("Counter", counter_metadata());
        assert_eq!(
            builder.build().err(),
            Some(RegistrationDefect::MissingImplementation("Counter".into()).into())
        );
    }

    #[test]
    fn test_identical_reregistration_is_idempotent() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("Counter", counter_factory, counter_metadata())
            .register("Counter", counter_factory, counter_metadata());
        let registry = builder.build().unwrap();
        assert_eq!(registry.list_registered_types().len(), 1);
    }

    #[test]
    fn test_conflicting_reregistration_is_a_defect() {
        let mut builder = RegistryBuilder::new();
        builder
            .register("Counter", counter_factory, counter_metadata())
            .register(
                "Counter",
                counter_factory,
                counter_metadata().requires_entity(true),
            );
        assert_eq!(
            builder.build().err(),
            Some(RegistrationDefect::ConflictingMetadata("Counter".into()).into())
        );
    }

    #[test]
    fn test_empty_name_is_a_defect() {
        let mut builder = RegistryBuilder::new();
        builder.register(
            "Counter",
            counter_factory,
            WidgetMetadata::new("  ", "mdi:counter", ""),
        );
        assert_eq!(
            builder.build().err(),
            Some(RegistrationDefect::EmptyName("Counter".into()).into())
        );
    }

    #[test]
    fn test_factory_id_must_match_key() {
        let mut builder = RegistryBuilder::new();
        builder.register("Counter", misnamed_factory, counter_metadata());
        assert!(matches!(
            builder.build(),
            Err(RegistryError::RegistrationDefect(RegistrationDefect::IdMismatch { .. }))
        ));
    }

    #[test]
    fn test_invalid_defaults_are_a_defect() {
        let metadata = counter_metadata()
            .with_default_config([("step".to_string(), json!("fast"))].into_iter().collect());
        let mut builder = RegistryBuilder::new();
        builder.register("Counter", counter_factory, metadata);
        assert!(matches!(
            builder.build(),
            Err(RegistryError::RegistrationDefect(
                RegistrationDefect::InvalidDefaultConfig { .. }
            ))
        ));
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build().unwrap();
        assert!(registry.is_empty());
        assert!(registry.list_registered_types().is_empty());
    }
}
