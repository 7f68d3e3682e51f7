//! Widget trait and related types

use crate::surface::DrawSurface;
use anyhow::Result;
use dashkit_types::WidgetConfig;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Configuration schema entry for a widget option
#[derive(Debug, Clone, Serialize)]
pub struct ConfigOption {
    /// Option key
    pub key: String,
    /// Human-readable name
    pub name: String,
    /// Description
    pub description: String,
    /// Value type (e.g., "color", "number", "string", "boolean")
    pub value_type: String,
    /// Default value
    pub default: Value,
}

impl ConfigOption {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        value_type: impl Into<String>,
        default: Value,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            value_type: value_type.into(),
            default,
        }
    }
}

/// Configuration schema for a widget
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSchema {
    /// Available configuration options
    pub options: Vec<ConfigOption>,
}

impl ConfigSchema {
    pub fn option(&self, key: &str) -> Option<&ConfigOption> {
        self.options.iter().find(|o| o.key == key)
    }
}

/// Trait for all dashboard widgets
///
/// A widget owns its configuration and whatever data it has been fed, and
/// draws itself onto a [`DrawSurface`]. The registry hands out factories
/// producing fresh boxed widgets, one per placed instance.
pub trait Widget: Send + Sync {
    /// Registry key for this widget kind
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Describe the options `apply_config` understands
    fn config_schema(&self) -> ConfigSchema;

    /// Apply configuration. Unknown keys are ignored; invalid values are an error.
    fn apply_config(&mut self, config: &WidgetConfig) -> Result<()>;

    /// Current configuration as an option map
    fn config(&self) -> WidgetConfig;

    /// Feed new data from the bound entity
    fn update_data(&mut self, data: &HashMap<String, Value>);

    /// Render into an area of `width` x `height`
    fn draw(&self, surface: &mut dyn DrawSurface, width: f64, height: f64) -> Result<()>;

    /// Check if the widget needs to be redrawn
    fn needs_redraw(&self) -> bool {
        true
    }
}

/// Type-erased widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;
