//! Persisted dashboard layout records.
//!
//! A layout is a list of widget placements. Each placement names its widget
//! kind by `WidgetTypeKey` and stores only the settings the user changed;
//! the registry's defaults fill in the rest when the layout is assembled.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::WidgetConfig;
use crate::widget::WidgetTypeKey;

/// Current layout format version
pub const LAYOUT_VERSION: u32 = 1;

/// Position and size of a widget in the dashboard grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for WidgetGeometry {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 1,
            height: 1,
        }
    }
}

/// One widget instance placed on a dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetPlacement {
    /// Unique instance id
    pub id: String,
    /// Widget kind, a key into the widget registry
    pub widget_type: WidgetTypeKey,
    #[serde(default)]
    pub geometry: WidgetGeometry,
    /// Bound data-source entity, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Settings overriding the widget's defaults
    #[serde(default)]
    pub config: WidgetConfig,
}

impl WidgetPlacement {
    /// Create a placement with a freshly generated id and no overrides
    pub fn new(widget_type: impl Into<WidgetTypeKey>, geometry: WidgetGeometry) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            widget_type: widget_type.into(),
            geometry,
            entity: None,
            config: WidgetConfig::new(),
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }
}

/// A complete dashboard layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub widgets: Vec<WidgetPlacement>,
}

fn default_version() -> u32 {
    LAYOUT_VERSION
}

impl DashboardLayout {
    pub fn new(widgets: Vec<WidgetPlacement>) -> Self {
        Self {
            version: LAYOUT_VERSION,
            widgets,
        }
    }

    /// Load a layout from a JSON file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let layout: Self = serde_json::from_str(&content)?;
        if layout.version > LAYOUT_VERSION {
            log::warn!(
                "Layout {:?} has version {}, newer than supported {}",
                path,
                layout.version,
                LAYOUT_VERSION
            );
        }
        Ok(layout)
    }

    /// Save the layout as pretty-printed JSON, creating parent directories
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_placement_ids_are_unique() {
        let a = WidgetPlacement::new("Graph", WidgetGeometry::default());
        let b = WidgetPlacement::new("Graph", WidgetGeometry::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_layout_parses_minimal_json() {
        let layout: DashboardLayout = serde_json::from_value(json!({
            "widgets": [
                {"id": "w1", "widget_type": "Graph", "entity": "sensor.temp",
                 "config": {"hours": 6}},
                {"id": "w2", "widget_type": "Heatmap"}
            ]
        }))
        .unwrap();

        assert_eq!(layout.version, LAYOUT_VERSION);
        assert_eq!(layout.widgets.len(), 2);
        assert_eq!(layout.widgets[0].widget_type, "Graph");
        assert_eq!(layout.widgets[0].config["hours"], json!(6));
        assert_eq!(layout.widgets[1].geometry, WidgetGeometry::default());
        assert!(layout.widgets[1].entity.is_none());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("dashkit-layout-{}", uuid::Uuid::new_v4()));
        let path = dir.join("layout.json");

        let layout = DashboardLayout::new(vec![WidgetPlacement::new(
            "Graph",
            WidgetGeometry {
                x: 1,
                y: 2,
                width: 3,
                height: 2,
            },
        )
        .with_entity("sensor.power")]);
        layout.save_to_path(&path).unwrap();

        let loaded = DashboardLayout::load_from_path(&path).unwrap();
        assert_eq!(loaded, layout);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
