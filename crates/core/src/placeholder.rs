//! Stand-in widget for placements that cannot be instantiated

use crate::surface::DrawSurface;
use crate::widget::{ConfigSchema, Widget};
use anyhow::Result;
use dashkit_types::{Color, WidgetConfig, WidgetTypeKey};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub const PLACEHOLDER_ID: &str = "unsupported";
pub const PLACEHOLDER_TITLE: &str = "Unsupported widget";

/// Why a placement is rendered as a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// The layout references a widget kind this build does not know
    UnsupportedWidget(WidgetTypeKey),
    /// The widget kind needs a bound entity and the placement has none
    MissingEntity(WidgetTypeKey),
    /// The stored config was rejected by the widget
    InvalidConfig { key: WidgetTypeKey, reason: String },
}

impl fmt::Display for PlaceholderReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderReason::UnsupportedWidget(key) => {
                write!(f, "unknown widget type \"{}\"", key)
            }
            PlaceholderReason::MissingEntity(key) => {
                write!(f, "{} needs an entity", key)
            }
            PlaceholderReason::InvalidConfig { key, reason } => {
                write!(f, "invalid {} config: {}", key, reason)
            }
        }
    }
}

/// Clearly marked "unsupported widget" box showing the failure reason
pub struct PlaceholderWidget {
    reason: PlaceholderReason,
}

impl PlaceholderWidget {
    pub fn new(reason: PlaceholderReason) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> &PlaceholderReason {
        &self.reason
    }
}

impl Widget for PlaceholderWidget {
    fn id(&self) -> &str {
        PLACEHOLDER_ID
    }

    fn name(&self) -> &str {
        PLACEHOLDER_TITLE
    }

    fn config_schema(&self) -> ConfigSchema {
        ConfigSchema::default()
    }

    fn apply_config(&mut self, _config: &WidgetConfig) -> Result<()> {
        Ok(())
    }

    fn config(&self) -> WidgetConfig {
        WidgetConfig::new()
    }

    fn update_data(&mut self, _data: &HashMap<String, Value>) {}

    fn draw(&self, surface: &mut dyn DrawSurface, width: f64, height: f64) -> Result<()> {
        let warning = Color::from_rgba8(0xe5, 0x39, 0x35, 0xff);

        surface.fill_rect(0.0, 0.0, width, height, Color::from_rgba8(0xe5, 0x39, 0x35, 0x26));
        let (inner_w, inner_h) = ((width - 1.0).max(0.0), (height - 1.0).max(0.0));
        surface.stroke_rect(0.5, 0.5, inner_w, inner_h, warning, 1.0);
        surface.text(8.0, 20.0, PLACEHOLDER_TITLE, warning);
        surface.text(8.0, 38.0, &self.reason.to_string(), Color::new(0.8, 0.8, 0.8, 1.0));
        Ok(())
    }

    fn needs_redraw(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_placeholder_draws_marker_and_reason() {
        let widget = PlaceholderWidget::new(PlaceholderReason::UnsupportedWidget("Heatmap".into()));
        let mut surface = RecordingSurface::new();
        widget.draw(&mut surface, 200.0, 100.0).unwrap();

        let texts = surface.texts();
        assert_eq!(texts[0], PLACEHOLDER_TITLE);
        assert!(texts[1].contains("Heatmap"));
        assert!(!widget.needs_redraw());
    }
}
