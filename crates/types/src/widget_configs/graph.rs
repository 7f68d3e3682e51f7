//! Graph widget configuration types

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Configuration for the line graph widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphWidgetConfig {
    /// How many hours of history to show
    #[serde(default = "default_hours")]
    pub hours: u32,
    /// Line color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,
    /// Area fill color under the line
    #[serde(default = "default_fill_color")]
    pub fill_color: Color,
}

/// Longest history window accepted, one hundred years
pub const MAX_GRAPH_HOURS: u32 = 24 * 365 * 100;

fn default_hours() -> u32 {
    24
}

fn default_stroke_color() -> Color {
    Color::from_rgba8(0x4f, 0xc3, 0xf7, 0xff)
}

fn default_fill_color() -> Color {
    Color::from_rgba8(0x4f, 0xc3, 0xf7, 0x40)
}

impl GraphWidgetConfig {
    /// Reject values that cannot be rendered
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.hours == 0 {
            anyhow::bail!("hours must be at least 1");
        }
        if self.hours > MAX_GRAPH_HOURS {
            anyhow::bail!("hours must be at most {}", MAX_GRAPH_HOURS);
        }
        Ok(())
    }
}

impl Default for GraphWidgetConfig {
    fn default() -> Self {
        Self {
            hours: default_hours(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_serializes_to_hex_colors() {
        let value = serde_json::to_value(GraphWidgetConfig::default()).unwrap();
        assert_eq!(
            value,
            json!({"hours": 24, "stroke_color": "#4fc3f7", "fill_color": "#4fc3f740"})
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: GraphWidgetConfig = serde_json::from_value(json!({"hours": 6})).unwrap();
        assert_eq!(config.hours, 6);
        assert_eq!(config.stroke_color, GraphWidgetConfig::default().stroke_color);
    }

    #[test]
    fn test_validate_rejects_zero_hours() {
        let config = GraphWidgetConfig {
            hours: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(GraphWidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_oversized_hours() {
        let mut config = GraphWidgetConfig {
            hours: u32::MAX,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.hours = MAX_GRAPH_HOURS;
        assert!(config.validate().is_ok());
        config.hours = MAX_GRAPH_HOURS + 1;
        assert!(config.validate().is_err());
    }
}
