//! Untyped widget configuration maps
//!
//! Widgets exchange settings as `option name -> JSON value` maps, the same
//! shape a persisted layout stores per instance. Each widget kind converts
//! the map into its own typed config when applying it.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Mapping from configuration option name to value
pub type WidgetConfig = HashMap<String, Value>;

/// Overlay an instance's stored settings on top of a widget's defaults.
///
/// Stored values win; defaults fill any key the instance does not set.
/// Keys only present in `overrides` are kept so that settings written by a
/// newer release survive a round trip.
pub fn merge_config(defaults: &WidgetConfig, overrides: &WidgetConfig) -> WidgetConfig {
    let mut merged = defaults.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Flatten a typed config struct into a `WidgetConfig`.
///
/// The struct must serialize to a JSON object.
pub fn to_widget_config<T: Serialize>(config: &T) -> anyhow::Result<WidgetConfig> {
    match serde_json::to_value(config)? {
        Value::Object(map) => Ok(map.into_iter().collect()),
        other => anyhow::bail!("widget config must be an object, got {}", other),
    }
}

/// Parse a `WidgetConfig` into a typed config struct
pub fn from_widget_config<T: DeserializeOwned>(config: &WidgetConfig) -> anyhow::Result<T> {
    let object: serde_json::Map<String, Value> = config
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    Ok(serde_json::from_value(Value::Object(object))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        hours: u32,
        label: String,
    }

    #[test]
    fn test_merge_prefers_stored_values() {
        let defaults: WidgetConfig = [
            ("hours".to_string(), json!(24)),
            ("stroke_color".to_string(), json!("#4fc3f7")),
        ]
        .into_iter()
        .collect();
        let stored: WidgetConfig = [
            ("hours".to_string(), json!(6)),
            ("extra".to_string(), json!(true)),
        ]
        .into_iter()
        .collect();

        let merged = merge_config(&defaults, &stored);
        assert_eq!(merged["hours"], json!(6));
        assert_eq!(merged["stroke_color"], json!("#4fc3f7"));
        assert_eq!(merged["extra"], json!(true));
        // Defaults untouched
        assert_eq!(defaults["hours"], json!(24));
    }

    #[test]
    fn test_typed_conversion() {
        let sample = Sample {
            hours: 3,
            label: "cpu".to_string(),
        };
        let map = to_widget_config(&sample).unwrap();
        assert_eq!(map["hours"], json!(3));

        let back: Sample = from_widget_config(&map).unwrap();
        assert_eq!(back, sample);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(to_widget_config(&42).is_err());
    }
}
