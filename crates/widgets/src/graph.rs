//! Graph widget implementation

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use dashkit_core::{ConfigOption, ConfigSchema, DrawSurface, Widget};
use dashkit_types::{
    from_widget_config, to_widget_config, GraphWidgetConfig, WidgetConfig, WidgetMetadata,
};
use log::warn;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

pub const GRAPH_KEY: &str = "Graph";

const LINE_WIDTH: f64 = 2.0;

/// A single sample of entity history
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Graph widget - displays entity history as a line graph
pub struct GraphWidget {
    id: String,
    name: String,
    config: GraphWidgetConfig,
    points: VecDeque<DataPoint>,
    dirty: AtomicBool,
}

impl GraphWidget {
    pub fn new() -> Self {
        Self {
            id: GRAPH_KEY.to_string(),
            name: "Graph".to_string(),
            config: GraphWidgetConfig::default(),
            points: VecDeque::new(),
            dirty: AtomicBool::new(true),
        }
    }

    /// Registry metadata for the graph widget
    pub fn metadata() -> WidgetMetadata {
        let defaults: WidgetConfig = Self::new()
            .config_schema()
            .options
            .into_iter()
            .map(|option| (option.key, option.default))
            .collect();

        WidgetMetadata::new(
            "Graph",
            "mdi:chart-line",
            "Display entity history as a line graph",
        )
        .configurable(true)
        .requires_entity(true)
        .with_default_config(defaults)
    }

    pub fn typed_config(&self) -> &GraphWidgetConfig {
        &self.config
    }

    /// History currently inside the configured window, oldest first
    pub fn points(&self) -> &VecDeque<DataPoint> {
        &self.points
    }

    /// Insert a sample and drop everything older than the window
    pub fn push_point(&mut self, point: DataPoint) {
        let index = self
            .points
            .partition_point(|p| p.timestamp <= point.timestamp);
        self.points.insert(index, point);
        self.prune();
        self.dirty.store(true, Ordering::Relaxed);
    }

    fn window(&self) -> Duration {
        Duration::hours(i64::from(self.config.hours))
    }

    fn prune(&mut self) {
        let Some(newest) = self.points.back().map(|p| p.timestamp) else {
            return;
        };
        // No cutoff means the window reaches past the earliest representable time
        let Some(cutoff) = newest.checked_sub_signed(self.window()) else {
            return;
        };
        while self.points.front().is_some_and(|p| p.timestamp < cutoff) {
            self.points.pop_front();
        }
    }

    /// Value range to plot, padded when every sample is equal
    fn value_range(&self) -> (f64, f64) {
        let min = self.points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);

        if (max - min).abs() < 0.001 {
            let half_range = if min.abs() > 0.001 { min.abs() * 0.1 } else { 0.5 };
            (min - half_range, max + half_range)
        } else {
            (min, max)
        }
    }
}

impl Default for GraphWidget {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => {
            let secs = n.as_f64()?;
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1_000_000_000.0) as u32;
            DateTime::from_timestamp(whole as i64, nanos)
        }
        _ => None,
    }
}

impl Widget for GraphWidget {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn config_schema(&self) -> ConfigSchema {
        let defaults = GraphWidgetConfig::default();
        ConfigSchema {
            options: vec![
                ConfigOption::new(
                    "hours",
                    "Hours",
                    "How many hours of history to show",
                    "number",
                    Value::from(defaults.hours),
                ),
                ConfigOption::new(
                    "stroke_color",
                    "Line Color",
                    "Color of the graph line",
                    "color",
                    Value::String(defaults.stroke_color.to_hex()),
                ),
                ConfigOption::new(
                    "fill_color",
                    "Fill Color",
                    "Color of the area under the line",
                    "color",
                    Value::String(defaults.fill_color.to_hex()),
                ),
            ],
        }
    }

    fn apply_config(&mut self, config: &WidgetConfig) -> Result<()> {
        let typed: GraphWidgetConfig = from_widget_config(config)?;
        typed.validate()?;
        self.config = typed;
        self.prune();
        self.dirty.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn config(&self) -> WidgetConfig {
        match to_widget_config(&self.config) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to serialize graph config: {}", e);
                WidgetConfig::new()
            }
        }
    }

    fn update_data(&mut self, data: &HashMap<String, Value>) {
        let Some(value) = data.get("value").and_then(Value::as_f64) else {
            return;
        };
        let timestamp = match data.get("timestamp") {
            Some(raw) => match parse_timestamp(raw) {
                Some(ts) => ts,
                None => {
                    warn!("Ignoring graph sample with invalid timestamp {}", raw);
                    return;
                }
            },
            None => Utc::now(),
        };
        self.push_point(DataPoint { timestamp, value });
    }

    fn draw(&self, surface: &mut dyn DrawSurface, width: f64, height: f64) -> Result<()> {
        self.dirty.store(false, Ordering::Relaxed);

        if self.points.len() < 2 || width <= 0.0 || height <= 0.0 {
            return Ok(());
        }

        let (min_val, max_val) = self.value_range();
        let value_range = max_val - min_val;
        let newest = self.points.back().map(|p| p.timestamp).unwrap_or_else(Utc::now);
        let start = newest
            .checked_sub_signed(self.window())
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let window_ms = self.window().num_milliseconds() as f64;

        let line: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|p| {
                let elapsed = (p.timestamp - start).num_milliseconds() as f64;
                let x = (elapsed / window_ms).clamp(0.0, 1.0) * width;
                let y = height - ((p.value - min_val) / value_range) * height;
                (x, y)
            })
            .collect();

        let mut area = line.clone();
        if let (Some(&(first_x, _)), Some(&(last_x, _))) = (line.first(), line.last()) {
            area.push((last_x, height));
            area.push((first_x, height));
        }

        surface.fill_path(&area, self.config.fill_color);
        surface.stroke_path(&line, self.config.stroke_color, LINE_WIDTH);
        Ok(())
    }

    fn needs_redraw(&self) -> bool {
        self.dirty.load(Ordering::Relaxed)
    }
}
