//! dashkit-types: Shared data types for the dashkit widget registry.
//!
//! This crate contains pure data types (widget keys, metadata, configs,
//! persisted layouts) shared by the registry, the built-in widgets and the
//! binary. Nothing here renders or performs lookups.

pub mod color;
pub mod config;
pub mod layout;
pub mod widget;
pub mod widget_configs;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorParseError};
pub use config::{from_widget_config, merge_config, to_widget_config, WidgetConfig};
pub use layout::{DashboardLayout, WidgetGeometry, WidgetPlacement, LAYOUT_VERSION};
pub use widget::{WidgetMetadata, WidgetTypeKey};
pub use widget_configs::{GraphWidgetConfig, MAX_GRAPH_HOURS};
