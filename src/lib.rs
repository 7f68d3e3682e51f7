//! dashkit: widget registry and metadata contract for dashboard builders
//!
//! This library ties the workspace together:
//! - `registry`: the process-wide registry of built-in widgets
//! - `config`: application configuration and default file locations
//!
//! The registry types themselves live in `dashkit-core` and the data types
//! in `dashkit-types`; both are re-exported here.

pub mod config;
pub mod registry;

// Re-export commonly used types
pub use config::AppConfig;
pub use dashkit_core::{
    assemble_layout, BoxedWidget, LayoutSlot, PlaceholderReason, RegistryError, Widget,
    WidgetRegistry,
};
pub use dashkit_types::{
    DashboardLayout, WidgetConfig, WidgetGeometry, WidgetMetadata, WidgetPlacement, WidgetTypeKey,
};
pub use registry::{builtin_registry, global_registry, try_init_global};
