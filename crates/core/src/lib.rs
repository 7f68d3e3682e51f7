//! dashkit-core: Core traits and widget registry for dashkit.
//!
//! This crate contains the `Widget` trait, the co-indexed `WidgetRegistry`,
//! the backend-neutral `DrawSurface`, and the layout assembly used by
//! dashboard renderers.

mod error;
pub mod layout;
mod placeholder;
mod registry;
pub mod surface;
mod widget;

pub use error::{RegistrationDefect, RegistryError};
pub use layout::{assemble_layout, assemble_placement, LayoutSlot, SlotContent};
pub use placeholder::{PlaceholderReason, PlaceholderWidget, PLACEHOLDER_ID, PLACEHOLDER_TITLE};
pub use registry::{RegistryBuilder, WidgetFactory, WidgetRegistry};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use widget::{BoxedWidget, ConfigOption, ConfigSchema, Widget};

// Re-export types used in trait signatures for convenience
pub use dashkit_types::{WidgetConfig, WidgetMetadata, WidgetTypeKey};
