//! Assemble a persisted layout into live widgets.
//!
//! Every placement becomes exactly one [`LayoutSlot`]. A placement that
//! cannot be instantiated gets a [`PlaceholderWidget`]; its siblings are
//! unaffected.

use crate::placeholder::{PlaceholderReason, PlaceholderWidget};
use crate::registry::WidgetRegistry;
use crate::widget::{BoxedWidget, Widget};
use dashkit_types::{
    merge_config, DashboardLayout, WidgetGeometry, WidgetPlacement, WidgetTypeKey,
};
use log::{debug, warn};

/// What occupies a slot
pub enum SlotContent {
    Widget(BoxedWidget),
    Placeholder(PlaceholderWidget),
}

/// A placement paired with the widget that renders it
pub struct LayoutSlot {
    pub placement_id: String,
    pub widget_type: WidgetTypeKey,
    pub geometry: WidgetGeometry,
    pub entity: Option<String>,
    pub content: SlotContent,
}

impl LayoutSlot {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.content, SlotContent::Placeholder(_))
    }

    pub fn placeholder_reason(&self) -> Option<&PlaceholderReason> {
        match &self.content {
            SlotContent::Placeholder(p) => Some(p.reason()),
            SlotContent::Widget(_) => None,
        }
    }

    /// The widget to draw, placeholder or not
    pub fn widget(&self) -> &dyn Widget {
        match &self.content {
            SlotContent::Widget(w) => w.as_ref(),
            SlotContent::Placeholder(p) => p,
        }
    }

    pub fn widget_mut(&mut self) -> &mut dyn Widget {
        match &mut self.content {
            SlotContent::Widget(w) => w.as_mut(),
            SlotContent::Placeholder(p) => p,
        }
    }
}

/// Build one slot per placement, in layout order
pub fn assemble_layout(registry: &WidgetRegistry, layout: &DashboardLayout) -> Vec<LayoutSlot> {
    layout
        .widgets
        .iter()
        .map(|placement| assemble_placement(registry, placement))
        .collect()
}

/// Resolve a single placement, falling back to a placeholder on any failure
pub fn assemble_placement(registry: &WidgetRegistry, placement: &WidgetPlacement) -> LayoutSlot {
    let content = match instantiate(registry, placement) {
        Ok(widget) => SlotContent::Widget(widget),
        Err(reason) => {
            warn!("Placeholder for widget {}: {}", placement.id, reason);
            SlotContent::Placeholder(PlaceholderWidget::new(reason))
        }
    };

    LayoutSlot {
        placement_id: placement.id.clone(),
        widget_type: placement.widget_type.clone(),
        geometry: placement.geometry,
        entity: placement.entity.clone(),
        content,
    }
}

fn instantiate(
    registry: &WidgetRegistry,
    placement: &WidgetPlacement,
) -> Result<BoxedWidget, PlaceholderReason> {
    let key = &placement.widget_type;
    let unsupported = |_| PlaceholderReason::UnsupportedWidget(key.clone());

    let factory = registry
        .resolve_implementation(key.as_str())
        .map_err(unsupported)?;
    let metadata = registry.resolve_metadata(key.as_str()).map_err(unsupported)?;

    if metadata.requires_entity && placement.entity.is_none() {
        return Err(PlaceholderReason::MissingEntity(key.clone()));
    }

    let config = merge_config(&metadata.default_config, &placement.config);
    let mut widget = factory();
    widget
        .apply_config(&config)
        .map_err(|e| PlaceholderReason::InvalidConfig {
            key: key.clone(),
            reason: format!("{:#}", e),
        })?;

    debug!("Instantiated {} widget for placement {}", key, placement.id);
    Ok(widget)
}
