//! dashkit-widgets: Built-in widget implementations.
//!
//! Each widget kind lives in its own module and contributes one
//! registration to [`register_all`].

mod graph;

pub use graph::{DataPoint, GraphWidget, GRAPH_KEY};

use dashkit_core::{BoxedWidget, RegistryBuilder};

/// Register all built-in widgets with a registry builder
pub fn register_all(builder: &mut RegistryBuilder) {
    // Register graph widget
    builder.register(
        GRAPH_KEY,
        || -> BoxedWidget { Box::new(GraphWidget::new()) },
        GraphWidget::metadata(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashkit_core::WidgetRegistry;

    #[test]
    fn test_builtins_pass_registry_validation() {
        let mut builder = WidgetRegistry::builder();
        register_all(&mut builder);
        let registry = builder.build().unwrap();
        assert!(registry.contains(GRAPH_KEY));
    }
}
