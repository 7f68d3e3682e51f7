//! Typed configuration structs for the built-in widget kinds

pub mod graph;

pub use graph::{GraphWidgetConfig, MAX_GRAPH_HOURS};
