//! Registry error types

use dashkit_types::WidgetTypeKey;

/// Errors returned by widget registry lookups and construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The key has no registered widget. Recoverable: callers render a
    /// placeholder for that widget and carry on with the rest.
    #[error("unknown widget type: {0}")]
    UnknownWidgetType(WidgetTypeKey),

    /// The registry tables are inconsistent. Only produced while building.
    #[error("widget registration defect: {0}")]
    RegistrationDefect(#[from] RegistrationDefect),
}

impl RegistryError {
    pub fn is_unknown_widget_type(&self) -> bool {
        matches!(self, RegistryError::UnknownWidgetType(_))
    }
}

/// Invariant violations detected when the registry is built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationDefect {
    #[error("widget type {0} has an implementation but no metadata")]
    MissingMetadata(WidgetTypeKey),

    #[error("widget type {0} has metadata but no implementation")]
    MissingImplementation(WidgetTypeKey),

    #[error("widget type {0} has an empty display name")]
    EmptyName(WidgetTypeKey),

    #[error("widget type {0} was registered twice with different metadata")]
    ConflictingMetadata(WidgetTypeKey),

    #[error("widget type {key} is implemented by a widget reporting id {id:?}")]
    IdMismatch { key: WidgetTypeKey, id: String },

    #[error("default config for widget type {key} is invalid: {reason}")]
    InvalidDefaultConfig { key: WidgetTypeKey, reason: String },
}
