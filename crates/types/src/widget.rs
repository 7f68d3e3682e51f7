//! Widget identity and descriptive metadata

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::config::WidgetConfig;

/// Unique, version-stable identifier for a widget kind (e.g. `"Graph"`).
///
/// Persisted layouts store this key, so it must never be renamed once a
/// widget kind has shipped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetTypeKey(String);

impl WidgetTypeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WidgetTypeKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WidgetTypeKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WidgetTypeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for WidgetTypeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl PartialEq<str> for WidgetTypeKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WidgetTypeKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for WidgetTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Describes a widget kind to tooling and to the configuration UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetMetadata {
    /// Display label, never empty
    pub name: String,
    /// Namespaced icon identifier (`"<pack>:<icon-name>"`), opaque to the registry
    pub icon: String,
    /// Short human-readable summary
    pub description: String,
    /// Whether the configuration UI offers a settings editor
    pub configurable: bool,
    /// Whether the widget must be bound to an entity before it renders meaningfully
    pub requires_entity: bool,
    /// Valid starting configuration for a new instance
    pub default_config: WidgetConfig,
}

impl WidgetMetadata {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            description: description.into(),
            configurable: false,
            requires_entity: false,
            default_config: WidgetConfig::new(),
        }
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    pub fn requires_entity(mut self, requires_entity: bool) -> Self {
        self.requires_entity = requires_entity;
        self
    }

    pub fn with_default_config(mut self, default_config: WidgetConfig) -> Self {
        self.default_config = default_config;
        self
    }
}
