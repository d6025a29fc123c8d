//! The shared alias -> widget-reference map.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::widget::WidgetRef;

/// Registry mapping widget aliases to their references.
///
/// Cheap to clone (clones share the same map). Expected write pattern:
/// populated during application startup, read-only during request handling.
/// Re-registering an alias overwrites the earlier entry; there is no
/// duplicate detection and no deregistration.
#[derive(Clone, Default)]
pub struct WidgetRegistry {
    widgets: Arc<RwLock<HashMap<String, WidgetRef>>>,
}

impl WidgetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for an alias.
    pub fn insert(&self, alias: impl Into<String>, widget_ref: WidgetRef) {
        let alias = alias.into();
        debug!("Registering widget '{}' as {:?}", alias, widget_ref);
        self.widgets.write().insert(alias, widget_ref);
    }

    /// Look up the reference registered for an alias.
    pub fn get(&self, alias: &str) -> Option<WidgetRef> {
        self.widgets.read().get(alias).cloned()
    }

    /// Whether an alias is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.widgets.read().contains_key(alias)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.widgets.read().len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.widgets.read().is_empty()
    }

    /// All registered aliases.
    pub fn aliases(&self) -> Vec<String> {
        self.widgets.read().keys().cloned().collect()
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widgets = self.widgets.read();
        f.debug_struct("WidgetRegistry")
            .field("widget_count", &widgets.len())
            .field("aliases", &widgets.keys().collect::<Vec<_>>())
            .finish()
    }
}
