//! The render core: lookup, resolve, cache-aside, normalize.

use std::sync::Arc;

use tracing::debug;

use crate::cache::CacheStore;
use crate::config::CacheSettings;
use crate::error::WidgetError;
use crate::params::{Params, cache_key};
use crate::resolver::{NullResolver, WidgetResolver};
use crate::widget::{Renderable, WidgetRef};

use super::WidgetRegistry;

/// Widget manager: the registry plus the cache-aside render pipeline.
///
/// Holds the alias registry, the application's cache store and the cache
/// settings read at render time. Cheap to clone; clones share the registry
/// and store.
///
/// No mutual exclusion is imposed across concurrent renders: two misses for
/// the same key may both render and both write, last write wins on the
/// store. This is deliberate; rendering is assumed cheap enough that
/// single-flight coordination is not worth its cost here.
#[derive(Clone)]
pub struct WidgetManager {
    registry: WidgetRegistry,
    resolver: Arc<dyn WidgetResolver>,
    store: Arc<dyn CacheStore>,
    settings: CacheSettings,
}

impl WidgetManager {
    /// Create a manager with no resolver for named references.
    ///
    /// Named references rendered through this manager always fail as
    /// invalid widgets; use [`WidgetManager::with_resolver`] when seeding
    /// the registry from configuration.
    pub fn new(store: Arc<dyn CacheStore>, settings: CacheSettings) -> Self {
        Self::with_resolver(store, settings, Arc::new(NullResolver))
    }

    /// Create a manager that resolves named references through `resolver`.
    pub fn with_resolver(
        store: Arc<dyn CacheStore>,
        settings: CacheSettings,
        resolver: Arc<dyn WidgetResolver>,
    ) -> Self {
        Self {
            registry: WidgetRegistry::new(),
            resolver,
            store,
            settings,
        }
    }

    /// The underlying alias registry.
    pub fn registry(&self) -> &WidgetRegistry {
        &self.registry
    }

    /// The cache settings this manager renders with.
    pub fn settings(&self) -> &CacheSettings {
        &self.settings
    }

    /// Register a widget under an alias.
    ///
    /// Performs no capability check; a later registration for the same
    /// alias overwrites the earlier one.
    pub fn register_widget(&self, alias: impl Into<String>, widget_ref: WidgetRef) {
        self.registry.insert(alias, widget_ref);
    }

    /// Render a widget with empty parameters.
    pub fn render_default(&self, alias: &str) -> Result<String, WidgetError> {
        self.render(alias, Params::new())
    }

    /// Render the widget registered under `alias`.
    ///
    /// Consults the cache store first when caching is enabled; on a miss,
    /// invokes the widget, normalizes its output to a string and stores it
    /// under a key derived from the alias and the canonical form of
    /// `params`. Hit or miss, the caller sees the same normalized shape.
    pub fn render(&self, alias: &str, params: Params) -> Result<String, WidgetError> {
        let widget_ref = self.registry.get(alias).ok_or_else(|| WidgetError::NotFound {
            alias: alias.to_string(),
        })?;

        let widget: Arc<dyn Renderable> = match widget_ref {
            WidgetRef::Instance(widget) => widget,
            WidgetRef::Factory(factory) => factory.make(),
            WidgetRef::Named(name) => {
                self.resolver
                    .resolve(&name)
                    .ok_or_else(|| WidgetError::InvalidWidget {
                        alias: alias.to_string(),
                    })?
            }
        };

        let key = cache_key(alias, &params);

        if self.settings.enabled {
            if let Some(cached) = self.store.get(&key) {
                debug!("Cache hit for widget '{}' ({})", alias, key);
                return Ok(cached);
            }
        }

        let output = widget.render(&params).normalize();

        if self.settings.enabled {
            debug!("Caching output for widget '{}' ({})", alias, key);
            self.store.put(&key, output.clone(), self.settings.ttl);
        }

        Ok(output)
    }
}

impl std::fmt::Debug for WidgetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetManager")
            .field("registry", &self.registry)
            .field("cache_enabled", &self.settings.enabled)
            .field("cache_ttl", &self.settings.ttl)
            .finish()
    }
}
