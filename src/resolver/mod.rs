//! Instance resolution for named widget references.
//!
//! Statically registered widgets carry their render capability in the type
//! system. Named references (seeded from configuration or discovered module
//! files) go through a [`WidgetResolver`] instead - the application's
//! dependency-injection seam. A name the resolver cannot turn into a
//! renderable surfaces as
//! [`WidgetError::InvalidWidget`](crate::WidgetError::InvalidWidget) at
//! render time.

use std::collections::HashMap;
use std::sync::Arc;

use crate::widget::{Renderable, WidgetFactory};

/// Resolves a symbolic widget name to a renderable instance.
pub trait WidgetResolver: Send + Sync {
    /// Produce a renderable for the name, or `None` if the name is unknown
    /// or not renderable.
    fn resolve(&self, name: &str) -> Option<Arc<dyn Renderable>>;
}

/// A resolver backed by a fixed name -> factory table.
///
/// The table is populated at the registration boundary, before traffic;
/// this keeps the runtime capability check confined to names the
/// application chose to bind dynamically.
#[derive(Default)]
pub struct StaticResolver {
    bindings: HashMap<String, Arc<dyn WidgetFactory>>,
}

impl StaticResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a name to a per-resolve factory (builder pattern).
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, factory: impl WidgetFactory + 'static) -> Self {
        self.bindings.insert(name.into(), Arc::new(factory));
        self
    }

    /// Bind a name to a shared renderable instance (builder pattern).
    #[must_use]
    pub fn bind_instance(
        self,
        name: impl Into<String>,
        widget: impl Renderable + 'static,
    ) -> Self {
        let shared: Arc<dyn Renderable> = Arc::new(widget);
        self.bind(name, move || Arc::clone(&shared))
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no names are bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl WidgetResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Option<Arc<dyn Renderable>> {
        self.bindings.get(name).map(|factory| factory.make())
    }
}

/// A resolver that resolves nothing.
///
/// The default for managers that only register instances and factories;
/// any named reference rendered through it fails as an invalid widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl WidgetResolver for NullResolver {
    fn resolve(&self, _name: &str) -> Option<Arc<dyn Renderable>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use crate::widget::Output;

    struct Fixed(&'static str);

    impl Renderable for Fixed {
        fn render(&self, _params: &Params) -> Output {
            Output::Text(self.0.to_string())
        }
    }

    #[test]
    fn test_static_resolver_resolves_bound_names() {
        let resolver = StaticResolver::new()
            .bind("fixed", || Arc::new(Fixed("hi")) as Arc<dyn Renderable>);

        let widget = resolver.resolve("fixed").unwrap();
        assert_eq!(widget.render(&Params::new()), Output::Text("hi".into()));
        assert!(resolver.resolve("other").is_none());
    }

    #[test]
    fn test_bind_instance_shares_one_widget() {
        let resolver = StaticResolver::new().bind_instance("fixed", Fixed("hi"));

        let a = resolver.resolve("fixed").unwrap();
        let b = resolver.resolve("fixed").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_null_resolver_resolves_nothing() {
        assert!(NullResolver.resolve("anything").is_none());
    }
}
