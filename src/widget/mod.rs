//! The widget contract: renderables, factories and registry references.

use std::sync::Arc;

use serde_json::Value;

use crate::params::Params;

/// A renderable widget.
///
/// The single capability the registry cares about. Implementing this trait
/// is the compile-time proof that a type can be rendered; there is no
/// runtime "does it have a render method" probe for statically registered
/// widgets.
pub trait Renderable: Send + Sync {
    /// Render the widget with the given parameters.
    fn render(&self, params: &Params) -> Output;
}

/// Builds a fresh renderable instance per render call.
///
/// Use this when a widget carries per-render state; shared stateless
/// widgets register as [`WidgetRef::Instance`] instead.
pub trait WidgetFactory: Send + Sync {
    fn make(&self) -> Arc<dyn Renderable>;
}

impl<F> WidgetFactory for F
where
    F: Fn() -> Arc<dyn Renderable> + Send + Sync,
{
    fn make(&self) -> Arc<dyn Renderable> {
        self()
    }
}

/// What a widget's render call produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Plain text or markup, returned as-is.
    Text(String),
    /// Structured output, normalized before caching.
    Value(Value),
}

impl Output {
    /// Normalize into the string form that is both cached and returned.
    ///
    /// Text stays as-is; a JSON string unwraps to its inner text; any other
    /// structured value serializes to compact JSON. Callers observe the same
    /// shape whether the render was a cache hit or a miss.
    pub fn normalize(self) -> String {
        match self {
            Output::Text(text) => text,
            Output::Value(Value::String(text)) => text,
            Output::Value(value) => value.to_string(),
        }
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Output::Text(text.to_string())
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Output::Value(value)
    }
}

/// Reference stored in the registry for an alias.
///
/// Registration performs no capability check; whatever check a variant
/// needs happens at render time (and only [`WidgetRef::Named`] has one).
#[derive(Clone)]
pub enum WidgetRef {
    /// A shared renderable used directly on every render.
    Instance(Arc<dyn Renderable>),
    /// A factory producing a fresh instance per render.
    Factory(Arc<dyn WidgetFactory>),
    /// A symbolic name resolved through the application's
    /// [`WidgetResolver`](crate::resolver::WidgetResolver) at render time.
    Named(String),
}

impl WidgetRef {
    /// Register a shared renderable instance.
    pub fn instance(widget: impl Renderable + 'static) -> Self {
        Self::Instance(Arc::new(widget))
    }

    /// Register a per-render factory.
    pub fn factory(factory: impl WidgetFactory + 'static) -> Self {
        Self::Factory(Arc::new(factory))
    }

    /// Register a name to be resolved at render time.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl std::fmt::Debug for WidgetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetRef::Instance(_) => f.write_str("WidgetRef::Instance"),
            WidgetRef::Factory(_) => f.write_str("WidgetRef::Factory"),
            WidgetRef::Named(name) => write!(f, "WidgetRef::Named({name:?})"),
        }
    }
}
