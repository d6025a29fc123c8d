//! Widgetry - Widget Registry & Render Cache
//!
//! A registry-and-cache layer for named "widgets" (renderable components)
//! within a web application. Aliases map to renderable handlers; rendered
//! output is optionally cached keyed by alias and parameters.
//!
//! ## Architecture
//!
//! - `config` - Widget and cache configuration (file + environment)
//! - `cache` - Cache store abstraction with a Moka-backed store
//! - `widget` - The `Renderable` contract, widget references and output
//! - `registry` - Alias registry and the `WidgetManager` render core
//! - `resolver` - Instance resolution for named (plugin-loaded) widgets
//! - `setup` - Registry seeding from configuration and module discovery
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use widgetry::{
//!     CacheConfig, CacheSettings, MokaStore, Output, Params, Renderable,
//!     WidgetManager, WidgetRef,
//! };
//!
//! struct Greeting;
//!
//! impl Renderable for Greeting {
//!     fn render(&self, params: &Params) -> Output {
//!         let name = params.get_str("name").unwrap_or("world");
//!         Output::Text(format!("Hello, {name}"))
//!     }
//! }
//!
//! let store = Arc::new(MokaStore::new(CacheConfig::default()));
//! let manager = WidgetManager::new(store, CacheSettings::default());
//!
//! manager.register_widget("greeting", WidgetRef::instance(Greeting));
//!
//! let mut params = Params::new();
//! params.insert("name", "Ada");
//! let html = manager.render("greeting", params).unwrap();
//! assert_eq!(html, "Hello, Ada");
//! ```

pub mod cache;
pub mod config;
mod error;
mod params;
pub mod registry;
pub mod resolver;
pub mod setup;
pub mod widget;

pub use cache::{CacheConfig, CacheStore, MokaStore};
pub use config::{CacheSettings, ConfigError, WidgetsConfig};
pub use error::WidgetError;
pub use params::{Params, cache_key, canonical_json};
pub use registry::{WidgetManager, WidgetRegistry};
pub use resolver::{NullResolver, StaticResolver, WidgetResolver};
pub use widget::{Output, Renderable, WidgetFactory, WidgetRef};
