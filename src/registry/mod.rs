//! Alias registry and the render core.

mod manager;
mod map;

pub use manager::WidgetManager;
pub use map::WidgetRegistry;
