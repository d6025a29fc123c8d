//! Cache layer - store abstraction over Moka.
//!
//! The render core treats its cache as a black box with `has`/`get`/`put`
//! semantics ([`CacheStore`]). The bundled backend is [`MokaStore`], a Moka
//! sync cache with per-entry TTL; applications with their own cache tier
//! implement the trait instead.

mod config;
mod moka;
mod store;

pub use config::CacheConfig;
pub use self::moka::MokaStore;
pub use store::CacheStore;
