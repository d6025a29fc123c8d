//! Error types for widget rendering.

use thiserror::Error;

/// Errors raised by [`crate::WidgetManager::render`].
///
/// Both variants are terminal for the render call: no retry, no fallback
/// output. The request-handling layer decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// No widget is registered under the requested alias.
    #[error("widget [{alias}] not found")]
    NotFound { alias: String },

    /// The registered reference could not be resolved to anything renderable.
    ///
    /// Only reachable through named (resolver-mediated) references; directly
    /// registered instances and factories carry the render capability in
    /// their type.
    #[error("widget [{alias}] must have a render method")]
    InvalidWidget { alias: String },
}

impl WidgetError {
    /// The alias the failing render call asked for.
    pub fn alias(&self) -> &str {
        match self {
            Self::NotFound { alias } | Self::InvalidWidget { alias } => alias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WidgetError::NotFound { alias: "sidebar".into() };
        assert_eq!(err.to_string(), "widget [sidebar] not found");

        let err = WidgetError::InvalidWidget { alias: "sidebar".into() };
        assert_eq!(err.to_string(), "widget [sidebar] must have a render method");
    }

    #[test]
    fn test_alias_accessor() {
        let err = WidgetError::NotFound { alias: "sidebar".into() };
        assert_eq!(err.alias(), "sidebar");

        let err = WidgetError::InvalidWidget { alias: "banner".into() };
        assert_eq!(err.alias(), "banner");
    }
}
