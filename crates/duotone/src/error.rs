//! Error types for theme management.
//!
//! None of these errors is fatal to the embedding application. The
//! manager's contract is that every transition ends in a valid displayed
//! theme: invalid names are rejected without touching state, storage
//! failures degrade to "no persisted value," and subscriber failures are
//! captured one callback at a time.

use thiserror::Error;

/// Error returned when a string is not a recognized theme name.
///
/// Produced by [`Theme::from_str`](crate::Theme) and, indirectly, by
/// [`ThemeManager::set_theme_named`](crate::ThemeManager::set_theme_named),
/// which logs it and leaves the current theme untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme {name:?}: expected \"light\" or \"dark\"")]
pub struct ParseThemeError {
    /// The rejected input.
    pub name: String,
}

/// Error from a [`ThemeStore`](crate::ThemeStore) read or write.
///
/// The manager never propagates these: a failed read is treated as "no
/// persisted value" and a failed write is logged, leaving the in-memory
/// state authoritative.
#[derive(Debug, Error)]
#[error("theme store error: {message}")]
pub struct StoreError {
    /// Human-readable error message.
    pub message: String,
    /// The underlying I/O error, if any.
    #[source]
    pub source: Option<std::io::Error>,
}

impl StoreError {
    /// Creates a store error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Sets the underlying I/O error.
    pub fn with_source(mut self, source: std::io::Error) -> Self {
        self.source = Some(source);
        self
    }
}

/// Error returned by a subscriber callback.
///
/// Each subscriber invocation is isolated: a returned `NotifyError` is
/// logged and delivery continues with the next subscriber in
/// registration order.
#[derive(Debug, Error)]
#[error("subscriber error: {message}")]
pub struct NotifyError {
    /// Human-readable error message.
    pub message: String,
    /// The underlying error source, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl NotifyError {
    /// Creates a subscriber error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Sets the source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseThemeError {
            name: "sepia".into(),
        };
        assert!(err.to_string().contains("sepia"));
        assert!(err.to_string().contains("light"));
    }

    #[test]
    fn test_store_error_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::new("failed to write state file").with_source(io_err);
        assert!(err.source.is_some());
        assert!(err.to_string().contains("state file"));
    }

    #[test]
    fn test_notify_error_creation() {
        let err = NotifyError::new("refused");
        assert_eq!(err.message, "refused");
        assert!(err.source.is_none());

        let chained = NotifyError::new("outer").with_source(ParseThemeError { name: "x".into() });
        assert!(chained.source.is_some());
    }
}
