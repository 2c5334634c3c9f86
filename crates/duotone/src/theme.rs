//! The two supported presentation modes.
//!
//! [`Theme`] is the whole vocabulary of this crate: a page (or screen,
//! or terminal) is either in light mode or in dark mode, never anything
//! else. The stringly-typed edges of the system — persisted records,
//! user-supplied names — are funneled through [`FromStr`], which is the
//! single place an invalid name can be rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseThemeError;

/// One of the two supported presentation modes.
///
/// Serializes to the lowercase wire names `"light"` and `"dark"`, which
/// are also the [`Display`](fmt::Display) and [`FromStr`] forms used by
/// the persistence layer.
///
/// # Example
///
/// ```rust
/// use duotone::Theme;
///
/// assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
/// assert_eq!(Theme::Dark.opposite(), Theme::Light);
/// assert_eq!(Theme::Light.to_string(), "light");
/// assert!("sepia".parse::<Theme>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode (light background, dark text).
    Light,
    /// Dark mode (dark background, light text).
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the lowercase wire name (`"light"` or `"dark"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns true for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError {
                name: other.to_string(),
            }),
        }
    }
}
