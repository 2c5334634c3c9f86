//! OS color scheme preference detection.
//!
//! The `prefers-color-scheme` signal of the browser world maps to an OS
//! query here. [`SystemPreference`] asks the OS through the `dark-light`
//! crate; the [`PreferenceSource`] trait keeps the manager decoupled
//! from it so tests can pin the answer.

use crate::theme::Theme;

/// A source for the user's OS-level color scheme preference.
pub trait PreferenceSource {
    /// Returns the currently preferred theme.
    fn current(&self) -> Theme;
}

/// A fixed theme is its own preference source.
///
/// Convenient in tests and embedders that want to force a startup
/// theme: `manager.initialize(&Theme::Dark)`.
impl PreferenceSource for Theme {
    fn current(&self) -> Theme {
        *self
    }
}

/// Queries the OS for the user's preferred color scheme.
///
/// When the OS reports no preference (or detection fails), this falls
/// back to [`Theme::Light`], matching the media query's behavior of not
/// matching `dark` by default.
///
/// # Testing
///
/// The detector can be replaced per instance:
///
/// ```rust
/// use duotone::{PreferenceSource, SystemPreference, Theme};
///
/// let prefs = SystemPreference::with_detector(|| Theme::Dark);
/// assert_eq!(prefs.current(), Theme::Dark);
/// ```
#[derive(Debug, Clone)]
pub struct SystemPreference {
    detector: fn() -> Theme,
}

impl SystemPreference {
    /// Creates a source backed by OS detection.
    pub fn new() -> Self {
        Self {
            detector: os_preference,
        }
    }

    /// Creates a source with a custom detector, replacing OS detection.
    pub fn with_detector(detector: fn() -> Theme) -> Self {
        Self { detector }
    }
}

impl Default for SystemPreference {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceSource for SystemPreference {
    fn current(&self) -> Theme {
        (self.detector)()
    }
}

fn os_preference() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Theme::Dark,
        Ok(dark_light::Mode::Light) => Theme::Light,
        Ok(dark_light::Mode::Unspecified) | Err(_) => Theme::Light,
    }
}
