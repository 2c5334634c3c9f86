//! The theme manager: state, transitions, persistence, notification.
//!
//! One manager owns the page-wide theme state for the lifetime of the
//! process. Construct it once with its storage and presentation ports,
//! call [`initialize`](ThemeManager::initialize) exactly once at
//! startup, then drive it from UI controls via
//! [`set_theme`](ThemeManager::set_theme) /
//! [`toggle_theme`](ThemeManager::toggle_theme) and from the OS signal
//! via [`system_preference_changed`](ThemeManager::system_preference_changed).
//!
//! # Transition Order
//!
//! Every confirmed transition runs the same synchronous chain, in this
//! fixed order:
//!
//! 1. presentation apply (via [`Surface::apply`])
//! 2. persistence write (failure logged, never propagated)
//! 3. indicator refresh (via [`Surface::refresh_indicators`])
//! 4. subscriber notification, in registration order
//!
//! Execution is single-threaded and nothing in the chain suspends, so
//! no second transition can interleave with an in-flight one.
//!
//! # Failure Policy
//!
//! No failure in the chain is allowed to leave the page without a valid
//! displayed theme. A storage failure degrades to "nothing persisted";
//! a subscriber returning an error is logged and skipped without
//! aborting delivery to the subscribers after it.

use std::fmt;

use tracing::{debug, error, warn};

use crate::error::NotifyError;
use crate::preference::PreferenceSource;
use crate::store::ThemeStore;
use crate::surface::Surface;
use crate::theme::Theme;

/// A callback invoked with `(new, previous)` on every confirmed
/// transition.
pub type SubscriberFn = Box<dyn FnMut(Theme, Theme) -> Result<(), NotifyError>>;

/// Page-wide light/dark theme state behind storage and presentation
/// ports.
///
/// # Example
///
/// ```rust
/// use duotone::{MemoryStore, NullSurface, Theme, ThemeManager};
///
/// let mut manager = ThemeManager::new(
///     Box::new(MemoryStore::new()),
///     Box::new(NullSurface),
/// );
///
/// // No persisted choice yet: adopt the preference source's value.
/// manager.initialize(&Theme::Dark);
/// assert_eq!(manager.current_theme(), Theme::Dark);
///
/// manager.subscribe(|new, previous| {
///     println!("theme changed: {previous} -> {new}");
///     Ok(())
/// });
///
/// manager.toggle_theme();
/// assert_eq!(manager.current_theme(), Theme::Light);
/// ```
pub struct ThemeManager {
    current: Theme,
    /// Whether the store currently holds a record. Tracked here so the
    /// media-query path never re-reads storage after initialization.
    persisted: bool,
    store: Box<dyn ThemeStore>,
    surface: Box<dyn Surface>,
    subscribers: Vec<SubscriberFn>,
}

impl ThemeManager {
    /// Creates a manager that has not yet been initialized.
    ///
    /// The current theme starts as [`Theme::Light`] but nothing is
    /// applied or persisted until [`initialize`](Self::initialize)
    /// runs.
    pub fn new(store: Box<dyn ThemeStore>, surface: Box<dyn Surface>) -> Self {
        Self {
            current: Theme::Light,
            persisted: false,
            store,
            surface,
            subscribers: Vec::new(),
        }
    }

    /// Determines and applies the startup theme.
    ///
    /// Uses the persisted choice when one exists; otherwise adopts the
    /// preference source's current value and persists it, so the store
    /// afterwards holds the system-detected theme for users who never
    /// chose explicitly. Applies the result to the surface exactly
    /// once. Storage read failures degrade to "no persisted value."
    pub fn initialize(&mut self, preference: &dyn PreferenceSource) {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "could not read persisted theme, falling back to system preference");
                None
            }
        };

        let theme = match stored {
            Some(theme) => {
                self.persisted = true;
                theme
            }
            None => {
                let theme = preference.current();
                self.persist(theme);
                theme
            }
        };

        self.current = theme;
        self.surface.apply(theme);
        debug!(theme = %theme, persisted = self.persisted, "theme manager initialized");
    }

    /// Switches to the given theme.
    ///
    /// Runs the full transition chain (see module docs) even when the
    /// theme is unchanged, in which case subscribers observe
    /// `new == previous`.
    pub fn set_theme(&mut self, theme: Theme) {
        let previous = self.current;
        self.current = theme;

        self.surface.apply(theme);
        self.persist(theme);
        self.surface.refresh_indicators(theme);
        self.notify(theme, previous);

        debug!(from = %previous, to = %theme, "theme changed");
    }

    /// Switches to the theme named by `name`.
    ///
    /// An unrecognized name is a rejected request, not an error: a
    /// warning is logged and the current theme is left untouched. This
    /// is the entry point for stringly-typed callers (key bindings,
    /// values relayed from other processes).
    pub fn set_theme_named(&mut self, name: &str) {
        match name.parse::<Theme>() {
            Ok(theme) => self.set_theme(theme),
            Err(e) => warn!(name, error = %e, "rejected theme request"),
        }
    }

    /// Switches to the opposite of the current theme.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.current.opposite());
    }

    /// Registers a callback for confirmed transitions.
    ///
    /// Callbacks are invoked with `(new, previous)` in registration
    /// order. Duplicates are allowed and there is no unsubscription:
    /// callbacks live as long as the manager, by design.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(Theme, Theme) -> Result<(), NotifyError> + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Returns the current theme.
    pub fn current_theme(&self) -> Theme {
        self.current
    }

    /// Returns true if the store holds a record.
    ///
    /// While this is false, OS preference changes still steer the
    /// theme; once it becomes true they are ignored.
    pub fn has_persisted_choice(&self) -> bool {
        self.persisted
    }

    /// Entry point for OS preference change events.
    ///
    /// Honored only while no record is persisted. Once any choice has
    /// been stored — explicitly, or by initialization persisting the
    /// detected value — later preference changes are ignored, matching
    /// the reference behavior.
    pub fn system_preference_changed(&mut self, theme: Theme) {
        if self.persisted {
            debug!(theme = %theme, "ignoring system preference change: a stored choice exists");
            return;
        }
        self.set_theme(theme);
    }

    fn persist(&mut self, theme: Theme) {
        match self.store.save(theme) {
            Ok(()) => self.persisted = true,
            Err(e) => warn!(error = %e, "could not persist theme"),
        }
    }

    fn notify(&mut self, new: Theme, previous: Theme) {
        for (index, subscriber) in self.subscribers.iter_mut().enumerate() {
            if let Err(e) = subscriber(new, previous) {
                error!(index, error = %e, "theme subscriber failed");
            }
        }
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("current", &self.current)
            .field("persisted", &self.persisted)
            .field("subscriber_count", &self.subscribers.len())
            .finish()
    }
}
