//! # Duotone - Light/Dark Theme Management
//!
//! `duotone` keeps one piece of page-wide state — the active
//! presentation theme, light or dark — and handles everything around
//! it: choosing the startup value (persisted choice, else OS
//! preference), applying it to a presentation surface, persisting
//! changes, and notifying subscribers of every confirmed transition.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: the two-value theme enum with lowercase wire names
//! - [`ThemeManager`]: the single owned instance driving transitions
//! - [`ThemeStore`]: storage port ([`FileStore`], [`MemoryStore`])
//! - [`PreferenceSource`]: the OS `prefers-color-scheme` signal
//!   ([`SystemPreference`], or a fixed [`Theme`])
//! - [`Surface`]: presentation port ([`NullSurface`],
//!   [`RecordingSurface`], or your own)
//!
//! ## Quick Start
//!
//! ```rust
//! use duotone::{FileStore, NullSurface, SystemPreference, Theme, ThemeManager};
//!
//! # let dir = tempfile::tempdir().unwrap();
//! # let state_file = dir.path().join("mode");
//! let mut manager = ThemeManager::new(
//!     Box::new(FileStore::new(&state_file)),
//!     Box::new(NullSurface), // swap in your own Surface
//! );
//!
//! // Persisted choice if present, else the OS preference. Applied to
//! // the surface exactly once.
//! manager.initialize(&SystemPreference::new());
//!
//! manager.subscribe(|new, previous| {
//!     println!("theme changed: {previous} -> {new}");
//!     Ok(())
//! });
//!
//! manager.set_theme(Theme::Dark);
//! assert_eq!(manager.current_theme(), Theme::Dark);
//!
//! manager.toggle_theme();
//! assert_eq!(manager.current_theme(), Theme::Light);
//! ```
//!
//! ## Failure Policy
//!
//! Nothing here is fatal to the embedding application. Unrecognized
//! theme names are rejected with a logged warning and no state change;
//! storage failures degrade to "no persisted value"; a failing
//! subscriber is logged and skipped without aborting delivery to the
//! rest. The page always ends a transition in a valid displayed theme.
//!
//! ## System Preference Changes
//!
//! Wire your event source (media query listener, settings watcher,
//! polling loop) to
//! [`ThemeManager::system_preference_changed`]. Changes are honored
//! only while no choice is persisted; once a record exists — written
//! explicitly or by initialization persisting the detected value —
//! later preference changes are ignored.

mod error;
mod manager;
mod preference;
mod store;
mod surface;
mod theme;

pub use error::{NotifyError, ParseThemeError, StoreError};
pub use manager::{SubscriberFn, ThemeManager};
pub use preference::{PreferenceSource, SystemPreference};
pub use store::{FileStore, MemoryStore, ThemeStore};
pub use surface::{NullSurface, RecordingSurface, Surface};
pub use theme::Theme;
