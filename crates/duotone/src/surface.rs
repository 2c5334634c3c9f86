//! Presentation port: where the active theme becomes visible.
//!
//! In the browser this is the document root's `data-theme` attribute
//! plus a pair of mutually exclusive body classes; a terminal frontend
//! might repaint a status line instead. [`Surface`] captures just the
//! two moments the manager needs: applying the theme itself and
//! refreshing any theme-dependent indicators (the "active button"
//! state) afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use crate::theme::Theme;

/// Receives the active theme and makes it visible.
pub trait Surface {
    /// Applies the theme to the presentation state.
    ///
    /// Called once at initialization and once per confirmed transition,
    /// before the new value is persisted.
    fn apply(&mut self, theme: Theme);

    /// Refreshes theme-dependent UI indicators after a transition.
    ///
    /// Runs after persistence and before subscriber notification.
    /// Defaults to a no-op for surfaces with nothing to indicate.
    fn refresh_indicators(&mut self, _theme: Theme) {}
}

/// A surface that displays nothing.
///
/// Useful for headless runs and for commands that only need the
/// manager's state, not its presentation side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn apply(&mut self, _theme: Theme) {}
}

/// A surface that records every applied theme, for tests.
///
/// Clones share the same log, so a test can hand one clone to the
/// manager and assert on another:
///
/// ```rust
/// use duotone::{MemoryStore, RecordingSurface, Theme, ThemeManager};
///
/// let surface = RecordingSurface::new();
/// let mut manager = ThemeManager::new(
///     Box::new(MemoryStore::new()),
///     Box::new(surface.clone()),
/// );
/// manager.initialize(&Theme::Dark);
/// manager.toggle_theme();
///
/// assert_eq!(surface.applied(), vec![Theme::Dark, Theme::Light]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    applied: Rc<RefCell<Vec<Theme>>>,
    indicated: Rc<RefCell<Vec<Theme>>>,
}

impl RecordingSurface {
    /// Creates a surface with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every theme passed to [`Surface::apply`], in order.
    pub fn applied(&self) -> Vec<Theme> {
        self.applied.borrow().clone()
    }

    /// Returns every theme passed to [`Surface::refresh_indicators`],
    /// in order.
    pub fn indicated(&self) -> Vec<Theme> {
        self.indicated.borrow().clone()
    }

    /// Returns the most recently applied theme, if any.
    pub fn last_applied(&self) -> Option<Theme> {
        self.applied.borrow().last().copied()
    }
}

impl Surface for RecordingSurface {
    fn apply(&mut self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }

    fn refresh_indicators(&mut self, theme: Theme) {
        self.indicated.borrow_mut().push(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_surface_is_silent() {
        let mut surface = NullSurface;
        surface.apply(Theme::Dark);
        surface.refresh_indicators(Theme::Dark);
    }

    #[test]
    fn test_recording_surface_logs_in_order() {
        let mut surface = RecordingSurface::new();
        surface.apply(Theme::Light);
        surface.apply(Theme::Dark);
        surface.refresh_indicators(Theme::Dark);

        assert_eq!(surface.applied(), vec![Theme::Light, Theme::Dark]);
        assert_eq!(surface.indicated(), vec![Theme::Dark]);
        assert_eq!(surface.last_applied(), Some(Theme::Dark));
    }

    #[test]
    fn test_recording_surface_clones_share_the_log() {
        let surface = RecordingSurface::new();
        let mut writer = surface.clone();

        writer.apply(Theme::Dark);
        assert_eq!(surface.applied(), vec![Theme::Dark]);
    }
}
