//! Storage port for the persisted theme choice.
//!
//! The manager remembers at most one thing across sessions: the last
//! theme that was chosen (or, when the user never chose, the one the OS
//! preference supplied at startup). [`ThemeStore`] abstracts where that
//! single record lives so the manager can be exercised without touching
//! a real filesystem.
//!
//! Absence of a record (`Ok(None)`) means "no explicit user choice
//! yet" and is what lets system preference changes through.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

use crate::error::StoreError;
use crate::theme::Theme;

/// Durable storage for the single persisted theme record.
pub trait ThemeStore {
    /// Reads the persisted theme, if any.
    ///
    /// `Ok(None)` means no record exists. Implementations should treat
    /// a malformed record the same way rather than fail.
    fn load(&self) -> Result<Option<Theme>, StoreError>;

    /// Persists the given theme, replacing any previous record.
    fn save(&mut self, theme: Theme) -> Result<(), StoreError>;
}

/// File-backed store holding the literal theme name.
///
/// The file contains exactly one of the strings `light` or `dark`
/// (surrounding whitespace is tolerated on read). A missing file loads
/// as `Ok(None)`; unrecognized content is logged and also loads as
/// `Ok(None)`, so a corrupted record can never wedge startup.
///
/// # Example
///
/// ```rust,no_run
/// use duotone::{FileStore, Theme, ThemeStore};
///
/// let mut store = FileStore::new(".duotone/mode");
/// store.save(Theme::Dark)?;
/// assert_eq!(store.load()?, Some(Theme::Dark));
/// # Ok::<(), duotone::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// Nothing is read or created until [`load`](ThemeStore::load) or
    /// [`save`](ThemeStore::save) is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(
                    StoreError::new(format!("failed to read {}", self.path.display()))
                        .with_source(e),
                )
            }
        };

        let value = content.trim();
        match value.parse::<Theme>() {
            Ok(theme) => Ok(Some(theme)),
            Err(_) => {
                warn!(
                    value,
                    path = %self.path.display(),
                    "ignoring malformed persisted theme"
                );
                Ok(None)
            }
        }
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::new(format!("failed to create {}", parent.display()))
                        .with_source(e)
                })?;
            }
        }
        fs::write(&self.path, theme.as_str()).map_err(|e| {
            StoreError::new(format!("failed to write {}", self.path.display())).with_source(e)
        })
    }
}

/// In-process store for tests and embedders without a filesystem.
///
/// Clones share the same underlying record, mirroring how every script
/// in a browsing context sees the same storage: hand one clone to the
/// manager and keep another to inspect what was persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<RefCell<Option<Theme>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a persisted theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(theme))),
        }
    }

    /// Returns the current record without going through the port.
    pub fn stored(&self) -> Option<Theme> {
        *self.value.borrow()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        Ok(*self.value.borrow())
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(theme);
        Ok(())
    }
}
