//! Model-based property tests: arbitrary operation sequences keep the
//! manager, its surface, and its store in agreement.

use duotone::{MemoryStore, RecordingSurface, StoreError, Theme, ThemeManager, ThemeStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(Theme),
    SetNamed(String),
    Toggle,
    SystemChange(Theme),
}

fn theme_strategy() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        theme_strategy().prop_map(Op::Set),
        // Mostly garbage names, with the two valid ones mixed in.
        prop_oneof![
            Just("light".to_string()),
            Just("dark".to_string()),
            "[a-zA-Z]{0,8}",
        ]
        .prop_map(Op::SetNamed),
        Just(Op::Toggle),
        theme_strategy().prop_map(Op::SystemChange),
    ]
}

struct BrokenStore;

impl ThemeStore for BrokenStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        Err(StoreError::new("storage disabled"))
    }

    fn save(&mut self, _theme: Theme) -> Result<(), StoreError> {
        Err(StoreError::new("storage disabled"))
    }
}

proptest! {
    /// With working storage, initialization persists a record, so the
    /// expected theme is a pure fold over the ops: sets and toggles
    /// apply, bad names and system changes do not. The store and the
    /// surface must track the result exactly.
    #[test]
    fn operations_keep_store_and_surface_in_agreement(
        start in theme_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let store = MemoryStore::new();
        let surface = RecordingSurface::new();
        let mut manager = ThemeManager::new(Box::new(store.clone()), Box::new(surface.clone()));
        manager.initialize(&start);

        let mut expected = start;
        for op in &ops {
            match op {
                Op::Set(theme) => {
                    manager.set_theme(*theme);
                    expected = *theme;
                }
                Op::SetNamed(name) => {
                    manager.set_theme_named(name);
                    if let Ok(theme) = name.parse::<Theme>() {
                        expected = theme;
                    }
                }
                Op::Toggle => {
                    manager.toggle_theme();
                    expected = expected.opposite();
                }
                Op::SystemChange(theme) => {
                    // A record exists from initialization onwards.
                    manager.system_preference_changed(*theme);
                }
            }
        }

        prop_assert_eq!(manager.current_theme(), expected);
        prop_assert_eq!(store.stored(), Some(expected));
        prop_assert_eq!(surface.last_applied(), Some(expected));
        prop_assert!(manager.has_persisted_choice());
    }

    /// With storage permanently broken, no record can exist, so system
    /// preference changes keep steering the theme alongside explicit
    /// operations.
    #[test]
    fn broken_storage_never_pins_the_theme(
        start in theme_strategy(),
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let surface = RecordingSurface::new();
        let mut manager = ThemeManager::new(Box::new(BrokenStore), Box::new(surface.clone()));
        manager.initialize(&start);

        let mut expected = start;
        for op in &ops {
            match op {
                Op::Set(theme) => {
                    manager.set_theme(*theme);
                    expected = *theme;
                }
                Op::SetNamed(name) => {
                    manager.set_theme_named(name);
                    if let Ok(theme) = name.parse::<Theme>() {
                        expected = theme;
                    }
                }
                Op::Toggle => {
                    manager.toggle_theme();
                    expected = expected.opposite();
                }
                Op::SystemChange(theme) => {
                    manager.system_preference_changed(*theme);
                    expected = *theme;
                }
            }
        }

        prop_assert_eq!(manager.current_theme(), expected);
        prop_assert_eq!(surface.last_applied(), Some(expected));
        prop_assert!(!manager.has_persisted_choice());
    }
}
