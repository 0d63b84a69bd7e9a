use std::fmt;
use std::sync::{Arc, Mutex};

use leptos::prelude::{GetUntracked, Set, Signal, WriteSignal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local storage key holding the serialized [`PersistedPreferences`].
pub const PREFERENCES_KEY: &str = "theme-storage";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    HighContrast,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [Self::Light, Self::Dark, Self::HighContrast];

    /// Next mode in the toggle cycle: light -> dark -> high-contrast -> light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::HighContrast,
            Self::HighContrast => Self::Light,
        }
    }

    /// Class name applied to the document root.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        }
    }

    /// Classes set on the document root. High contrast layers over the dark
    /// palette.
    pub fn root_classes(self) -> &'static [&'static str] {
        match self {
            Self::Light => &["light"],
            Self::Dark => &["dark"],
            Self::HighContrast => &["dark", "high-contrast"],
        }
    }

    /// Dark and high-contrast both use the dark palette as their base.
    pub fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }
}

/// Every class any mode puts on the document root.
pub const ROOT_CLASSES: [&str; 3] = ["light", "dark", "high-contrast"];

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedPreferences {
    pub theme: ThemeMode,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Preference storage is unavailable")]
    Unavailable,
    #[error("Couldn't read preferences: {0}")]
    Read(String),
    #[error("Couldn't write preferences: {0}")]
    Write(String),
    #[error("Stored preferences are corrupt: {0}")]
    Corrupt(String),
}

pub trait PreferenceStorage: Send + Sync {
    /// `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<PersistedPreferences>, StorageError>;
    fn save(&self, prefs: &PersistedPreferences) -> Result<(), StorageError>;
}

/// In-memory storage slot. Clones share the same slot, so a second store
/// opened on a clone observes what the first one wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with raw contents, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|s| s.clone())
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedPreferences>, StorageError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Read(e.to_string()))?;
        slot.as_deref()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))
            })
            .transpose()
    }

    fn save(&self, prefs: &PersistedPreferences) -> Result<(), StorageError> {
        let raw = serde_json::to_string(prefs).map_err(|e| StorageError::Write(e.to_string()))?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Write(e.to_string()))?;
        *slot = Some(raw);
        Ok(())
    }
}

/// Backend over a reactive signal pair, as returned by leptos-use's storage
/// hooks. Reads and writes go through the signals; the hook mirrors them
/// into the browser. Once the owning scope is disposed the storage is
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy)]
pub struct SignalStorage {
    stored: Signal<Option<PersistedPreferences>>,
    set_stored: WriteSignal<Option<PersistedPreferences>>,
}

impl SignalStorage {
    pub fn new(
        stored: impl Into<Signal<Option<PersistedPreferences>>>,
        set_stored: WriteSignal<Option<PersistedPreferences>>,
    ) -> Self {
        Self {
            stored: stored.into(),
            set_stored,
        }
    }

    /// `window.localStorage` under [`PREFERENCES_KEY`], JSON encoded. Must be
    /// called inside a reactive owner; decode and write failures are logged
    /// by the hook.
    #[cfg(feature = "hydrate")]
    pub fn local() -> Self {
        use codee::string::JsonSerdeWasmCodec;
        use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

        let (stored, set_stored, _) =
            use_local_storage_with_options::<Option<PersistedPreferences>, JsonSerdeWasmCodec>(
                PREFERENCES_KEY,
                UseStorageOptions::default()
                    .on_error(|e| log::warn!("preference storage failed: {e:?}")),
            );
        Self::new(stored, set_stored)
    }
}

impl PreferenceStorage for SignalStorage {
    fn load(&self) -> Result<Option<PersistedPreferences>, StorageError> {
        self.stored
            .try_get_untracked()
            .ok_or(StorageError::Unavailable)
    }

    fn save(&self, prefs: &PersistedPreferences) -> Result<(), StorageError> {
        match self.set_stored.try_set(Some(*prefs)) {
            None => Ok(()),
            Some(_) => Err(StorageError::Unavailable),
        }
    }
}

pub struct PreferenceStore {
    theme: ThemeMode,
    storage: Box<dyn PreferenceStorage>,
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Creates a store holding the default theme. Storage is not touched
    /// until [`PreferenceStore::hydrate`].
    pub fn new(storage: impl PreferenceStorage + 'static) -> Self {
        Self {
            theme: ThemeMode::default(),
            storage: Box::new(storage),
        }
    }

    /// Creates a store and immediately hydrates it, as on a page load.
    pub fn open(storage: impl PreferenceStorage + 'static) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    /// Reads the persisted theme. Missing, unreadable or corrupt data keeps
    /// the current theme.
    pub fn hydrate(&mut self) -> ThemeMode {
        match self.storage.load() {
            Ok(Some(prefs)) => self.theme = prefs.theme,
            Ok(None) => {}
            Err(e) => log::warn!("ignoring stored preferences: {e}"),
        }
        self.theme
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
        self.persist();
    }

    pub fn advance_theme(&mut self) -> ThemeMode {
        self.set_theme(self.theme.next());
        self.theme
    }

    fn persist(&self) {
        let prefs = PersistedPreferences { theme: self.theme };
        if let Err(e) = self.storage.save(&prefs) {
            log::warn!("theme {} not persisted: {e}", self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use leptos::{prelude::signal, reactive::owner::Owner};

    use super::*;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn load(&self) -> Result<Option<PersistedPreferences>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _prefs: &PersistedPreferences) -> Result<(), StorageError> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_default_is_light() {
        let store = PreferenceStore::open(MemoryStorage::new());
        assert_eq!(store.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_advance_cycles_with_period_three() {
        let mut store = PreferenceStore::open(MemoryStorage::new());
        assert_eq!(store.advance_theme(), ThemeMode::Dark);
        assert_eq!(store.advance_theme(), ThemeMode::HighContrast);
        assert_eq!(store.advance_theme(), ThemeMode::Light);

        for start in ThemeMode::ALL {
            store.set_theme(start);
            for _ in 0..3 {
                store.advance_theme();
            }
            assert_eq!(store.theme(), start);
        }
    }

    #[test]
    fn test_set_theme_survives_reload() {
        for theme in ThemeMode::ALL {
            let storage = MemoryStorage::new();
            let mut store = PreferenceStore::open(storage.clone());
            store.set_theme(theme);
            drop(store);

            let reloaded = PreferenceStore::open(storage);
            assert_eq!(reloaded.theme(), theme);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let storage = MemoryStorage::new();
        let mut store = PreferenceStore::new(storage.clone());
        store.set_theme(ThemeMode::HighContrast);
        assert_eq!(
            storage.raw().as_deref(),
            Some(r#"{"theme":"high-contrast"}"#)
        );
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_light() {
        for raw in ["not json", r#"{"theme":"sepia"}"#, "{}", ""] {
            let store = PreferenceStore::open(MemoryStorage::with_raw(raw));
            assert_eq!(store.theme(), ThemeMode::Light, "raw contents: {raw:?}");
        }
    }

    #[test]
    fn test_failing_storage_does_not_block_state() {
        let mut store = PreferenceStore::open(BrokenStorage);
        assert_eq!(store.theme(), ThemeMode::Light);
        store.set_theme(ThemeMode::Dark);
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert_eq!(store.advance_theme(), ThemeMode::HighContrast);
    }

    #[test]
    fn test_new_does_not_read_storage() {
        let store = PreferenceStore::new(MemoryStorage::with_raw(r#"{"theme":"dark"}"#));
        assert_eq!(store.theme(), ThemeMode::Light);
    }

    #[test]
    fn test_root_classes() {
        assert_eq!(ThemeMode::Light.root_classes(), ["light"]);
        assert_eq!(ThemeMode::HighContrast.root_classes(), ["dark", "high-contrast"]);
        for mode in ThemeMode::ALL {
            assert_eq!(mode.root_classes().contains(&"dark"), mode.is_dark());
            for class in mode.root_classes() {
                assert!(ROOT_CLASSES.contains(class), "{class} is never cleared");
            }
        }
    }

    #[test]
    fn test_signal_storage_round_trip() {
        let owner = Owner::new();
        owner.with(|| {
            let (stored, set_stored) = signal(None::<PersistedPreferences>);
            let storage = SignalStorage::new(stored, set_stored);

            let mut store = PreferenceStore::open(storage);
            assert_eq!(store.theme(), ThemeMode::Light);
            store.set_theme(ThemeMode::Dark);
            assert_eq!(
                stored.get_untracked(),
                Some(PersistedPreferences {
                    theme: ThemeMode::Dark
                })
            );

            let reloaded = PreferenceStore::open(storage);
            assert_eq!(reloaded.theme(), ThemeMode::Dark);
        });
    }

    #[test]
    fn test_signal_storage_after_dispose() {
        let owner = Owner::new();
        let storage = owner.with(|| {
            let (stored, set_stored) = signal(Some(PersistedPreferences {
                theme: ThemeMode::HighContrast,
            }));
            SignalStorage::new(stored, set_stored)
        });
        owner.cleanup();

        assert_eq!(storage.load(), Err(StorageError::Unavailable));
        let mut store = PreferenceStore::open(storage);
        assert_eq!(store.theme(), ThemeMode::Light);
        store.set_theme(ThemeMode::Dark);
        assert_eq!(store.theme(), ThemeMode::Dark);
    }
}
