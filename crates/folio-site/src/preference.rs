#![forbid(unsafe_code)]

//! Persisted display-language preference.
//!
//! The chosen locale lives in an [`Observable`]; a subscription owned by
//! [`LanguagePreference`] writes every change to the [`PreferenceStore`] as
//! it happens, so there is no separate "save" step a caller could forget.
//! Dropping the preference drops the subscription and stops persisting.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_i18n::Locale;
use folio_runtime::{Observable, Subscription};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key holding the locale tag.
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Key-value storage for user preferences (browser `localStorage` on the web).
pub trait PreferenceStore {
    /// # Errors
    ///
    /// [`StorageError::Unavailable`] when the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// [`StorageError`] when the value cannot be written.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and hosts without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The current display language and its persistence.
pub struct LanguagePreference {
    locale: Observable<Locale>,
    _persist: Subscription,
}

impl std::fmt::Debug for LanguagePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguagePreference")
            .field("locale", &self.locale.get())
            .finish_non_exhaustive()
    }
}

impl LanguagePreference {
    /// Resolve the starting locale and begin persisting changes.
    ///
    /// A stored supported tag wins. Otherwise the locale is detected from
    /// `browser_language`; the detected value is not written until the user
    /// picks a language. Storage failures are logged and treated as "no
    /// stored value".
    pub fn initialize(store: Rc<dyn PreferenceStore>, browser_language: &str) -> Self {
        let stored = match store.load(LANGUAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "language preference unreadable; detecting");
                None
            }
        };
        let locale = match stored.as_deref().and_then(Locale::parse) {
            Some(locale) => {
                debug!(%locale, "language restored from storage");
                locale
            }
            None => {
                if let Some(raw) = stored.as_deref() {
                    warn!(value = raw, "ignoring unsupported stored language");
                }
                let locale = Locale::detect(browser_language);
                debug!(%locale, browser_language, "language detected from browser");
                locale
            }
        };
        let observable = Observable::new(locale);
        let persist = observable.subscribe(move |locale: &Locale| {
            if let Err(err) = store.save(LANGUAGE_KEY, locale.tag()) {
                warn!(%err, %locale, "language preference not persisted");
            }
        });
        Self {
            locale: observable,
            _persist: persist,
        }
    }

    #[must_use]
    pub fn current(&self) -> Locale {
        self.locale.get()
    }

    /// Shared handle for subscribers that follow the language.
    #[must_use]
    pub fn observable(&self) -> &Observable<Locale> {
        &self.locale
    }

    /// Switch language. Persisted immediately when it changes.
    pub fn select(&self, locale: Locale) {
        self.locale.set(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("private mode".into()))
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.into(),
                reason: "quota".into(),
            })
        }
    }

    #[test]
    fn stored_tag_wins_over_browser() {
        let store = Rc::new(MemoryStore::with(LANGUAGE_KEY, "pt-br"));
        let pref = LanguagePreference::initialize(store, "en-US");
        assert_eq!(pref.current(), Locale::PtBr);
    }

    #[test]
    fn missing_or_invalid_tag_detects() {
        let pref = LanguagePreference::initialize(Rc::new(MemoryStore::new()), "pt-PT");
        assert_eq!(pref.current(), Locale::PtBr);

        let store = Rc::new(MemoryStore::with(LANGUAGE_KEY, "fr"));
        let pref = LanguagePreference::initialize(store.clone(), "de-DE");
        assert_eq!(pref.current(), Locale::En);
        // Detection alone does not overwrite storage.
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn select_persists_immediately() {
        let store = Rc::new(MemoryStore::new());
        let pref = LanguagePreference::initialize(store.clone(), "en");
        pref.select(Locale::PtBr);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("pt-br"));
        pref.select(Locale::En);
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn drop_stops_persisting() {
        let store = Rc::new(MemoryStore::new());
        let pref = LanguagePreference::initialize(store.clone(), "en");
        let handle = pref.observable().clone();
        drop(pref);
        handle.set(Locale::PtBr);
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn broken_storage_degrades_to_detection() {
        let pref = LanguagePreference::initialize(Rc::new(BrokenStore), "pt-BR");
        assert_eq!(pref.current(), Locale::PtBr);
        pref.select(Locale::En);
        assert_eq!(pref.current(), Locale::En);
    }
}
