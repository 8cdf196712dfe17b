#![forbid(unsafe_code)]

//! Locale-bound lookups with an explicit missing-key policy.
//!
//! A key that no locale defines resolves to the key itself and emits a
//! `warn!` event. The end user sees the raw key instead of an error; the
//! diagnostic goes to the log.

use std::borrow::Cow;
use std::sync::Arc;

use tracing::warn;

use crate::catalog::StringCatalog;
use crate::locale::Locale;

/// A catalog paired with the current display locale.
///
/// Cheap to clone; the catalog is shared.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<StringCatalog>,
    locale: Locale,
}

impl Translator {
    #[must_use]
    pub fn new(catalog: Arc<StringCatalog>, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Same catalog, different locale.
    #[must_use]
    pub fn with_locale(&self, locale: Locale) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            locale,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &StringCatalog {
        &self.catalog
    }

    fn missing<'a>(&self, key: &'a str) -> Cow<'a, str> {
        warn!(key, locale = %self.locale, "translation key not found");
        Cow::Borrowed(key)
    }

    /// Translate `key`, falling back to the key itself.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.catalog.get(self.locale.tag(), key) {
            Some(text) => Cow::Borrowed(text),
            None => self.missing(key),
        }
    }

    /// Translate and interpolate `{name}` placeholders.
    #[must_use]
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.catalog.format(self.locale.tag(), key, args) {
            Some(text) => text,
            None => self.missing(key).into_owned(),
        }
    }

    /// Translate a plural entry for `count`, injecting `{count}`.
    #[must_use]
    pub fn t_plural(&self, key: &str, count: i64) -> String {
        match self.catalog.format_plural(self.locale.tag(), key, count, &[]) {
            Some(text) => text,
            None => self.missing(key).into_owned(),
        }
    }
}
