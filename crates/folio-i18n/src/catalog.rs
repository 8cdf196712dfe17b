#![forbid(unsafe_code)]

//! Key-based string catalog with per-locale tables and fallback chains.
//!
//! # Invariants
//!
//! 1. Lookups never panic; an unknown locale or key yields `None`.
//! 2. Interpolation is single-pass: substituted values are never re-expanded.
//! 3. Placeholders without a matching argument are left intact.
//! 4. `coverage_report` counts every key known to any locale, so
//!    `present + missing == total_keys` for each locale.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::plural::{PluralForms, PluralRule};

/// One catalog value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringEntry {
    Single(String),
    Plural(PluralForms),
}

/// The strings of a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleStrings {
    entries: BTreeMap<String, StringEntry>,
}

impl LocaleStrings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a simple string, replacing any previous entry for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), StringEntry::Single(value.into()));
    }

    /// Insert a plural entry, replacing any previous entry for `key`.
    pub fn insert_plural(&mut self, key: impl Into<String>, forms: PluralForms) {
        self.entries.insert(key.into(), StringEntry::Plural(forms));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StringEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Errors reported by catalog validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A locale referenced by a fallback chain or lookup is not loaded.
    UnknownLocale(String),
    /// Locales disagree on their key sets.
    MissingKeys {
        locale: String,
        keys: Vec<String>,
    },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLocale(locale) => write!(f, "unknown locale: {locale}"),
            Self::MissingKeys { locale, keys } => {
                write!(f, "locale {locale} is missing {} key(s): ", keys.len())?;
                write!(f, "{}", keys.join(", "))
            }
        }
    }
}

impl std::error::Error for I18nError {}

/// Coverage of one locale against the union of all keys.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: String,
    pub present: usize,
    pub missing: Vec<String>,
    pub coverage_percent: f64,
}

/// Per-locale coverage summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    /// True when every locale carries every key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|lc| lc.missing.is_empty())
    }
}

/// Multi-locale string catalog.
#[derive(Debug, Clone, Default)]
pub struct StringCatalog {
    locales: BTreeMap<String, LocaleStrings>,
    fallback_chain: Vec<String>,
}

impl StringCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the strings of `locale`.
    pub fn add_locale(&mut self, locale: &str, strings: LocaleStrings) {
        self.locales.insert(locale.to_owned(), strings);
    }

    /// Locales consulted, in order, when the requested locale lacks a key.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnknownLocale`] if any locale in the chain has not
    /// been added.
    pub fn set_fallback_chain(&mut self, chain: &[&str]) -> Result<(), I18nError> {
        if let Some(unknown) = chain.iter().find(|l| !self.locales.contains_key(**l)) {
            return Err(I18nError::UnknownLocale((*unknown).to_owned()));
        }
        self.fallback_chain = chain.iter().map(|l| (*l).to_owned()).collect();
        Ok(())
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Union of keys across all locales, sorted.
    #[must_use]
    pub fn keys(&self) -> BTreeSet<&str> {
        self.locales.values().flat_map(LocaleStrings::keys).collect()
    }

    /// True if any locale defines `key`.
    #[must_use]
    pub fn knows(&self, key: &str) -> bool {
        self.locales.values().any(|ls| ls.contains(key))
    }

    fn resolve(&self, locale: &str, key: &str) -> Option<&StringEntry> {
        if let Some(entry) = self.locales.get(locale).and_then(|ls| ls.get(key)) {
            return Some(entry);
        }
        self.fallback_chain
            .iter()
            .filter(|l| l.as_str() != locale)
            .find_map(|l| self.locales.get(l).and_then(|ls| ls.get(key)))
    }

    /// Look up a simple string. Plural entries resolve to their `other` form.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        match self.resolve(locale, key)? {
            StringEntry::Single(s) => Some(s.as_str()),
            StringEntry::Plural(forms) => Some(forms.other.as_str()),
        }
    }

    /// Look up the plural form for `count` using `locale`'s plural rule.
    #[must_use]
    pub fn get_plural(&self, locale: &str, key: &str, count: i64) -> Option<&str> {
        match self.resolve(locale, key)? {
            StringEntry::Single(s) => Some(s.as_str()),
            StringEntry::Plural(forms) => {
                Some(forms.select(PluralRule::for_locale(locale).categorize(count)))
            }
        }
    }

    /// Look up and interpolate `{name}` placeholders.
    #[must_use]
    pub fn format(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.get(locale, key).map(|t| interpolate(t, args))
    }

    /// Plural lookup with `{count}` injected ahead of the caller's args.
    #[must_use]
    pub fn format_plural(
        &self,
        locale: &str,
        key: &str,
        count: i64,
        args: &[(&str, &str)],
    ) -> Option<String> {
        let template = self.get_plural(locale, key, count)?;
        let count_text = count.to_string();
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(("count", count_text.as_str()));
        all.extend_from_slice(args);
        Some(interpolate(template, &all))
    }

    /// Coverage of each locale against the union of keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all = self.keys();
        let total_keys = all.len();
        let locales = self
            .locales
            .iter()
            .map(|(locale, strings)| {
                let missing: Vec<String> = all
                    .iter()
                    .filter(|k| !strings.contains(k))
                    .map(|k| (*k).to_owned())
                    .collect();
                let present = total_keys - missing.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 * 100.0 / total_keys as f64
                };
                LocaleCoverage {
                    locale: locale.clone(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();
        CoverageReport {
            total_keys,
            locales,
        }
    }

    /// Require every locale to define every key.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::MissingKeys`] for the first incomplete locale.
    pub fn check_parity(&self) -> Result<(), I18nError> {
        match self
            .coverage_report()
            .locales
            .into_iter()
            .find(|lc| !lc.missing.is_empty())
        {
            Some(lc) => Err(I18nError::MissingKeys {
                locale: lc.locale,
                keys: lc.missing,
            }),
            None => Ok(()),
        }
    }
}

/// Single-pass `{name}` substitution.
fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_owned();
    }
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_locale_catalog() -> StringCatalog {
        let mut en = LocaleStrings::new();
        en.insert("nav.home", "Home");
        en.insert("greeting", "Hello, {name}!");
        en.insert_plural("skills.count", PluralForms::one_other("{count} skill", "{count} skills"));
        let mut pt = LocaleStrings::new();
        pt.insert("nav.home", "Início");
        pt.insert("greeting", "Olá, {name}!");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        catalog.add_locale("pt-br", pt);
        catalog
    }

    #[test]
    fn get_returns_locale_string() {
        let catalog = two_locale_catalog();
        assert_eq!(catalog.get("pt-br", "nav.home"), Some("Início"));
        assert_eq!(catalog.get("en", "nav.home"), Some("Home"));
        assert_eq!(catalog.get("de", "nav.home"), None);
    }

    #[test]
    fn fallback_chain_fills_gaps() {
        let mut catalog = two_locale_catalog();
        assert_eq!(catalog.get("pt-br", "skills.count"), None);
        catalog.set_fallback_chain(&["en"]).unwrap();
        assert_eq!(
            catalog.format_plural("pt-br", "skills.count", 3, &[]),
            Some("3 skills".into())
        );
    }

    #[test]
    fn fallback_chain_rejects_unknown_locale() {
        let mut catalog = two_locale_catalog();
        assert_eq!(
            catalog.set_fallback_chain(&["fr"]),
            Err(I18nError::UnknownLocale("fr".into()))
        );
    }

    #[test]
    fn format_substitutes_and_keeps_unknown_placeholders() {
        let catalog = two_locale_catalog();
        assert_eq!(
            catalog.format("en", "greeting", &[("name", "Ana")]),
            Some("Hello, Ana!".into())
        );
        assert_eq!(
            catalog.format("en", "greeting", &[("other", "x")]),
            Some("Hello, {name}!".into())
        );
    }

    #[test]
    fn unterminated_brace_is_literal() {
        assert_eq!(interpolate("50% {off", &[("off", "x")]), "50% {off");
    }

    #[test]
    fn parity_reports_missing_keys() {
        let catalog = two_locale_catalog();
        let err = catalog.check_parity().unwrap_err();
        assert_eq!(
            err,
            I18nError::MissingKeys {
                locale: "pt-br".into(),
                keys: vec!["skills.count".into()],
            }
        );
        let report = catalog.coverage_report();
        assert_eq!(report.total_keys, 3);
        assert!(!report.is_complete());
    }
}
