#![forbid(unsafe_code)]

//! Internationalization (i18n) foundation for the folio site.
//!
//! Provides externalized string storage with key-based lookup,
//! locale fallback chains, ICU-style plural forms, and variable
//! interpolation.
//!
//! # Role in folio
//! `folio-i18n` isolates localization concerns so section views can stay
//! pure functions of `(locale, content)`. It does not depend on rendering or
//! runtime, keeping the localization layer reusable and testable.

pub mod catalog;
pub mod locale;
pub mod plural;
pub mod translator;

pub use catalog::{
    CoverageReport, I18nError, LocaleCoverage, LocaleStrings, StringCatalog, StringEntry,
};
pub use locale::Locale;
pub use plural::{PluralCategory, PluralForms, PluralRule};
pub use translator::Translator;
