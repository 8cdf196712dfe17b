#![forbid(unsafe_code)]

//! The two display languages the site ships.

use std::fmt;
use std::str::FromStr;

use crate::catalog::I18nError;

/// A supported display language.
///
/// Unsupported tags cannot be represented, so nothing outside this set is
/// ever persisted or rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    /// Every supported locale, in language-menu order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::PtBr];

    /// Canonical storage and catalog tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-br",
        }
    }

    /// Value for the document `lang` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::PtBr => "pt-BR",
        }
    }

    /// Name of the language in itself, for the language menu.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::PtBr => "Português",
        }
    }

    /// Parse one of the supported tags (case-insensitive, `_` accepted).
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" => Some(Self::En),
            "pt-br" => Some(Self::PtBr),
            _ => None,
        }
    }

    /// Pick a locale from the browser-reported language.
    ///
    /// Any Portuguese variant selects [`Locale::PtBr`]; everything else,
    /// including an empty report, selects [`Locale::En`].
    #[must_use]
    pub fn detect(browser_language: &str) -> Self {
        if browser_language.trim().to_ascii_lowercase().starts_with("pt") {
            Self::PtBr
        } else {
            Self::En
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| I18nError::UnknownLocale(s.to_owned()))
    }
}
