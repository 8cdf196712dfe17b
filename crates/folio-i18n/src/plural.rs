#![forbid(unsafe_code)]

//! Plural categories and the selection rules of the site's languages.
//!
//! Only integer counts are supported; the site never pluralizes fractional
//! quantities. Negative counts are categorized by their absolute value.

/// CLDR plural category. English and Portuguese only distinguish two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    One,
    Other,
}

/// Plural selection rule per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// `one` for 1, `other` otherwise.
    English,
    /// Brazilian Portuguese: `one` for 0 and 1, `other` otherwise.
    Portuguese,
}

impl PluralRule {
    /// Pick the rule for a BCP-47-ish locale tag.
    ///
    /// Anything that is not Portuguese falls back to [`PluralRule::English`].
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        let primary = locale.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("pt") {
            Self::Portuguese
        } else {
            Self::English
        }
    }

    /// Categorize an integer count.
    #[must_use]
    pub fn categorize(self, count: i64) -> PluralCategory {
        let n = count.unsigned_abs();
        let singular = match self {
            Self::English => n == 1,
            Self::Portuguese => n <= 1,
        };
        if singular {
            PluralCategory::One
        } else {
            PluralCategory::Other
        }
    }
}

/// Plural variants of one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    pub one: String,
    pub other: String,
}

impl PluralForms {
    #[must_use]
    pub fn one_other(one: impl Into<String>, other: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
        }
    }

    /// Select the text for a category.
    #[must_use]
    pub fn select(&self, category: PluralCategory) -> &str {
        match category {
            PluralCategory::One => &self.one,
            PluralCategory::Other => &self.other,
        }
    }
}
