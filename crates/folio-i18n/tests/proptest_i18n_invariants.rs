//! Property-based invariant tests for the i18n subsystem.
//!
//! 1. Plural rules are deterministic and sign-agnostic
//! 2. English: One for ±1, Other otherwise
//! 3. Portuguese: One for |n| <= 1, Other otherwise
//! 4. Interpolation with no placeholders is identity
//! 5. Interpolation is not recursive
//! 6. Missing args leave placeholder tokens intact
//! 7. Catalog: missing key always returns None
//! 8. Translator: missing key always returns the key
//! 9. Locale::parse never panics and only accepts supported tags
//! 10. Coverage report percentage is bounded

use std::sync::Arc;

use folio_i18n::catalog::{LocaleStrings, StringCatalog};
use folio_i18n::plural::{PluralCategory, PluralForms, PluralRule};
use folio_i18n::{Locale, Translator};
use proptest::prelude::*;

const RULES: [PluralRule; 2] = [PluralRule::English, PluralRule::Portuguese];

// ═════════════════════════════════════════════════════════════════════════
// 1. Plural rules are deterministic and sign-agnostic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn plural_rules_deterministic(count in -100_000i64..=100_000) {
        for rule in RULES {
            prop_assert_eq!(rule.categorize(count), rule.categorize(count));
            prop_assert_eq!(rule.categorize(count), rule.categorize(-count));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. English and Portuguese singular ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn english_one_or_other(count in any::<i64>()) {
        let cat = PluralRule::English.categorize(count);
        if count.unsigned_abs() == 1 {
            prop_assert_eq!(cat, PluralCategory::One);
        } else {
            prop_assert_eq!(cat, PluralCategory::Other);
        }
    }

    #[test]
    fn portuguese_zero_and_one_are_singular(count in any::<i64>()) {
        let cat = PluralRule::Portuguese.categorize(count);
        if count.unsigned_abs() <= 1 {
            prop_assert_eq!(cat, PluralCategory::One);
        } else {
            prop_assert_eq!(cat, PluralCategory::Other);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-6. Interpolation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn interpolation_no_placeholders_identity(text in "[a-zA-Z0-9 .,!?]*") {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("test", text.as_str());
        catalog.add_locale("en", en);
        let result = catalog.format("en", "test", &[("name", "x")]);
        prop_assert_eq!(result.as_deref(), Some(text.as_str()));
    }

    #[test]
    fn missing_args_preserve_tokens(name in "[a-z]{1,10}") {
        let template = format!("Value: {{{name}}}");
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert("test", template.as_str());
        catalog.add_locale("en", en);
        let result = catalog.format("en", "test", &[("zz_unused", "1")]);
        prop_assert_eq!(result, Some(template.clone()));
    }
}

#[test]
fn interpolation_not_recursive() {
    let mut catalog = StringCatalog::new();
    let mut en = LocaleStrings::new();
    en.insert("test", "Hello {name}!");
    catalog.add_locale("en", en);

    let result = catalog.format("en", "test", &[("name", "{name}")]);
    assert_eq!(result, Some("Hello {name}!".into()));

    let result2 = catalog.format("en", "test", &[("name", "{other}"), ("other", "no")]);
    assert_eq!(result2, Some("Hello {other}!".into()));
}

// ═════════════════════════════════════════════════════════════════════════
// 7-8. Missing keys
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn missing_key_returns_none(key in "[a-z]{1,20}") {
        let catalog = StringCatalog::new();
        prop_assert_eq!(catalog.get("en", &key), None);
        prop_assert_eq!(catalog.get_plural("en", &key, 1), None);
        prop_assert_eq!(catalog.format("en", &key, &[]), None);
    }

    #[test]
    fn translator_missing_key_is_identity(key in "[a-z.]{1,30}") {
        let mut en = LocaleStrings::new();
        en.insert("KNOWN", "known");
        let mut catalog = StringCatalog::new();
        catalog.add_locale("en", en);
        let t = Translator::new(Arc::new(catalog), Locale::En);
        let translated = t.t(&key);
        prop_assert_eq!(translated.as_ref(), key.as_str());
    }

    #[test]
    fn format_plural_injects_count(count in -1000i64..=1000) {
        let mut catalog = StringCatalog::new();
        let mut en = LocaleStrings::new();
        en.insert_plural("items", PluralForms::one_other("{count} item", "{count} items"));
        catalog.add_locale("en", en);
        let text = catalog.format_plural("en", "items", count, &[]);
        prop_assert!(text.is_some());
        prop_assert!(text.unwrap_or_default().contains(&count.to_string()));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Locale parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn locale_parse_only_accepts_supported(tag in ".*") {
        if let Some(locale) = Locale::parse(&tag) {
            prop_assert!(Locale::ALL.contains(&locale));
            prop_assert_eq!(
                tag.trim().to_ascii_lowercase().replace('_', "-"),
                locale.tag()
            );
        }
        let _ = Locale::detect(&tag);
        let _ = PluralRule::for_locale(&tag);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 10. Coverage report percentage is bounded
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn coverage_percent_bounded(n_keys in 0usize..=10, n_locales in 1usize..=3) {
        let mut catalog = StringCatalog::new();
        for locale_idx in 0..n_locales {
            let mut ls = LocaleStrings::new();
            for k in 0..n_keys {
                if k % (locale_idx + 1) == 0 {
                    ls.insert(format!("key_{k}"), format!("val_{k}"));
                }
            }
            catalog.add_locale(&format!("l{locale_idx}"), ls);
        }

        let report = catalog.coverage_report();
        for lc in &report.locales {
            prop_assert!((0.0..=100.0).contains(&lc.coverage_percent));
            prop_assert_eq!(lc.present + lc.missing.len(), report.total_keys);
        }
    }
}
