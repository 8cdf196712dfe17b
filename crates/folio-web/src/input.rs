#![forbid(unsafe_code)]

//! JSON input parser for host events.
//!
//! The page script listens for DOM events (clicks on `data-*` controls,
//! form input, scroll, intersection reports, canvas resizes) and forwards
//! each one as a small JSON object tagged by `kind`:
//!
//! ```json
//! {"kind":"field","field":"email","value":"ana@example.com"}
//! {"kind":"scroll","y":420.0,"max":3000.0}
//! {"kind":"language","locale":"pt-BR"}
//! ```
//!
//! [`parse_encoded_input`] turns that into a [`HostInput`]. Most inputs map
//! to a page message via [`HostInput::into_message`]; `resize` is consumed by
//! the runner itself because it targets the background surface.

use folio_content::SkillCategory;
use folio_i18n::Locale;
use folio_site::{AppMsg, ContactMsg, Field, ProjectFilter, Section};
use serde::Deserialize;

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON, unknown `kind`, or missing fields.
    Json(String),
    /// Well-formed input naming something the page does not have.
    UnknownValue { field: &'static str, value: String },
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::UnknownValue { field, value } => write!(f, "unknown {field}: {value:?}"),
        }
    }
}

impl std::error::Error for InputParseError {}

/// Deserialization target matching the page script's event schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawInput {
    Field { field: String, value: String },
    Submit,
    Retry,
    Scroll { y: f64, max: f64 },
    Visible { id: String, ratio: f32 },
    Language { locale: String },
    LanguageMenu,
    Menu,
    Nav { section: String },
    Filter { filter: String },
    Skills { category: String },
    Details { id: u32 },
    CloseDetails,
    Expand { id: u32 },
    DismissToast,
    Resize { width: u32, height: u32 },
    Unmount,
}

/// A validated host event.
#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    /// Routed to the page model.
    Page(AppMsg),
    /// Background surface changed size.
    Resize { width: u32, height: u32 },
}

impl HostInput {
    /// The page message this input carries, if any.
    #[must_use]
    pub fn into_message(self) -> Option<AppMsg> {
        match self {
            Self::Page(msg) => Some(msg),
            Self::Resize { .. } => None,
        }
    }
}

fn unknown(field: &'static str, value: String) -> InputParseError {
    InputParseError::UnknownValue { field, value }
}

/// Parse one JSON-encoded host event.
///
/// # Errors
///
/// [`InputParseError::Json`] for malformed JSON or an unknown `kind`;
/// [`InputParseError::UnknownValue`] when a field, locale, section, filter
/// or skill category tag is not one the page knows.
pub fn parse_encoded_input(json: &str) -> Result<HostInput, InputParseError> {
    let raw: RawInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;

    let msg = match raw {
        RawInput::Field { field, value } => {
            let Some(field_id) = Field::parse(&field) else {
                return Err(unknown("field", field));
            };
            AppMsg::Contact(ContactMsg::Edit(field_id, value))
        }
        RawInput::Submit => AppMsg::Contact(ContactMsg::Submit),
        RawInput::Retry => AppMsg::Contact(ContactMsg::Retry),
        RawInput::Scroll { y, max } => AppMsg::Scrolled { y, max },
        RawInput::Visible { id, ratio } => AppMsg::Visible { id, ratio },
        RawInput::Language { locale } => match Locale::parse(&locale) {
            Some(locale) => AppMsg::SelectLanguage(locale),
            None => return Err(unknown("locale", locale)),
        },
        RawInput::LanguageMenu => AppMsg::ToggleLanguageMenu,
        RawInput::Menu => AppMsg::ToggleMenu,
        RawInput::Nav { section } => match Section::parse(&section) {
            Some(section) => AppMsg::Navigate(section),
            None => return Err(unknown("section", section)),
        },
        RawInput::Filter { filter } => match ProjectFilter::parse(&filter) {
            Some(filter) => AppMsg::Filter(filter),
            None => return Err(unknown("filter", filter)),
        },
        RawInput::Skills { category } => match SkillCategory::parse(&category) {
            Some(category) => AppMsg::SelectSkills(category),
            None => return Err(unknown("skill category", category)),
        },
        RawInput::Details { id } => AppMsg::OpenDetails(id),
        RawInput::CloseDetails => AppMsg::CloseDetails,
        RawInput::Expand { id } => AppMsg::ToggleExpanded(id),
        RawInput::DismissToast => AppMsg::DismissToast,
        RawInput::Resize { width, height } => return Ok(HostInput::Resize { width, height }),
        RawInput::Unmount => AppMsg::Unmount,
    };
    Ok(HostInput::Page(msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ProjectCategory;
    use pretty_assertions::assert_eq;

    fn page(json: &str) -> AppMsg {
        parse_encoded_input(json)
            .unwrap()
            .into_message()
            .unwrap_or_else(|| panic!("no page message for {json}"))
    }

    #[test]
    fn field_edit() {
        assert_eq!(
            page(r#"{"kind":"field","field":"email","value":"ana@example.com"}"#),
            AppMsg::Contact(ContactMsg::Edit(Field::Email, "ana@example.com".into()))
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert_eq!(
            parse_encoded_input(r#"{"kind":"field","field":"phone","value":"1"}"#),
            Err(InputParseError::UnknownValue {
                field: "field",
                value: "phone".into()
            })
        );
    }

    #[test]
    fn language_accepts_html_tags() {
        assert_eq!(
            page(r#"{"kind":"language","locale":"pt-BR"}"#),
            AppMsg::SelectLanguage(Locale::PtBr)
        );
        assert!(matches!(
            parse_encoded_input(r#"{"kind":"language","locale":"fr"}"#),
            Err(InputParseError::UnknownValue { field: "locale", .. })
        ));
    }

    #[test]
    fn navigation_accepts_fragments() {
        assert_eq!(
            page(r##"{"kind":"nav","section":"#contact"}"##),
            AppMsg::Navigate(Section::Contact)
        );
    }

    #[test]
    fn filters_and_tabs() {
        assert_eq!(
            page(r#"{"kind":"filter","filter":"mobile"}"#),
            AppMsg::Filter(ProjectFilter::Category(ProjectCategory::Mobile))
        );
        assert_eq!(page(r#"{"kind":"filter","filter":"all"}"#), AppMsg::Filter(ProjectFilter::All));
        assert_eq!(
            page(r#"{"kind":"skills","category":"tools"}"#),
            AppMsg::SelectSkills(SkillCategory::Tools)
        );
    }

    #[test]
    fn scroll_and_visibility() {
        assert_eq!(
            page(r#"{"kind":"scroll","y":120.0,"max":2400.0}"#),
            AppMsg::Scrolled { y: 120.0, max: 2400.0 }
        );
        assert_eq!(
            page(r#"{"kind":"visible","id":"about","ratio":0.5}"#),
            AppMsg::Visible {
                id: "about".into(),
                ratio: 0.5
            }
        );
    }

    #[test]
    fn unit_kinds() {
        assert_eq!(page(r#"{"kind":"submit"}"#), AppMsg::Contact(ContactMsg::Submit));
        assert_eq!(page(r#"{"kind":"retry"}"#), AppMsg::Contact(ContactMsg::Retry));
        assert_eq!(page(r#"{"kind":"menu"}"#), AppMsg::ToggleMenu);
        assert_eq!(page(r#"{"kind":"language_menu"}"#), AppMsg::ToggleLanguageMenu);
        assert_eq!(page(r#"{"kind":"close_details"}"#), AppMsg::CloseDetails);
        assert_eq!(page(r#"{"kind":"dismiss_toast"}"#), AppMsg::DismissToast);
        assert_eq!(page(r#"{"kind":"unmount"}"#), AppMsg::Unmount);
    }

    #[test]
    fn resize_stays_with_the_runner() {
        let input = parse_encoded_input(r#"{"kind":"resize","width":800,"height":600}"#).unwrap();
        assert_eq!(
            input,
            HostInput::Resize {
                width: 800,
                height: 600
            }
        );
        assert_eq!(input.into_message(), None);
    }

    #[test]
    fn malformed_and_unknown_kinds_are_json_errors() {
        assert!(matches!(parse_encoded_input("not json"), Err(InputParseError::Json(_))));
        assert!(matches!(
            parse_encoded_input(r#"{"kind":"accessibility","screen_reader":true}"#),
            Err(InputParseError::Json(_))
        ));
        assert!(matches!(
            parse_encoded_input(r#"{"kind":"details"}"#),
            Err(InputParseError::Json(_))
        ));
    }
}
