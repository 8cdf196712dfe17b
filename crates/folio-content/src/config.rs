#![forbid(unsafe_code)]

//! Site configuration.
//!
//! The defaults ship inside the binary as `site.toml`; hosts may hand the
//! runner a replacement document. Every load goes through
//! [`SiteConfig::validate`], so a config that parses but is unusable is
//! rejected up front rather than misbehaving at runtime.

use std::time::Duration;

use folio_runtime::RetryPolicy;
use folio_scene::BackgroundConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const EMBEDDED: &str = include_str!("../site.toml");

/// Errors raised while loading a [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// External profile links shown in About and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Twitter,
}

impl SocialKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Twitter => "Twitter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
}

/// Who the site is about and how to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub email: String,
    /// Display form, e.g. `+55 11 99999-9999`.
    pub phone: String,
    /// Digits only, as used by `wa.me` links.
    pub whatsapp: String,
    pub portfolio_url: String,
    pub avatar_url: String,
    pub hero_image_url: String,
    pub more_projects_url: String,
    pub copyright_year: u16,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl Profile {
    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }

    #[must_use]
    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with every character but digits and a leading `+` removed.
    #[must_use]
    pub fn tel_url(&self) -> String {
        let mut out = String::from("tel:");
        for (i, c) in self.phone.trim().chars().enumerate() {
            if c.is_ascii_digit() || (i == 0 && c == '+') {
                out.push(c);
            }
        }
        out
    }
}

/// Contact form behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactSettings {
    /// Delivery endpoint. `None` keeps the simulated transport.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u64,
    pub success_display_ms: u64,
    pub timeout_ms: u64,
    pub toast_ms: u64,
    pub retry: RetryPolicy,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulated_delay_ms: 1000,
            success_display_ms: 3000,
            timeout_ms: 10_000,
            toast_ms: 4000,
            retry: RetryPolicy::no_retry(),
        }
    }
}

impl ContactSettings {
    #[must_use]
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    #[must_use]
    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

/// Everything configurable about the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    pub profile: Profile,
    #[serde(default)]
    pub contact: ContactSettings,
    #[serde(default)]
    pub background: BackgroundConfig,
}

impl SiteConfig {
    /// The configuration compiled into the binary.
    ///
    /// # Errors
    ///
    /// Only if the embedded `site.toml` is broken, which the test suite
    /// rules out.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] for syntax or schema errors,
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Validation(errors));
        }
        debug!(
            name = %config.profile.name,
            endpoint = config.contact.endpoint.as_deref().unwrap_or("simulated"),
            "site config loaded"
        );
        Ok(config)
    }

    /// Check every section. An empty list means the config is usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let profile = &self.profile;
        if profile.name.trim().is_empty() {
            errors.push("profile.name must not be empty".into());
        }
        if !profile.email.contains('@') {
            errors.push(format!("profile.email is not an address: {:?}", profile.email));
        }
        if profile.whatsapp.is_empty() || !profile.whatsapp.chars().all(|c| c.is_ascii_digit()) {
            errors.push(format!(
                "profile.whatsapp must be digits only, got {:?}",
                profile.whatsapp
            ));
        }
        let contact = &self.contact;
        for (field, value) in [
            ("simulated_delay_ms", contact.simulated_delay_ms),
            ("success_display_ms", contact.success_display_ms),
            ("timeout_ms", contact.timeout_ms),
            ("toast_ms", contact.toast_ms),
        ] {
            if value == 0 {
                errors.push(format!("contact.{field} must be > 0"));
            }
        }
        if let Some(endpoint) = &contact.endpoint {
            if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
                errors.push(format!("contact.endpoint must be an http(s) URL, got {endpoint:?}"));
            }
        }
        errors.extend(self.background.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_runtime::BackoffStrategy;

    #[test]
    fn embedded_config_is_valid() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.profile.name, "John Doe");
        assert_eq!(config.profile.social.len(), 3);
        assert_eq!(config.contact.simulated_delay(), Duration::from_millis(1000));
        assert_eq!(config.contact.success_display(), Duration::from_millis(3000));
        assert_eq!(config.contact.endpoint, None);
        assert_eq!(
            config.contact.retry.backoff,
            BackoffStrategy::Exponential {
                base_ms: 500,
                max_ms: 4000
            }
        );
        assert_eq!(config.background, BackgroundConfig::default());
    }

    #[test]
    fn contact_links() {
        let profile = SiteConfig::embedded().unwrap().profile;
        assert_eq!(profile.whatsapp_url(), "https://wa.me/5511999999999");
        assert_eq!(profile.mailto_url(), "mailto:your.email@example.com");
        assert_eq!(profile.tel_url(), "tel:+5511999999999");
    }

    #[test]
    fn minimal_document_takes_defaults() {
        let doc = r#"
            [profile]
            name = "Ana"
            email = "ana@example.com"
            phone = "+1 555 0100"
            whatsapp = "15550100"
            portfolio_url = "https://ana.dev"
            avatar_url = "a.png"
            hero_image_url = "h.png"
            more_projects_url = "https://github.com/ana"
            copyright_year = 2025
        "#;
        let config = SiteConfig::from_toml_str(doc).unwrap();
        assert_eq!(config.contact, ContactSettings::default());
        assert!(config.profile.social.is_empty());
    }

    #[test]
    fn out_of_range_values_rejected() {
        let doc = EMBEDDED
            .replace("simulated_delay_ms = 1000", "simulated_delay_ms = 0")
            .replace("count = 8", "count = 0");
        let err = SiteConfig::from_toml_str(&doc).unwrap_err();
        let ConfigError::Validation(errors) = err else {
            panic!("expected validation error, got {err}");
        };
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors[0].contains("simulated_delay_ms"));
        assert!(errors[1].contains("background.count"));
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let doc = EMBEDDED.replace("[contact]", "[contact]\nbogus = 1");
        assert!(matches!(
            SiteConfig::from_toml_str(&doc),
            Err(ConfigError::Toml(_))
        ));
    }
}
