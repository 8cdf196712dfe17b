#![forbid(unsafe_code)]

//! Content for the folio site: configuration, translations, projects and
//! skills.
//!
//! Everything here is data. Sections read it through a
//! [`Translator`](folio_i18n::Translator) and never mutate it.

pub mod config;
pub mod projects;
pub mod skills;
pub mod translations;

pub use config::{ConfigError, ContactSettings, Profile, SiteConfig, SocialKind, SocialLink};
pub use projects::{Project, ProjectCategory, project, projects};
pub use skills::{Skill, SkillCategory, SkillLevel, skills, skills_in};
pub use translations::translations;
