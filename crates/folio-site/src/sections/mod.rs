#![forbid(unsafe_code)]

//! Page sections.
//!
//! Each view is a pure function of a [`ViewContext`] (translator, profile,
//! reveal state) plus the section's own state, writing into a [`Frame`].
//! The locale reaches every section through the translator; nothing reads
//! it from ambient state.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod skills;

use folio_content::Profile;
use folio_i18n::Translator;
use folio_runtime::Frame;

use crate::reveal::{Entrance, RevealTracker};

pub use nav::NavigationState;
pub use projects::{ProjectFilter, ProjectsState};
pub use skills::SkillsState;

/// In-page navigation targets, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    /// Element id, also the `#fragment`.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn parse(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    #[must_use]
    pub const fn nav_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Projects => "nav.projects",
            Self::Skills => "nav.skills",
            Self::Contact => "nav.contact",
        }
    }
}

/// What every section view reads besides its own state.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub t: &'a Translator,
    pub profile: &'a Profile,
    pub reveal: &'a RevealTracker,
}

impl ViewContext<'_> {
    /// `class` and `style` attributes for a reveal-tracked element.
    #[must_use]
    pub fn reveal_attrs(&self, id: &str, entrance: Entrance) -> (String, String) {
        let class = if self.reveal.is_revealed(id) {
            "reveal is-visible"
        } else {
            "reveal"
        };
        (class.to_owned(), entrance.css_vars())
    }
}

/// Title and subtitle shared by the content sections.
pub(crate) fn section_header(frame: &mut Frame, title: &str, subtitle: &str) {
    frame.with("div", &[("class", "section-header")], |f| {
        f.element("h2", &[("class", "section-title")], title);
        f.element("p", &[("class", "section-subtitle")], subtitle);
    });
}

/// Open a `<section>` with reveal attributes; the caller closes it.
pub(crate) fn open_section(frame: &mut Frame, ctx: &ViewContext<'_>, section: Section) {
    let (class, style) = ctx.reveal_attrs(section.anchor(), Entrance::SECTION);
    frame.open(
        "section",
        &[
            ("id", section.anchor()),
            ("class", class.as_str()),
            ("style", style.as_str()),
            ("data-reveal", section.anchor()),
        ],
    );
}
