#![forbid(unsafe_code)]

//! Project grid with category filter, expandable cards and a details dialog.

use std::collections::BTreeSet;

use folio_content::{Project, ProjectCategory, project, projects};
use folio_runtime::Frame;

use super::{Section, ViewContext, open_section, section_header};
use crate::reveal::Entrance;

/// Card entrance delay step, in milliseconds.
const CARD_STAGGER_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Tab order.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Category(ProjectCategory::Web),
        Self::Category(ProjectCategory::Mobile),
        Self::Category(ProjectCategory::Other),
    ];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(c) => c.tag(),
        }
    }

    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        if tag == "all" {
            Some(Self::All)
        } else {
            ProjectCategory::parse(tag).map(Self::Category)
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "projects.filter.all",
            Self::Category(c) => c.label_key(),
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => project.category == c,
        }
    }
}

/// Reveal id of a project card.
#[must_use]
pub fn card_reveal_id(project: &Project) -> String {
    format!("project-{}", project.id)
}

#[derive(Debug, Clone, Default)]
pub struct ProjectsState {
    filter: ProjectFilter,
    details: Option<u32>,
    expanded: BTreeSet<u32>,
}

impl ProjectsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    /// Projects passing the current filter, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &'static Project> + '_ {
        projects().iter().filter(|p| self.filter.matches(p))
    }

    /// Open the details dialog. Unknown ids leave the dialog closed.
    pub fn open_details(&mut self, id: u32) -> bool {
        self.details = project(id).map(|p| p.id);
        self.details.is_some()
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    #[must_use]
    pub fn details(&self) -> Option<&'static Project> {
        self.details.and_then(project)
    }

    /// Toggle the "view more" state of a card.
    pub fn toggle_expanded(&mut self, id: u32) {
        if !self.expanded.remove(&id) && project(id).is_some() {
            self.expanded.insert(id);
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: u32) -> bool {
        self.expanded.contains(&id)
    }
}

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>, state: &ProjectsState) {
    let t = ctx.t;
    open_section(frame, ctx, Section::Projects);
    section_header(frame, &t.t("projects.title"), &t.t("projects.subtitle"));

    frame.with("div", &[("class", "filter-tabs"), ("role", "tablist")], |f| {
        for filter in ProjectFilter::ALL {
            let selected = if filter == state.filter { "true" } else { "false" };
            f.element(
                "button",
                &[
                    ("type", "button"),
                    ("role", "tab"),
                    ("aria-selected", selected),
                    ("data-filter", filter.tag()),
                ],
                &t.t(filter.label_key()),
            );
        }
    });

    frame.open("div", &[("class", "project-grid")]);
    let mut shown = 0usize;
    for project in state.visible() {
        card(frame, ctx, state, project, shown);
        shown += 1;
    }
    if shown == 0 {
        frame.element("p", &[("class", "empty")], &t.t("projects.empty"));
    }
    frame.close("div");

    frame.element(
        "a",
        &[
            ("class", "button button-outline"),
            ("href", ctx.profile.more_projects_url.as_str()),
            ("target", "_blank"),
            ("rel", "noopener noreferrer"),
        ],
        &t.t("projects.viewMoreProjects"),
    );

    if let Some(project) = state.details() {
        details_dialog(frame, ctx, project);
    }
    frame.close("section");
}

fn card(
    frame: &mut Frame,
    ctx: &ViewContext<'_>,
    state: &ProjectsState,
    project: &Project,
    index: usize,
) {
    let t = ctx.t;
    let reveal_id = card_reveal_id(project);
    let (class, style) =
        ctx.reveal_attrs(&reveal_id, Entrance::SECTION.staggered(index, CARD_STAGGER_MS));
    let class = format!("project-card {class}");
    let id = project.id.to_string();
    let title = t.t(&project.title_key()).into_owned();
    let expanded = state.is_expanded(project.id);

    frame.open(
        "article",
        &[
            ("class", class.as_str()),
            ("style", style.as_str()),
            ("data-reveal", reveal_id.as_str()),
            ("data-project", id.as_str()),
        ],
    );
    frame.void(
        "img",
        &[
            ("src", project.image_url),
            ("alt", title.as_str()),
            ("loading", "lazy"),
        ],
    );
    frame.with("div", &[("class", "card-body")], |f| {
        f.with("h3", &[], |f| {
            f.text(&title);
            if project.real {
                f.raw(" ");
                f.element("span", &[("class", "badge")], &t.t("projects.real"));
            }
        });
        f.element("p", &[], &t.t(&project.description_key()));
        if expanded {
            f.element("p", &[("class", "card-details")], &t.t(&project.details_key()));
        }
        tags(f, project);
        f.with("div", &[("class", "card-actions")], |f| {
            let (toggle_key, aria) = if expanded {
                ("projects.viewLess", "true")
            } else {
                ("projects.viewMore", "false")
            };
            f.element(
                "button",
                &[
                    ("type", "button"),
                    ("aria-expanded", aria),
                    ("data-action", "toggle-expanded"),
                    ("data-project", id.as_str()),
                ],
                &t.t(toggle_key),
            );
            f.element(
                "button",
                &[
                    ("type", "button"),
                    ("data-action", "open-details"),
                    ("data-project", id.as_str()),
                ],
                &t.t("projects.viewDetails"),
            );
            links(f, ctx, project);
        });
    });
    frame.close("article");
}

fn tags(frame: &mut Frame, project: &Project) {
    frame.with("ul", &[("class", "tags")], |f| {
        for tag in project.tags {
            f.element("li", &[("class", "tag")], tag);
        }
    });
}

fn links(frame: &mut Frame, ctx: &ViewContext<'_>, project: &Project) {
    let external = [
        (project.live_url, "projects.visitSite"),
        (project.source_url, "projects.viewCode"),
    ];
    for (url, key) in external {
        let Some(url) = url else {
            continue;
        };
        frame.element(
            "a",
            &[
                ("href", url),
                ("target", "_blank"),
                ("rel", "noopener noreferrer"),
            ],
            &ctx.t.t(key),
        );
    }
}

fn details_dialog(frame: &mut Frame, ctx: &ViewContext<'_>, project: &Project) {
    let t = ctx.t;
    let title = t.t(&project.title_key()).into_owned();
    frame.with(
        "div",
        &[
            ("class", "dialog"),
            ("role", "dialog"),
            ("aria-modal", "true"),
            ("aria-label", title.as_str()),
        ],
        |f| {
            f.void("img", &[("src", project.image_url), ("alt", title.as_str())]);
            f.element("h3", &[], &title);
            f.element("p", &[], &t.t(&project.details_key()));
            tags(f, project);
            f.with("div", &[("class", "dialog-actions")], |f| {
                links(f, ctx, project);
                f.element(
                    "button",
                    &[("type", "button"), ("data-action", "close-details")],
                    &t.t("projects.closeDetails"),
                );
            });
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealTracker;
    use crate::sections::test_support::{config, translator};
    use folio_i18n::Locale;

    fn render(state: &ProjectsState, locale: Locale) -> String {
        let t = translator(locale);
        let profile = config().profile;
        let reveal = RevealTracker::new();
        let mut frame = Frame::new();
        view(
            &mut frame,
            &ViewContext {
                t: &t,
                profile: &profile,
                reveal: &reveal,
            },
            state,
        );
        frame.into_string()
    }

    #[test]
    fn filter_selects_category() {
        let mut state = ProjectsState::new();
        assert_eq!(state.visible().count(), 6);
        state.set_filter(ProjectFilter::Category(ProjectCategory::Mobile));
        let ids: Vec<u32> = state.visible().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 6]);
        state.set_filter(ProjectFilter::parse("other").unwrap());
        assert_eq!(state.visible().count(), 1);
        assert_eq!(ProjectFilter::parse("games"), None);
    }

    #[test]
    fn details_only_for_known_projects() {
        let mut state = ProjectsState::new();
        assert!(!state.open_details(42));
        assert!(state.details().is_none());
        assert!(state.open_details(3));
        assert_eq!(state.details().map(|p| p.slug), Some("weather"));
        let html = render(&state, Locale::PtBr);
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("OpenWeatherMap"));
        state.close_details();
        assert!(!render(&state, Locale::PtBr).contains("role=\"dialog\""));
    }

    #[test]
    fn expanded_card_shows_details_text() {
        let mut state = ProjectsState::new();
        state.toggle_expanded(1);
        assert!(state.is_expanded(1));
        let html = render(&state, Locale::En);
        assert!(html.contains("card-details"));
        assert!(html.contains("View Less"));
        state.toggle_expanded(1);
        assert!(!state.is_expanded(1));
        state.toggle_expanded(99);
        assert!(!state.is_expanded(99));
    }

    #[test]
    fn grid_uses_translated_titles() {
        let html = render(&ProjectsState::new(), Locale::PtBr);
        assert!(html.contains("Painel de Clima"));
        assert!(html.contains("Projeto real"));
        assert_eq!(html.matches("<article").count(), 6);
    }
}
