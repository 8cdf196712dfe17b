#![forbid(unsafe_code)]

//! Skill tabs with proficiency bars.

use folio_content::{SkillCategory, skills_in};
use folio_runtime::Frame;

use super::{Section, ViewContext, open_section, section_header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillsState {
    selected: SkillCategory,
}

impl Default for SkillsState {
    fn default() -> Self {
        Self {
            selected: SkillCategory::Frontend,
        }
    }
}

impl SkillsState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected(&self) -> SkillCategory {
        self.selected
    }

    pub fn select(&mut self, category: SkillCategory) {
        self.selected = category;
    }
}

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>, state: &SkillsState) {
    let t = ctx.t;
    open_section(frame, ctx, Section::Skills);
    section_header(frame, &t.t("skills.title"), &t.t("skills.subtitle"));

    frame.with("div", &[("class", "skill-tabs"), ("role", "tablist")], |f| {
        for category in SkillCategory::ALL {
            let selected = if category == state.selected { "true" } else { "false" };
            f.element(
                "button",
                &[
                    ("type", "button"),
                    ("role", "tab"),
                    ("aria-selected", selected),
                    ("data-skills", category.tag()),
                ],
                &t.t(category.label_key()),
            );
        }
    });

    let count = skills_in(state.selected).count();
    let count = i64::try_from(count).unwrap_or(i64::MAX);
    frame.with("div", &[("class", "skill-panel"), ("role", "tabpanel")], |f| {
        f.element("h3", &[], &t.t(state.selected.label_key()));
        f.element("p", &[("class", "skill-count")], &t.t_plural("skills.count", count));
        f.open("ul", &[("class", "skill-list")]);
        for skill in skills_in(state.selected) {
            let band = skill.band();
            let width = format!("width:{}%", skill.level);
            let level = skill.level.to_string();
            let bar_class = format!("skill-bar {}", band.color_class());
            f.with("li", &[("class", "skill")], |f| {
                f.with("div", &[("class", "skill-head")], |f| {
                    f.element("span", &[("class", "skill-name")], skill.name);
                    f.element("span", &[("class", "skill-level")], &t.t(band.label_key()));
                });
                f.with(
                    "div",
                    &[
                        ("class", "skill-track"),
                        ("role", "progressbar"),
                        ("aria-valuemin", "0"),
                        ("aria-valuemax", "100"),
                        ("aria-valuenow", level.as_str()),
                    ],
                    |f| {
                        f.element(
                            "div",
                            &[("class", bar_class.as_str()), ("style", width.as_str())],
                            "",
                        );
                    },
                );
            });
        }
        f.close("ul");
    });
    frame.close("section");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealTracker;
    use crate::sections::test_support::{config, translator};
    use folio_i18n::Locale;

    fn render(state: &SkillsState, locale: Locale) -> String {
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
    fn default_tab_is_frontend() {
        let html = render(&SkillsState::new(), Locale::En);
        assert!(html.contains("5 skills in this category"));
        assert!(html.contains("TypeScript"));
        assert!(html.contains("bg-emerald-500"));
        assert!(!html.contains("Docker"));
    }

    #[test]
    fn languages_tab_in_portuguese() {
        let mut state = SkillsState::new();
        state.select(SkillCategory::Languages);
        let html = render(&state, Locale::PtBr);
        assert!(html.contains("3 habilidades nesta categoria"));
        assert!(html.contains("Portuguese"));
        assert!(html.contains("Especialista"));
        assert!(html.contains("width:100%"));
    }
}
