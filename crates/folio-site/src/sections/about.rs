#![forbid(unsafe_code)]

use folio_runtime::Frame;

use super::{Section, ViewContext, open_section, section_header};

const CARDS: [(&str, &str); 3] = [
    ("about.experience", "about.experienceText"),
    ("about.education", "about.educationText"),
    ("about.interests", "about.interestsText"),
];

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>) {
    let t = ctx.t;
    open_section(frame, ctx, Section::About);
    section_header(frame, &t.t("about.title"), &t.t("about.subtitle"));
    frame.with("div", &[("class", "about-grid")], |f| {
        f.with("div", &[("class", "about-avatar")], |f| {
            f.void(
                "img",
                &[
                    ("src", ctx.profile.avatar_url.as_str()),
                    ("alt", &*t.t("about.avatarAlt")),
                    ("loading", "lazy"),
                ],
            );
        });
        f.with("div", &[("class", "about-body")], |f| {
            f.element("p", &[("class", "about-bio")], &t.t("about.bio"));
            f.with("div", &[("class", "about-cards")], |f| {
                for (title, body) in CARDS {
                    f.with("article", &[("class", "card")], |f| {
                        f.element("h3", &[], &t.t(title));
                        f.element("p", &[], &t.t(body));
                    });
                }
            });
            f.with("ul", &[("class", "social-links")], |f| {
                for link in &ctx.profile.social {
                    f.with("li", &[], |f| {
                        f.element(
                            "a",
                            &[
                                ("href", link.url.as_str()),
                                ("target", "_blank"),
                                ("rel", "noopener noreferrer"),
                            ],
                            link.kind.label(),
                        );
                    });
                }
            });
        });
    });
    frame.close("section");
}
