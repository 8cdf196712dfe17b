#![forbid(unsafe_code)]

//! Opening section over the 3D background.

use folio_runtime::Frame;

use super::{Section, ViewContext};

/// Element the background scene mounts into.
pub const BACKGROUND_CONTAINER_ID: &str = "hero-background";

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>) {
    let t = ctx.t;
    frame.open(
        "section",
        &[("id", Section::Home.anchor()), ("class", "hero")],
    );
    frame.element(
        "canvas",
        &[
            ("id", BACKGROUND_CONTAINER_ID),
            ("class", "hero-background"),
            ("aria-hidden", "true"),
        ],
        "",
    );
    frame.with("div", &[("class", "hero-content")], |f| {
        f.element("p", &[("class", "hero-greeting")], &t.t("hero.greeting"));
        f.element("h1", &[("class", "hero-name")], &ctx.profile.name);
        f.element("h2", &[("class", "hero-title")], &t.t("hero.title"));
        f.element("p", &[("class", "hero-description")], &t.t("hero.description"));
        f.element(
            "a",
            &[
                ("class", "button button-primary"),
                ("href", "#about"),
                ("data-nav", Section::About.anchor()),
            ],
            &t.t("hero.cta"),
        );
    });
    frame.with("div", &[("class", "hero-image")], |f| {
        f.void(
            "img",
            &[
                ("src", ctx.profile.hero_image_url.as_str()),
                ("alt", ""),
                ("loading", "eager"),
            ],
        );
    });
    frame.close("section");
}
