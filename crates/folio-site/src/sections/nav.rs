#![forbid(unsafe_code)]

//! Fixed navigation bar, mobile menu, language menu and scroll progress.

use std::time::Duration;

use folio_i18n::Locale;
use folio_runtime::{Frame, Spring};

use super::{Section, ViewContext};

/// Scroll offset past which the bar switches to its solid style.
pub const SCROLLED_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct NavigationState {
    menu_open: bool,
    language_menu_open: bool,
    scrolled: bool,
    progress: Spring,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            menu_open: false,
            language_menu_open: false,
            scrolled: false,
            progress: Spring::scroll_progress(),
        }
    }
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn language_menu_open(&self) -> bool {
        self.language_menu_open
    }

    #[must_use]
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Smoothed scroll progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    /// Close both menus, e.g. after following a link.
    pub fn close_menus(&mut self) {
        self.menu_open = false;
        self.language_menu_open = false;
    }

    /// Record a scroll position. `max` is the scrollable height; zero or
    /// negative means the page does not scroll.
    pub fn on_scroll(&mut self, y: f64, max: f64) {
        let y = if y.is_finite() { y.max(0.0) } else { 0.0 };
        self.scrolled = y > SCROLLED_THRESHOLD_PX;
        let target = if max.is_finite() && max > 0.0 {
            (y / max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.progress.set_target(target);
    }

    /// Step the progress spring. Returns `true` while it is still moving.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.progress.advance(dt);
        !self.progress.is_at_rest()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.progress.is_at_rest()
    }
}

pub fn view(frame: &mut Frame, ctx: &ViewContext<'_>, state: &NavigationState) {
    let t = ctx.t;
    let header_class = if state.scrolled {
        "site-header is-scrolled"
    } else {
        "site-header"
    };
    frame.open("header", &[("class", header_class)]);

    let progress = format!("transform:scaleX({:.4})", state.progress());
    frame.element(
        "div",
        &[("class", "scroll-progress"), ("style", progress.as_str())],
        "",
    );

    frame.with("nav", &[("class", "nav")], |f| {
        f.element(
            "a",
            &[("class", "nav-brand"), ("href", "#home"), ("data-nav", "home")],
            &t.t("nav.brand"),
        );
        f.with("ul", &[("class", "nav-links")], |f| nav_links(f, ctx));
        language_menu(f, ctx, state);
        let (label_key, expanded) = if state.menu_open {
            ("nav.closeMenu", "true")
        } else {
            ("nav.openMenu", "false")
        };
        f.element(
            "button",
            &[
                ("type", "button"),
                ("class", "nav-toggle"),
                ("aria-expanded", expanded),
                ("aria-controls", "mobile-menu"),
                ("data-action", "toggle-menu"),
            ],
            &t.t(label_key),
        );
    });

    if state.menu_open {
        frame.with(
            "ul",
            &[("id", "mobile-menu"), ("class", "nav-mobile")],
            |f| nav_links(f, ctx),
        );
    }
    frame.close("header");
}

fn nav_links(frame: &mut Frame, ctx: &ViewContext<'_>) {
    for section in Section::ALL {
        let href = format!("#{}", section.anchor());
        frame.with("li", &[], |f| {
            f.element(
                "a",
                &[("href", href.as_str()), ("data-nav", section.anchor())],
                &ctx.t.t(section.nav_key()),
            );
        });
    }
}

fn language_menu(frame: &mut Frame, ctx: &ViewContext<'_>, state: &NavigationState) {
    let current = ctx.t.locale();
    let expanded = if state.language_menu_open { "true" } else { "false" };
    frame.with("div", &[("class", "lang-menu")], |f| {
        let label = ctx.t.t("nav.language");
        f.element(
            "button",
            &[
                ("type", "button"),
                ("aria-label", &*label),
                ("aria-haspopup", "listbox"),
                ("aria-expanded", expanded),
                ("data-action", "toggle-language-menu"),
            ],
            current.native_name(),
        );
        if !state.language_menu_open {
            return;
        }
        f.with("ul", &[("role", "listbox")], |f| {
            for locale in Locale::ALL {
                let selected = if locale == current { "true" } else { "false" };
                f.with(
                    "li",
                    &[
                        ("role", "option"),
                        ("aria-selected", selected),
                        ("lang", locale.html_lang()),
                        ("data-language", locale.tag()),
                    ],
                    |f| f.text(locale.native_name()),
                );
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealTracker;
    use crate::sections::test_support::{config, translator};

    #[test]
    fn scrolled_flag_threshold() {
        let mut nav = NavigationState::new();
        nav.on_scroll(10.0, 1000.0);
        assert!(!nav.scrolled());
        nav.on_scroll(10.5, 1000.0);
        assert!(nav.scrolled());
        nav.on_scroll(f64::NAN, 1000.0);
        assert!(!nav.scrolled());
    }

    #[test]
    fn progress_converges_to_scroll_fraction() {
        let mut nav = NavigationState::new();
        nav.on_scroll(500.0, 1000.0);
        assert!(nav.is_animating());
        for _ in 0..300 {
            nav.advance(Duration::from_millis(16));
        }
        assert!((nav.progress() - 0.5).abs() < 0.01);
        nav.on_scroll(0.0, 0.0);
        for _ in 0..300 {
            nav.advance(Duration::from_millis(16));
        }
        assert!(nav.progress() < 0.01);
    }

    #[test]
    fn menus_render_only_when_open() {
        let t = translator(Locale::PtBr);
        let profile = config().profile;
        let reveal = RevealTracker::new();
        let ctx = ViewContext {
            t: &t,
            profile: &profile,
            reveal: &reveal,
        };
        let mut nav = NavigationState::new();
        let mut frame = Frame::new();
        view(&mut frame, &ctx, &nav);
        assert!(!frame.as_str().contains("mobile-menu\" class"));
        assert!(frame.as_str().contains("Sobre Mim"));
        assert!(!frame.as_str().contains("role=\"listbox\">"));

        nav.toggle_menu();
        nav.toggle_language_menu();
        frame.clear();
        view(&mut frame, &ctx, &nav);
        assert!(frame.as_str().contains("id=\"mobile-menu\""));
        assert!(frame.as_str().contains("data-language=\"pt-br\""));
        assert!(frame.as_str().contains("Fechar menu"));

        nav.close_menus();
        assert!(!nav.menu_open() && !nav.language_menu_open());
    }
}
