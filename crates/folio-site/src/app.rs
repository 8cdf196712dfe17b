#![forbid(unsafe_code)]

//! The page model.
//!
//! [`PortfolioApp`] composes every section in page order (navigation, hero,
//! about, projects, skills, contact, footer) and owns the state they share:
//! the translator for the current locale, reveal tracking and the toast.
//! A language change rebuilds the translator and the next render passes it
//! to every section.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use folio_content::{SiteConfig, SkillCategory, projects, translations};
use folio_i18n::{Locale, StringCatalog, Translator};
use folio_runtime::{Cmd, Frame, Model};
use tracing::{debug, info};

use crate::contact::{ContactForm, ContactMsg, ContactTransport, FormStatus, SimulatedTransport};
use crate::preference::{LanguagePreference, PreferenceStore};
use crate::reveal::{DEFAULT_THRESHOLD, RevealTracker};
use crate::sections::projects::card_reveal_id;
use crate::sections::{
    self, NavigationState, ProjectFilter, ProjectsState, Section, SkillsState, ViewContext,
};
use crate::toast::{ToastKind, ToastState};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    SelectLanguage(Locale),
    ToggleLanguageMenu,
    ToggleMenu,
    /// In-page link followed. Closes the menus and asks the host to scroll.
    Navigate(Section),
    Scrolled { y: f64, max: f64 },
    /// Animation frame; advances the scroll progress spring.
    Tick(Duration),
    Visible { id: String, ratio: f32 },
    Filter(ProjectFilter),
    ToggleExpanded(u32),
    OpenDetails(u32),
    CloseDetails,
    SelectSkills(SkillCategory),
    Contact(ContactMsg),
    ToastExpired(u64),
    DismissToast,
    /// Page is going away; cancel anything in flight.
    Unmount,
}

/// Ids the host should observe for reveal reports.
#[must_use]
pub fn reveal_targets() -> Vec<String> {
    let mut ids: Vec<String> = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ]
    .iter()
    .map(|s| s.anchor().to_owned())
    .collect();
    ids.extend(projects().iter().map(card_reveal_id));
    ids
}

pub struct PortfolioApp {
    config: SiteConfig,
    catalog: Arc<StringCatalog>,
    translator: Translator,
    preference: LanguagePreference,
    nav: NavigationState,
    projects: ProjectsState,
    skills: SkillsState,
    contact: ContactForm,
    reveal: RevealTracker,
    toast: ToastState,
    scroll_request: Cell<Option<Section>>,
}

impl std::fmt::Debug for PortfolioApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("locale", &self.locale())
            .field("contact", &self.contact)
            .finish_non_exhaustive()
    }
}

impl PortfolioApp {
    /// Build the page. The transport defaults to the simulated one when
    /// `transport` is `None`.
    pub fn new(
        config: SiteConfig,
        store: Rc<dyn PreferenceStore>,
        browser_language: &str,
        transport: Option<Rc<dyn ContactTransport>>,
    ) -> Self {
        let catalog = Arc::new(translations());
        let preference = LanguagePreference::initialize(store, browser_language);
        let translator = Translator::new(Arc::clone(&catalog), preference.current());
        let transport = transport.unwrap_or_else(|| {
            Rc::new(SimulatedTransport::new(config.contact.simulated_delay()))
        });
        let contact = ContactForm::new(config.contact.clone(), transport);
        let mut reveal = RevealTracker::new();
        for id in reveal_targets() {
            reveal.register(&id, DEFAULT_THRESHOLD);
        }
        Self {
            config,
            catalog,
            translator,
            preference,
            nav: NavigationState::new(),
            projects: ProjectsState::new(),
            skills: SkillsState::new(),
            contact,
            reveal,
            toast: ToastState::new(),
            scroll_request: Cell::new(None),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.translator.locale()
    }

    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    #[must_use]
    pub fn projects(&self) -> &ProjectsState {
        &self.projects
    }

    #[must_use]
    pub fn skills(&self) -> &SkillsState {
        &self.skills
    }

    #[must_use]
    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    #[must_use]
    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// True while something wants animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.nav.is_animating()
    }

    /// Section the host should scroll to, consumed on read.
    ///
    /// Takes `&self` so hosts can poll it without dirtying the frame.
    pub fn take_scroll_request(&self) -> Option<Section> {
        self.scroll_request.take()
    }

    fn show_toast(&mut self, kind: ToastKind, key: &'static str) -> Cmd<AppMsg> {
        let id = self.toast.show(kind, key);
        Cmd::delay(self.config.contact.toast_duration(), AppMsg::ToastExpired(id))
    }

    fn set_locale(&mut self, locale: Locale) {
        if locale == self.locale() {
            return;
        }
        info!(%locale, "language changed");
        self.preference.select(locale);
        self.translator = Translator::new(Arc::clone(&self.catalog), locale);
    }

    fn context(&self) -> ViewContext<'_> {
        ViewContext {
            t: &self.translator,
            profile: &self.config.profile,
            reveal: &self.reveal,
        }
    }
}

impl Model for PortfolioApp {
    type Message = AppMsg;

    fn init(&mut self) -> Cmd<AppMsg> {
        debug!(locale = %self.locale(), "portfolio mounted");
        self.show_toast(ToastKind::Info, "toast.welcome")
    }

    fn update(&mut self, msg: AppMsg) -> Cmd<AppMsg> {
        match msg {
            AppMsg::SelectLanguage(locale) => {
                self.set_locale(locale);
                self.nav.close_menus();
            }
            AppMsg::ToggleLanguageMenu => self.nav.toggle_language_menu(),
            AppMsg::ToggleMenu => self.nav.toggle_menu(),
            AppMsg::Navigate(section) => {
                self.nav.close_menus();
                self.scroll_request.set(Some(section));
            }
            AppMsg::Scrolled { y, max } => self.nav.on_scroll(y, max),
            AppMsg::Tick(dt) => {
                self.nav.advance(dt);
            }
            AppMsg::Visible { id, ratio } => {
                self.reveal.report(&id, ratio);
            }
            AppMsg::Filter(filter) => self.projects.set_filter(filter),
            AppMsg::ToggleExpanded(id) => self.projects.toggle_expanded(id),
            AppMsg::OpenDetails(id) => {
                self.projects.open_details(id);
            }
            AppMsg::CloseDetails => self.projects.close_details(),
            AppMsg::SelectSkills(category) => self.skills.select(category),
            AppMsg::Contact(msg) => {
                let was_success = *self.contact.status() == FormStatus::Success;
                let cmd = self.contact.update(msg).map(AppMsg::Contact);
                if !was_success && *self.contact.status() == FormStatus::Success {
                    let toast = self.show_toast(ToastKind::Success, "contact.success");
                    return Cmd::batch(vec![cmd, toast]);
                }
                return cmd;
            }
            AppMsg::ToastExpired(id) => {
                self.toast.expire(id);
            }
            AppMsg::DismissToast => self.toast.dismiss(),
            AppMsg::Unmount => {
                let cancel = self.contact.update(ContactMsg::Unmount).map(AppMsg::Contact);
                return Cmd::batch(vec![cancel, Cmd::quit()]);
            }
        }
        Cmd::none()
    }

    fn view(&self, frame: &mut Frame) {
        let ctx = self.context();
        frame.open(
            "div",
            &[("class", "folio"), ("lang", self.locale().html_lang())],
        );
        sections::nav::view(frame, &ctx, &self.nav);
        frame.open("main", &[]);
        sections::hero::view(frame, &ctx);
        sections::about::view(frame, &ctx);
        sections::projects::view(frame, &ctx, &self.projects);
        sections::skills::view(frame, &ctx, &self.skills);
        sections::contact::view(frame, &ctx, &self.contact);
        frame.close("main");
        sections::footer::view(frame, &ctx);
        self.toast.view(frame, &self.translator);
        frame.close("div");
    }
}
