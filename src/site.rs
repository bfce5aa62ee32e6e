//! Event dispatch core for the page.
//!
//! `SiteCore` owns every piece of interaction state and maps host events to
//! component handlers. It never touches the DOM: handlers return
//! [`Action`]s and the host applies them. This keeps the whole interaction
//! layer testable without a browser.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::elevation::is_elevated;
use crate::links::{ProbeOutcome, ResumeFallback, resume_fallback};
use crate::nav::{NavController, NavRender};
use crate::theme::{KeyValueStore, Theme, ThemeManager};

/// A keyboard key as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Host events, already reduced to the facts the handlers need.
#[derive(Debug, Clone)]
pub enum Event {
    /// Theme toggle clicked; carries the root `data-theme` attribute at click time.
    ThemeToggleClicked { current: Option<String> },
    /// Window scrolled to vertical offset `scroll_y`.
    Scrolled { scroll_y: f64 },
    NavToggleClicked,
    NavLinkClicked,
    /// Click anywhere in the document, with its position relative to the menu.
    DocumentClicked { inside_panel: bool, inside_toggle: bool },
    KeyDown(Key),
    /// Contact form submitted; default submission already prevented.
    ContactSubmitted(ContactForm),
    ResumeProbed(ProbeOutcome),
}

/// DOM updates for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set the root `data-theme` attribute.
    SetTheme(Theme),
    /// Toggle the elevated class on the header.
    SetElevated(bool),
    RenderNav(NavRender),
    /// Point the current document at `url`.
    Navigate(String),
    ResumeFallback(ResumeFallback),
}

/// Facts about the host environment read once at load.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment {
    /// Platform colour-scheme preference, `None` when unavailable.
    pub system_theme: Option<Theme>,
    /// Vertical scroll offset at load.
    pub scroll_y: f64,
}

/// Which page hooks were found at boot.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Presence {
    pub theme_toggle: bool,
    pub header: bool,
    pub nav_toggle: bool,
    pub nav_panel: bool,
    pub contact_form: bool,
    pub resume: bool,
    pub year: bool,
}

/// Components the host wires up. A component whose hooks are absent is skipped.
///
/// The initial theme is applied regardless: it targets the document root.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Components {
    pub theme_toggle: bool,
    pub elevation: bool,
    /// Needs both the toggle and the panel.
    pub nav: bool,
    pub contact_form: bool,
    pub resume_check: bool,
    pub footer_year: bool,
}

impl Components {
    #[must_use]
    pub fn for_page(found: Presence) -> Self {
        Self {
            theme_toggle: found.theme_toggle,
            elevation: found.header,
            nav: found.nav_toggle && found.nav_panel,
            contact_form: found.contact_form,
            resume_check: found.resume,
            footer_year: found.year,
        }
    }
}

pub struct SiteCore<S> {
    config: SiteConfig,
    theme: ThemeManager<S>,
    nav: NavController,
}

impl<S: KeyValueStore> SiteCore<S> {
    pub fn new(config: SiteConfig, store: S) -> Self {
        Self { config, theme: ThemeManager::new(store), nav: NavController::new() }
    }

    /// Initial actions: apply (and persist) the preferred theme, sync elevation.
    pub fn init(&mut self, env: Environment) -> Vec<Action> {
        let theme = self.theme.preferred_theme(env.system_theme);
        let theme = self.theme.set_theme(theme);
        log::info!("site initialized with {theme} theme");
        vec![Action::SetTheme(theme), Action::SetElevated(is_elevated(env.scroll_y))]
    }

    /// Route one host event to its handler.
    pub fn handle(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::ThemeToggleClicked { current } => {
                vec![Action::SetTheme(self.theme.toggle(current.as_deref()))]
            }
            Event::Scrolled { scroll_y } => vec![Action::SetElevated(is_elevated(scroll_y))],
            Event::NavToggleClicked => vec![Action::RenderNav(self.nav.on_toggle())],
            Event::NavLinkClicked => self.nav.on_link_click().map(Action::RenderNav).into_iter().collect(),
            Event::DocumentClicked { inside_panel, inside_toggle } => self
                .nav
                .on_document_click(inside_panel, inside_toggle)
                .map(Action::RenderNav)
                .into_iter()
                .collect(),
            Event::KeyDown(Key(key)) => self.nav.on_key(&key).map(Action::RenderNav).into_iter().collect(),
            Event::ContactSubmitted(form) => match form.mailto_href(&self.config) {
                Ok(href) => vec![Action::Navigate(href)],
                Err(e) => {
                    log::debug!("contact submission ignored: {e}");
                    Vec::new()
                }
            },
            Event::ResumeProbed(outcome) => {
                if outcome == ProbeOutcome::Missing {
                    log::debug!("resume file missing, applying fallback link");
                }
                resume_fallback(outcome).map(Action::ResumeFallback).into_iter().collect()
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeManager<S> {
        &self.theme
    }
}
