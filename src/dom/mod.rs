//! Browser host: binds the page's markup to [`SiteCore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Elements are located once at boot by their data-attribute hooks. Each
//! listener reduces its DOM event to a [`site::Event`](crate::site::Event),
//! hands it to the shared core, and applies the returned actions. A missing
//! element disables only the component that needs it.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `forget` once registered.

mod error;
mod probe;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, HtmlFormElement, KeyboardEvent, Window};

pub use error::DomError;
pub use storage::LocalStore;

use crate::config::SiteConfig;
use crate::consts::*;
use crate::contact::ContactForm;
use crate::footer::year_text;
use crate::links::{ResumeProbe, link_href, project_href, value_text};
use crate::site::{Action, Components, Environment, Event, Key, Presence, SiteCore};
use crate::theme::Theme;

type SharedCore = Rc<RefCell<SiteCore<LocalStore>>>;

/// Elements the actions write to, located once at boot.
struct Hooks {
    theme_toggle: Option<Element>,
    header: Option<Element>,
    nav_toggle: Option<Element>,
    nav_panel: Option<Element>,
    contact_form: Option<Element>,
    resume: Option<Element>,
    form_hint: Option<Element>,
    year: Option<Element>,
}

impl Hooks {
    fn presence(&self) -> Presence {
        Presence {
            theme_toggle: self.theme_toggle.is_some(),
            header: self.header.is_some(),
            nav_toggle: self.nav_toggle.is_some(),
            nav_panel: self.nav_panel.is_some(),
            contact_form: self.contact_form.is_some(),
            resume: self.resume.is_some(),
            year: self.year.is_some(),
        }
    }
}

struct Page {
    window: Window,
    document: Document,
    hooks: Hooks,
}

/// Locate the page hooks, register every listener, and apply initial state.
///
/// # Errors
///
/// Returns [`DomError`] when there is no window or document, or when a
/// listener cannot be registered.
pub fn boot() -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let hooks = Hooks {
        theme_toggle: query(&document, SEL_THEME_TOGGLE),
        header: query(&document, SEL_ELEVATE),
        nav_toggle: query(&document, SEL_NAV_TOGGLE),
        nav_panel: query(&document, SEL_NAV_PANEL),
        contact_form: query(&document, SEL_CONTACT_FORM),
        resume: query(&document, SEL_RESUME),
        form_hint: query(&document, SEL_FORM_HINT),
        year: query(&document, SEL_YEAR),
    };
    let plan = Components::for_page(hooks.presence());
    let page = Rc::new(Page { window, document, hooks });

    let embedded = query(&page.document, SEL_SITE_CONFIG).and_then(|el| el.text_content());
    let config = SiteConfig::from_json_or_default(embedded.as_deref());
    let store = LocalStore::from_window(&page.window);
    let core: SharedCore = Rc::new(RefCell::new(SiteCore::new(config, store)));

    let env = Environment { system_theme: page.system_theme(), scroll_y: page.scroll_y() };
    let initial = core.borrow_mut().init(env);
    page.apply(initial);

    if plan.theme_toggle {
        init_theme_toggle(&page, &core)?;
    }
    if plan.elevation {
        init_header_elevation(&page, &core)?;
    }
    if plan.nav {
        init_mobile_nav(&page, &core)?;
    }
    if plan.contact_form {
        init_contact_form(&page, &core)?;
    }
    init_links(&page, core.borrow().config());
    if plan.resume_check {
        init_resume_check(&page, &core);
    }
    if plan.footer_year {
        init_footer_year(&page);
    }
    Ok(())
}

// =============================================================================
// COMPONENTS
// =============================================================================

fn init_theme_toggle(page: &Rc<Page>, core: &SharedCore) -> Result<(), DomError> {
    let Some(button) = &page.hooks.theme_toggle else {
        return Ok(());
    };
    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    listen(button, "click", false, move |_| {
        let current = page_cb.document.document_element().and_then(|root| root.get_attribute("data-theme"));
        dispatch(&page_cb, &core_cb, Event::ThemeToggleClicked { current });
    })
}

fn init_header_elevation(page: &Rc<Page>, core: &SharedCore) -> Result<(), DomError> {
    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    listen(&page.window, "scroll", true, move |_| {
        let scroll_y = page_cb.scroll_y();
        dispatch(&page_cb, &core_cb, Event::Scrolled { scroll_y });
    })
}

fn init_mobile_nav(page: &Rc<Page>, core: &SharedCore) -> Result<(), DomError> {
    let (Some(toggle), Some(panel)) = (&page.hooks.nav_toggle, &page.hooks.nav_panel) else {
        return Ok(());
    };

    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    listen(toggle, "click", false, move |_| dispatch(&page_cb, &core_cb, Event::NavToggleClicked))?;

    for link in query_all_in(panel, SEL_NAV_LINK) {
        let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
        listen(&link, "click", false, move |_| dispatch(&page_cb, &core_cb, Event::NavLinkClicked))?;
    }

    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    listen(&page.document, "click", false, move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(el) = target.dyn_ref::<HtmlElement>() else {
            return;
        };
        let inside_panel = matches!(el.closest(SEL_NAV_PANEL), Ok(Some(_)));
        let inside_toggle = matches!(el.closest(SEL_NAV_TOGGLE), Ok(Some(_)));
        dispatch(&page_cb, &core_cb, Event::DocumentClicked { inside_panel, inside_toggle });
    })?;

    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    listen(&page.document, "keydown", false, move |event| {
        if let Some(kb) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(&page_cb, &core_cb, Event::KeyDown(Key(kb.key())));
        }
    })
}

fn init_contact_form(page: &Rc<Page>, core: &SharedCore) -> Result<(), DomError> {
    let Some(form) = page.hooks.contact_form.as_ref().and_then(|el| el.dyn_ref::<HtmlFormElement>()) else {
        log::debug!("{SEL_CONTACT_FORM} is not a form element");
        return Ok(());
    };
    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    let form_cb = form.clone();
    listen(form, "submit", false, move |event| {
        event.prevent_default();
        let data = match web_sys::FormData::new_with_form(&form_cb) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("contact form unreadable: {}", error::describe(&e));
                return;
            }
        };
        let field = |name: &str| data.get(name).as_string();
        let submitted = ContactForm::from_fields(
            field("name").as_deref(),
            field("email").as_deref(),
            field("message").as_deref(),
        );
        dispatch(&page_cb, &core_cb, Event::ContactSubmitted(submitted));
    })
}

fn init_links(page: &Page, config: &SiteConfig) {
    for el in query_all(&page.document, SEL_LINK) {
        if let Some(href) = el.get_attribute("data-link").and_then(|key| link_href(config, &key)) {
            set_attr(&el, "href", &href);
        }
    }
    for el in query_all(&page.document, SEL_VALUE) {
        if let Some(text) = el.get_attribute("data-value").and_then(|key| value_text(config, &key)) {
            el.set_text_content(Some(&text));
        }
    }
    for el in query_all(&page.document, SEL_PROJECT) {
        let Some(slug) = el.get_attribute("data-project") else {
            continue;
        };
        if let Some(href) = project_href(config, &slug) {
            set_attr(&el, "href", href);
        }
    }
}

fn init_resume_check(page: &Rc<Page>, core: &SharedCore) {
    let Some(resume) = &page.hooks.resume else {
        return;
    };
    let href = resume.get_attribute("href");
    let (page_cb, core_cb) = (Rc::clone(page), Rc::clone(core));
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match ResumeProbe::for_href(href.as_deref()) {
            ResumeProbe::Request(url) => probe::head(&url).await,
            ResumeProbe::Settled(outcome) => outcome,
        };
        dispatch(&page_cb, &core_cb, Event::ResumeProbed(outcome));
    });
}

fn init_footer_year(page: &Page) {
    if let Some(el) = &page.hooks.year {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year_text(year)));
    }
}

// =============================================================================
// PAGE
// =============================================================================

impl Page {
    fn system_theme(&self) -> Option<Theme> {
        match self.window.match_media("(prefers-color-scheme: light)") {
            Ok(Some(mq)) => Some(if mq.matches() { Theme::Light } else { Theme::Dark }),
            Ok(None) | Err(_) => None,
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in actions {
            if let Err(e) = self.apply_one(action) {
                log::debug!("action not applied: {e}");
            }
        }
    }

    fn apply_one(&self, action: Action) -> Result<(), DomError> {
        match action {
            Action::SetTheme(theme) => {
                if let Some(root) = self.document.document_element() {
                    root.set_attribute("data-theme", theme.as_str())?;
                }
            }
            Action::SetElevated(on) => {
                if let Some(header) = &self.hooks.header {
                    header.class_list().toggle_with_force(ELEVATED_CLASS, on)?;
                }
            }
            Action::RenderNav(render) => {
                if let (Some(toggle), Some(panel)) = (&self.hooks.nav_toggle, &self.hooks.nav_panel) {
                    panel.class_list().toggle_with_force(NAV_OPEN_CLASS, render.open)?;
                    toggle.set_attribute("aria-label", render.label)?;
                }
            }
            Action::Navigate(url) => self.window.location().set_href(&url)?,
            Action::ResumeFallback(fallback) => {
                if let Some(resume) = &self.hooks.resume {
                    resume.remove_attribute("download")?;
                    resume.set_attribute("href", fallback.href)?;
                    resume.set_text_content(Some(fallback.text));
                }
                if let Some(hint) = &self.hooks.form_hint {
                    hint.set_text_content(Some(fallback.hint));
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn dispatch(page: &Page, core: &SharedCore, event: Event) {
    let actions = core.borrow_mut().handle(event);
    page.apply(actions);
}

fn listen<F>(target: &EventTarget, kind: &str, passive: bool, handler: F) -> Result<(), DomError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(kind, cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();
    Ok(())
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::debug!("bad selector {selector}: {}", error::describe(&e));
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::debug!("bad selector {selector}: {}", error::describe(&e));
            Vec::new()
        }
    }
}

fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::debug!("bad selector {selector}: {}", error::describe(&e));
            Vec::new()
        }
    }
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(e) = el.set_attribute(name, value) {
        log::debug!("could not set {name}: {}", error::describe(&e));
    }
}
