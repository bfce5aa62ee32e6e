use super::*;
use crate::consts::THEME_KEY;
use crate::theme::{MemoryStore, StorageError};

// =============================================================
// Helpers
// =============================================================

/// In-memory stand-in for the DOM, applying actions the way the host does.
#[derive(Debug)]
struct FakePage {
    root_theme: Option<String>,
    elevated: bool,
    nav_open: bool,
    nav_label: &'static str,
    location: Option<String>,
    resume_href: String,
    resume_download: bool,
    resume_text: String,
    hint: String,
}

impl Default for FakePage {
    fn default() -> Self {
        Self {
            root_theme: None,
            elevated: false,
            nav_open: false,
            nav_label: "Open menu",
            location: None,
            resume_href: "assets/resume.pdf".into(),
            resume_download: true,
            resume_text: "Resume".into(),
            hint: String::new(),
        }
    }
}

impl FakePage {
    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SetTheme(theme) => self.root_theme = Some(theme.as_str().to_owned()),
                Action::SetElevated(on) => self.elevated = on,
                Action::RenderNav(render) => {
                    self.nav_open = render.open;
                    self.nav_label = render.label;
                }
                Action::Navigate(url) => self.location = Some(url),
                Action::ResumeFallback(fallback) => {
                    self.resume_download = false;
                    self.resume_href = fallback.href.to_owned();
                    self.resume_text = fallback.text.to_owned();
                    self.hint = fallback.hint.to_owned();
                }
            }
        }
    }

    fn toggle_theme(&mut self, core: &mut SiteCore<impl KeyValueStore>) {
        let actions = core.handle(Event::ThemeToggleClicked { current: self.root_theme.clone() });
        self.apply(actions);
    }
}

fn core() -> SiteCore<MemoryStore> {
    SiteCore::new(SiteConfig::default(), MemoryStore::new())
}

fn booted(env: Environment) -> (SiteCore<MemoryStore>, FakePage) {
    let mut core = core();
    let mut page = FakePage::default();
    page.apply(core.init(env));
    (core, page)
}

fn submit(name: &str, email: &str, message: &str) -> Event {
    Event::ContactSubmitted(ContactForm::from_fields(Some(name), Some(email), Some(message)))
}

// =============================================================
// Init
// =============================================================

#[test]
fn init_applies_and_persists_platform_theme() {
    let (core, page) = booted(Environment { system_theme: Some(Theme::Light), scroll_y: 0.0 });
    assert_eq!(page.root_theme.as_deref(), Some("light"));
    assert!(!page.elevated);
    assert_eq!(core.theme().store().get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
}

#[test]
fn init_prefers_persisted_theme() {
    let mut store = MemoryStore::new();
    store.set_item(THEME_KEY, "light").unwrap();
    let mut core = SiteCore::new(SiteConfig::default(), store);
    let actions = core.init(Environment { system_theme: Some(Theme::Dark), scroll_y: 0.0 });
    assert_eq!(actions[0], Action::SetTheme(Theme::Light));
}

#[test]
fn init_syncs_elevation_with_restored_scroll() {
    let (_, page) = booted(Environment { system_theme: None, scroll_y: 640.0 });
    assert!(page.elevated);
    assert_eq!(page.root_theme.as_deref(), Some("dark"));
}

#[test]
fn init_applies_theme_when_storage_fails() {
    struct DeniedStore;
    impl KeyValueStore for DeniedStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Rejected("SecurityError".into()))
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected("SecurityError".into()))
        }
    }

    let mut core = SiteCore::new(SiteConfig::default(), DeniedStore);
    let mut page = FakePage::default();
    page.apply(core.init(Environment { system_theme: Some(Theme::Light), scroll_y: 0.0 }));
    assert_eq!(page.root_theme.as_deref(), Some("light"));
    page.toggle_theme(&mut core);
    assert_eq!(page.root_theme.as_deref(), Some("dark"));
}

// =============================================================
// Theme toggle
// =============================================================

#[test]
fn toggling_twice_restores_root_attribute() {
    for system in [Theme::Light, Theme::Dark] {
        let (mut core, mut page) = booted(Environment { system_theme: Some(system), scroll_y: 0.0 });
        let original = page.root_theme.clone();
        page.toggle_theme(&mut core);
        assert_ne!(page.root_theme, original);
        page.toggle_theme(&mut core);
        assert_eq!(page.root_theme, original);
    }
}

#[test]
fn toggle_persists_new_theme() {
    let (mut core, mut page) = booted(Environment::default());
    page.toggle_theme(&mut core);
    assert_eq!(core.theme().store().get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
}

// =============================================================
// Header elevation
// =============================================================

#[test]
fn scrolling_toggles_elevation() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(Event::Scrolled { scroll_y: 5.0 }));
    assert!(page.elevated);
    page.apply(core.handle(Event::Scrolled { scroll_y: 4.0 }));
    assert!(!page.elevated);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn toggle_then_escape_closes_menu() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(Event::NavToggleClicked));
    assert!(page.nav_open);
    assert_eq!(page.nav_label, "Close menu");
    page.apply(core.handle(Event::KeyDown(Key("Escape".into()))));
    assert!(!page.nav_open);
    assert_eq!(page.nav_label, "Open menu");
}

#[test]
fn outside_click_closes_open_menu() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(Event::NavToggleClicked));
    page.apply(core.handle(Event::DocumentClicked { inside_panel: false, inside_toggle: false }));
    assert!(!page.nav_open);
}

#[test]
fn toggle_click_bubbling_to_document_keeps_menu_open() {
    let (mut core, mut page) = booted(Environment::default());
    // The browser delivers the toggle's click to the document listener too.
    page.apply(core.handle(Event::NavToggleClicked));
    page.apply(core.handle(Event::DocumentClicked { inside_panel: false, inside_toggle: true }));
    assert!(page.nav_open);
}

#[test]
fn nav_link_click_closes_menu() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(Event::NavToggleClicked));
    page.apply(core.handle(Event::NavLinkClicked));
    page.apply(core.handle(Event::DocumentClicked { inside_panel: true, inside_toggle: false }));
    assert!(!page.nav_open);
    assert!(!core.nav().state().is_open());
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn valid_submission_navigates_to_mailto() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(submit("Jane", "j@x.com", "Hello")));
    let location = page.location.unwrap();
    assert!(location.starts_with("mailto:akashkumarce19006%40gmail.com?subject="));
    assert!(location.contains("Jane"));
    assert!(location.contains("Hello"));
    assert!(location.contains("j%40x.com"));
}

#[test]
fn empty_message_does_not_navigate() {
    let (mut core, mut page) = booted(Environment::default());
    let actions = core.handle(submit("Jane", "j@x.com", ""));
    assert!(actions.is_empty());
    page.apply(actions);
    assert_eq!(page.location, None);
}

#[test]
fn whitespace_only_fields_do_not_navigate() {
    let (mut core, _) = booted(Environment::default());
    assert!(core.handle(submit("  ", "j@x.com", "Hello")).is_empty());
    assert!(core.handle(submit("Jane", "\t", "Hello")).is_empty());
}

// =============================================================
// Résumé check
// =============================================================

#[test]
fn missing_resume_falls_back_to_contact_anchor() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(Event::ResumeProbed(ProbeOutcome::from_ok(false))));
    assert_eq!(page.resume_href, "#contact");
    assert!(!page.resume_download);
    assert_eq!(page.resume_text, "Resume (add PDF)");
    assert!(!page.hint.is_empty());
}

#[test]
fn present_resume_is_left_alone() {
    let (mut core, mut page) = booted(Environment::default());
    page.apply(core.handle(Event::ResumeProbed(ProbeOutcome::from_ok(true))));
    assert_eq!(page.resume_href, "assets/resume.pdf");
    assert!(page.resume_download);
}

// =============================================================
// Component plan
// =============================================================

#[test]
fn empty_page_wires_no_components() {
    assert_eq!(Components::for_page(Presence::default()), Components::default());
}

#[test]
fn full_page_wires_every_component() {
    let found = Presence {
        theme_toggle: true,
        header: true,
        nav_toggle: true,
        nav_panel: true,
        contact_form: true,
        resume: true,
        year: true,
    };
    let plan = Components::for_page(found);
    assert!(plan.theme_toggle && plan.elevation && plan.nav);
    assert!(plan.contact_form && plan.resume_check && plan.footer_year);
}

#[test]
fn nav_needs_both_toggle_and_panel() {
    let toggle_only = Presence { nav_toggle: true, ..Presence::default() };
    let panel_only = Presence { nav_panel: true, ..Presence::default() };
    assert!(!Components::for_page(toggle_only).nav);
    assert!(!Components::for_page(panel_only).nav);
}

#[test]
fn missing_element_skips_only_its_component() {
    let found = Presence { header: true, resume: true, year: true, ..Presence::default() };
    let plan = Components::for_page(found);
    assert_eq!(
        plan,
        Components { elevation: true, resume_check: true, footer_year: true, ..Components::default() }
    );
}
