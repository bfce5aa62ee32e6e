//! Shared constants: storage keys, DOM hooks, and user-facing strings.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "akash-portfolio-theme";

// ── Header ──────────────────────────────────────────────────────

/// Vertical scroll offset, in CSS pixels, above which the header is elevated.
pub const ELEVATION_THRESHOLD_PX: f64 = 4.0;

/// Class toggled on the `[data-elevate]` element.
pub const ELEVATED_CLASS: &str = "is-elevated";

// ── Navigation ──────────────────────────────────────────────────

/// Class toggled on the `[data-nav-panel]` element while the menu is open.
pub const NAV_OPEN_CLASS: &str = "is-open";

/// `aria-label` on the toggle while the menu is closed.
pub const NAV_LABEL_CLOSED: &str = "Open menu";

/// `aria-label` on the toggle while the menu is open.
pub const NAV_LABEL_OPEN: &str = "Close menu";

/// Key name reported by the browser for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

// ── Selectors ───────────────────────────────────────────────────

/// Button that flips the theme.
pub const SEL_THEME_TOGGLE: &str = "[data-theme-toggle]";
/// Header that gains a shadow once the page scrolls.
pub const SEL_ELEVATE: &str = "[data-elevate]";
/// Button that opens and closes the mobile menu.
pub const SEL_NAV_TOGGLE: &str = "[data-nav-toggle]";
/// Collapsible mobile menu panel.
pub const SEL_NAV_PANEL: &str = "[data-nav-panel]";
/// Links inside the menu panel; each closes the menu.
pub const SEL_NAV_LINK: &str = ".nav-link";
/// Contact form with `name`, `email`, and `message` fields.
pub const SEL_CONTACT_FORM: &str = "#contactForm";
/// Anchors whose href comes from a `data-link` key.
pub const SEL_LINK: &str = "[data-link]";
/// Elements whose text comes from a `data-value` key.
pub const SEL_VALUE: &str = "[data-value]";
/// Anchors whose href comes from the project map.
pub const SEL_PROJECT: &str = "[data-project]";
/// Résumé download link.
pub const SEL_RESUME: &str = "[data-resume]";
/// Hint line under the contact form.
pub const SEL_FORM_HINT: &str = "#formHint";
/// Footer year.
pub const SEL_YEAR: &str = "#year";
/// Optional JSON script overriding the built-in site record.
pub const SEL_SITE_CONFIG: &str = "#site-config";

// ── Contact ─────────────────────────────────────────────────────

/// Subject prefix; the sender's name is appended.
pub const SUBJECT_PREFIX: &str = "Portfolio enquiry \u{2014} ";

// ── Résumé fallback ─────────────────────────────────────────────

/// In-page anchor the résumé link points to when the file is missing.
pub const RESUME_FALLBACK_HREF: &str = "#contact";

/// Visible text of the résumé link when the file is missing.
pub const RESUME_FALLBACK_TEXT: &str = "Resume (add PDF)";

/// Hint shown under the contact form when the résumé file is missing.
pub const RESUME_FALLBACK_HINT: &str = "Tip: add a resume PDF in assets/ and update your links in the site config.";
