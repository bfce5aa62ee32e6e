//! Social, contact, and project links filled in from [`SiteConfig`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The markup carries marker attributes (`data-link`, `data-value`,
//! `data-project`, `data-resume`); these lookups turn a marker value into
//! the href or text to assign. Unknown markers resolve to `None` and the
//! element is left as authored.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use std::fmt;

use crate::config::SiteConfig;
use crate::consts::{RESUME_FALLBACK_HINT, RESUME_FALLBACK_HREF, RESUME_FALLBACK_TEXT};

/// Href for a `data-link` marker (`github`, `linkedin`, `email`).
#[must_use]
pub fn link_href(config: &SiteConfig, key: &str) -> Option<String> {
    let href = match key {
        "github" => config.github.clone(),
        "linkedin" => config.linkedin.clone(),
        "email" => format!("mailto:{}", config.email),
        _ => return None,
    };
    non_empty(href)
}

/// Visible text for a `data-value` marker.
///
/// Profile URLs are shown without their `http://` or `https://` scheme.
#[must_use]
pub fn value_text(config: &SiteConfig, key: &str) -> Option<String> {
    let text = match key {
        "email" => config.email.clone(),
        "github" => strip_scheme(&config.github).to_owned(),
        "linkedin" => strip_scheme(&config.linkedin).to_owned(),
        "name" => config.name.clone(),
        "location" => config.location.clone(),
        _ => return None,
    };
    non_empty(text)
}

/// Href for a `data-project` marker. Placeholder `"#"` values still resolve.
#[must_use]
pub fn project_href<'a>(config: &'a SiteConfig, slug: &str) -> Option<&'a str> {
    config.projects.get(slug).map(String::as_str).filter(|href| !href.is_empty())
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")).unwrap_or(url)
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

// =============================================================================
// RÉSUMÉ PROBE
// =============================================================================

/// Result of the HEAD request against the résumé link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found,
    Missing,
}

impl ProbeOutcome {
    /// `Found` when the response reported `ok`.
    #[must_use]
    pub fn from_ok(ok: bool) -> Self {
        if ok { Self::Found } else { Self::Missing }
    }

    /// Outcome of a completed request; a transport error counts as missing.
    pub fn from_response<E: fmt::Display>(response: Result<bool, E>) -> Self {
        match response {
            Ok(ok) => Self::from_ok(ok),
            Err(e) => {
                log::debug!("resume probe failed: {e}");
                Self::Missing
            }
        }
    }
}

/// How the résumé link should be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeProbe {
    /// Send a HEAD request to this URL.
    Request(String),
    /// Nothing to request; the outcome is already known.
    Settled(ProbeOutcome),
}

impl ResumeProbe {
    /// Plan the check for the résumé link's `href`. A link without one is missing.
    #[must_use]
    pub fn for_href(href: Option<&str>) -> Self {
        match href {
            Some(url) => Self::Request(url.to_owned()),
            None => Self::Settled(ProbeOutcome::Missing),
        }
    }
}

/// DOM rewrite applied to the résumé link when its file is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFallback {
    /// New `href` for the résumé link; its `download` attribute is removed.
    pub href: &'static str,
    /// New visible text for the résumé link.
    pub text: &'static str,
    /// Text for the `#formHint` element, when present.
    pub hint: &'static str,
}

impl Default for ResumeFallback {
    fn default() -> Self {
        Self { href: RESUME_FALLBACK_HREF, text: RESUME_FALLBACK_TEXT, hint: RESUME_FALLBACK_HINT }
    }
}

/// The fallback to apply for a probe outcome, if any.
#[must_use]
pub fn resume_fallback(outcome: ProbeOutcome) -> Option<ResumeFallback> {
    match outcome {
        ProbeOutcome::Found => None,
        ProbeOutcome::Missing => Some(ResumeFallback::default()),
    }
}
