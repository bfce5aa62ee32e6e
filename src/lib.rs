//! Interaction layer for a static portfolio site, compiled to WebAssembly.
//!
//! The page's markup is authored by hand; this crate wires it up once the
//! module loads: theme persistence, header elevation, the mobile menu, the
//! contact form's `mailto:` hand-off, and social/project links filled from
//! [`config::SiteConfig`].
//!
//! Everything except `dom` is plain Rust with no browser dependency, so the
//! behavior is unit-tested natively. The `hydrate` feature adds the `web-sys`
//! host and the `#[wasm_bindgen(start)]` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | [`site::SiteCore`]: host events in, DOM actions out |
//! | [`config`] | Immutable site record with JSON override |
//! | [`theme`] | Light/dark preference over an injected key-value store |
//! | [`elevation`] | Header shadow flag from scroll offset |
//! | [`nav`] | Mobile menu open/closed state machine |
//! | [`contact`] | Contact form validation and `mailto:` templating |
//! | [`links`] | Link/value/project lookups and the résumé fallback |
//! | [`footer`] | Footer year text |
//! | [`consts`] | Storage key, selectors, classes, and UI strings |
//! | `dom` | Browser host (`hydrate` only) |

pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod elevation;
pub mod footer;
pub mod links;
pub mod nav;
pub mod site;
pub mod theme;

/// WASM entry point: install console logging and boot the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_ok() {
        log::debug!("console logging enabled");
    }
    if let Err(e) = dom::boot() {
        log::warn!("site boot failed: {e}");
    }
}
