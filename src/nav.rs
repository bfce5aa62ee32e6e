//! Mobile navigation disclosure panel.
//!
//! A two-state machine. Every transition that changes the state yields a
//! [`NavRender`] describing the panel class and the toggle's accessible
//! label; events that leave the state unchanged yield nothing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{NAV_LABEL_CLOSED, NAV_LABEL_OPEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// What the host must render after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRender {
    /// Whether the panel carries the open class.
    pub open: bool,
    /// `aria-label` for the toggle button.
    pub label: &'static str,
}

impl NavRender {
    fn for_state(state: NavState) -> Self {
        let open = state.is_open();
        Self { open, label: if open { NAV_LABEL_OPEN } else { NAV_LABEL_CLOSED } }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavController {
    state: NavState,
}

impl NavController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Toggle button clicked.
    pub fn on_toggle(&mut self) -> NavRender {
        let next = if self.state.is_open() { NavState::Closed } else { NavState::Open };
        self.transition(next)
    }

    /// A `.nav-link` inside the panel was clicked.
    pub fn on_link_click(&mut self) -> Option<NavRender> {
        self.close()
    }

    /// A click landed somewhere in the document.
    ///
    /// Clicks inside the panel or on the toggle are owned by their own
    /// handlers and never close the menu from here.
    pub fn on_document_click(&mut self, inside_panel: bool, inside_toggle: bool) -> Option<NavRender> {
        if inside_panel || inside_toggle {
            return None;
        }
        self.close()
    }

    /// A key was pressed anywhere in the document.
    pub fn on_key(&mut self, key: &str) -> Option<NavRender> {
        if key == crate::consts::ESCAPE_KEY { self.close() } else { None }
    }

    fn close(&mut self) -> Option<NavRender> {
        if self.state.is_open() { Some(self.transition(NavState::Closed)) } else { None }
    }

    fn transition(&mut self, next: NavState) -> NavRender {
        self.state = next;
        NavRender::for_state(next)
    }
}
