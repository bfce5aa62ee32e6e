//! Header elevation: a shadow flag driven by scroll position.

#[cfg(test)]
#[path = "elevation_test.rs"]
mod elevation_test;

use crate::consts::ELEVATION_THRESHOLD_PX;

/// Whether the header should render elevated at vertical offset `scroll_y`.
#[must_use]
pub fn is_elevated(scroll_y: f64) -> bool {
    scroll_y > ELEVATION_THRESHOLD_PX
}
