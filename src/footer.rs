//! Footer copyright year.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

/// Text for the `#year` element, zero-padded to four digits.
#[must_use]
pub fn year_text(year: u32) -> String {
    format!("{year:04}")
}
