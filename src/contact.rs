//! Contact form → `mailto:` URL.
//!
//! DESIGN
//! ======
//! The body template interleaves literal `%20`/`%0D%0A` escapes with
//! individually encoded fields, so line breaks survive every mail client
//! the same way. Fields are encoded with the `encodeURIComponent` character
//! set, never the form-urlencoded one (which would turn spaces into `+`).
//!
//! Invalid submissions abort without any visible feedback; callers only get
//! the reason back as a [`ContactError`].

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::config::SiteConfig;
use crate::consts::SUBJECT_PREFIX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("contact form field `{}` is empty", .0.as_str())]
    MissingField(Field),
}

/// Trimmed contact form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Build from raw field values; absent fields read as empty.
    #[must_use]
    pub fn from_fields(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Self {
        let clean = |v: Option<&str>| v.unwrap_or_default().trim().to_owned();
        Self { name: clean(name), email: clean(email), message: clean(message) }
    }

    /// All three fields must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] for the first empty field.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [(Field::Name, &self.name), (Field::Email, &self.email), (Field::Message, &self.message)] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Validate and build the `mailto:` URL addressed to the site owner.
    ///
    /// # Errors
    ///
    /// Propagates [`ContactForm::validate`] failures.
    pub fn mailto_href(&self, config: &SiteConfig) -> Result<String, ContactError> {
        self.validate()?;
        Ok(mailto_href(config, self))
    }
}

/// Build the `mailto:` URL without validating the form.
#[must_use]
pub fn mailto_href(config: &SiteConfig, form: &ContactForm) -> String {
    let subject = format!("{SUBJECT_PREFIX}{}", form.name);
    let body = format!(
        "Hi%20{},%0D%0A%0D%0A{}%0D%0A%0D%0AFrom:%20{}%0D%0AEmail:%20{}%0D%0A",
        encode_uri_component(&config.name),
        encode_uri_component(&form.message),
        encode_uri_component(&form.name),
        encode_uri_component(&form.email),
    );
    format!("mailto:{}?subject={}&body={body}", encode_uri_component(&config.email), encode_uri_component(&subject))
}

/// Percent-encode UTF-8 bytes outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
#[must_use]
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(char::from(b)),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
