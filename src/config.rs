//! Site configuration: identity, social links, and project URLs.
//!
//! DESIGN
//! ======
//! The record is built once at startup and never mutated. The built-in
//! default is the owner's record; a page may embed a JSON document under
//! `#site-config` to override any subset of fields, missing fields keep
//! their default values.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site config field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Immutable site-wide configuration read by every component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Project slug → URL. `"#"` marks a project without a public link yet.
    pub projects: BTreeMap<String, String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let projects = ["job-portal-demo", "job-portal-code", "ecom-demo", "ecom-code", "api-docs", "api-code"]
            .into_iter()
            .map(|slug| (slug.to_owned(), "#".to_owned()))
            .collect();
        Self {
            name: "Akash Kumar".into(),
            location: "Bidar, Karnataka, India".into(),
            email: "akashkumarce19006@gmail.com".into(),
            github: "https://github.com/Akash-123-Hub".into(),
            linkedin: "https://www.linkedin.com/in/akash-kumar-79b328309".into(),
            projects,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override on top of the built-in record and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyField`] when `name` or `email` is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the fields every component relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ConfigError::EmptyField("email"));
        }
        Ok(())
    }

    /// Resolve the embedded override, falling back to the default on any error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("site config rejected, using built-in record: {e}");
                Self::default()
            }
        }
    }
}
