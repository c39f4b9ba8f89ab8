//! Entity name value object: equality by normalized value, not identity.
//!
//! Products and units of measure are identified by their name. A name is
//! accepted only if it is one-or-more alphabetic characters (Latin or
//! Cyrillic, including ё/Ё) with no digits, punctuation, or whitespace, and is
//! stored capitalized: first character upper-cased, remainder lower-cased.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

/// A validated, normalized entity name.
///
/// Immutable once constructed; compare with [`EntityName::key`] for
/// case-insensitive uniqueness checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Validate `raw` against the alphabetic pattern and normalize it.
    ///
    /// `field` scopes the error message to the caller's input field.
    pub fn parse(raw: &str, field: &'static str) -> ValidationResult<Self> {
        if raw.is_empty() || !raw.chars().all(is_name_char) {
            return Err(ValidationError::invalid_format(field));
        }
        Ok(Self(capitalize(raw)))
    }

    /// The stored (capitalized) form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive uniqueness key.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Whether two names collide under case-insensitive comparison.
    pub fn collides_with(&self, other: &EntityName) -> bool {
        self.key() == other.key()
    }
}

impl core::fmt::Display for EntityName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{0410}'..='\u{044F}').contains(&c) || c == 'ё' || c == 'Ё'
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
