use unicode_segmentation::UnicodeSegmentation;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstName(String);

impl FirstName {
    /// Requires at least 5 grapheme clusters; an empty or blank value
    /// fails the same rule.
    pub fn parse(s: &str) -> Result<FirstName, ValidationError> {
        if s.trim().graphemes(true).count() < 5 {
            Err(ValidationError::FirstNameTooShort)
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl std::fmt::Display for FirstName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for FirstName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
