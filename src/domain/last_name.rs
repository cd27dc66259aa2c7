use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastName(String);

impl LastName {
    pub fn parse(s: &str) -> Result<LastName, ValidationError> {
        if s.trim().is_empty() {
            Err(ValidationError::LastNameRequired)
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl std::fmt::Display for LastName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for LastName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
