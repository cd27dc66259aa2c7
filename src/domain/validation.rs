use crate::form::Field;

/// A field-level rule violation. The `Display` output is exactly the
/// text shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("error: firstName must have at least 5 characters")]
    FirstNameTooShort,
    #[error("error: lastName is a required field")]
    LastNameRequired,
    #[error("error: email is required")]
    EmailRequired,
    #[error("error: email must be a valid email address")]
    EmailInvalid,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::FirstNameTooShort => Field::FirstName,
            Self::LastNameRequired => Field::LastName,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
        }
    }
}
