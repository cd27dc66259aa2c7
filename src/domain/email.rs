use validator::validate_email;

use super::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(s: &str) -> Result<Email, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        // `validate_email` follows the HTML5 grammar, which admits
        // dotless domains like `user@localhost`; we also require a TLD.
        let domain_has_tld = s
            .rsplit_once('@')
            .map_or(false, |(_, domain)| domain.contains('.'));
        if validate_email(s) && domain_has_tld {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::EmailInvalid)
        }
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
