use crate::form::FormState;

use super::{Email, FirstName, LastName, ValidationError};

/// The snapshot kept after a fully-valid submission. Only the last
/// successful submission is ever held; it is never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: Email,
    pub message: Option<String>,
}

impl TryFrom<&FormState> for ContactSubmission {
    type Error = Vec<ValidationError>;

    /// Runs every field rule so the caller can surface all failures at
    /// once instead of stopping at the first one.
    fn try_from(state: &FormState) -> Result<Self, Self::Error> {
        let first_name = FirstName::parse(&state.first_name);
        let last_name = LastName::parse(&state.last_name);
        let email = Email::parse(&state.email);
        match (first_name, last_name, email) {
            (Ok(first_name), Ok(last_name), Ok(email)) => Ok(Self {
                first_name,
                last_name,
                email,
                message: state.message(),
            }),
            (first_name, last_name, email) => {
                Err([first_name.err(), last_name.err(), email.err()]
                    .into_iter()
                    .flatten()
                    .collect())
            }
        }
    }
}
