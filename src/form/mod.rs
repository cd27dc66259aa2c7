mod errors;
mod event;
mod field;
mod state;

pub use errors::FieldErrors;
pub use event::FormEvent;
pub use field::Field;
pub use state::FormState;

use crate::domain::{ContactSubmission, Email, FirstName, LastName, ValidationError};

/// The contact form component: input state, per-field errors and the
/// snapshot of the last successful submission. Callers feed it
/// [`FormEvent`]s and re-render after each one.
#[derive(Debug, Default)]
pub struct ContactForm {
    state: FormState,
    errors: FieldErrors,
    submitted: Option<ContactSubmission>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::InputChanged { field, value } => self.input_changed(field, value),
            FormEvent::SubmitRequested => self.submit(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&ContactSubmission> {
        self.submitted.as_ref()
    }

    #[tracing::instrument(name = "Handle input change", skip(self, value))]
    fn input_changed(&mut self, field: Field, value: String) {
        self.state.set_value(field, value);
        match self.validate_field(field) {
            Ok(()) => self.errors.clear(field),
            Err(error) => self.errors.set(error),
        }
    }

    #[tracing::instrument(name = "Handle submit attempt", skip(self))]
    fn submit(&mut self) {
        match ContactSubmission::try_from(&self.state) {
            Ok(submission) => {
                self.submitted = Some(submission);
                self.state = FormState::default();
                self.errors.clear_all();
                tracing::info!("submission accepted");
            }
            Err(failures) => {
                tracing::debug!(failed_fields = failures.len(), "submission rejected");
                self.errors.clear_all();
                for error in failures {
                    self.errors.set(error);
                }
            }
        }
    }

    fn validate_field(&self, field: Field) -> Result<(), ValidationError> {
        let value = self.state.value(field);
        match field {
            Field::FirstName => FirstName::parse(value).map(|_| ()),
            Field::LastName => LastName::parse(value).map(|_| ()),
            Field::Email => Email::parse(value).map(|_| ()),
            Field::Message => Ok(()),
        }
    }
}
