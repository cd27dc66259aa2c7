use super::Field;

/// A user interaction, handled synchronously before the next one.
#[derive(Debug, Clone)]
pub enum FormEvent {
    InputChanged { field: Field, value: String },
    SubmitRequested,
}
