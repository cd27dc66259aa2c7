use std::collections::HashMap;

use crate::domain::ValidationError;

use super::Field;

/// The per-field validation errors currently on display. A field has an
/// entry exactly while its value fails its rule.
#[derive(Debug, Default, Clone)]
pub struct FieldErrors {
    entries: HashMap<Field, ValidationError>,
}

impl FieldErrors {
    pub fn set(&mut self, error: ValidationError) {
        self.entries.insert(error.field(), error);
    }

    pub fn clear(&mut self, field: Field) {
        self.entries.remove(&field);
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.entries.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
