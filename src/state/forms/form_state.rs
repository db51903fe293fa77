//! Form state: the current snapshot and the errors of the last submit attempt

use super::field::{Field, FieldValue, FormValues};
use super::path as resolver;
use crate::error::Result;
use crate::validation::ErrorMap;

/// How the input-binding layer collected a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Checkbox,
    Text,
}

impl InputKind {
    /// Turn raw input into a field value
    ///
    /// Checkbox input becomes a boolean; anything else is kept verbatim,
    /// numeric-looking text included.
    pub fn coerce(&self, raw: &str) -> FieldValue {
        match self {
            InputKind::Checkbox => {
                let checked = ["true", "on", "1", "yes", "checked"]
                    .iter()
                    .any(|t| raw.trim().eq_ignore_ascii_case(t));
                FieldValue::Bool(checked)
            }
            InputKind::Text => FieldValue::Text(raw.to_string()),
        }
    }
}

/// Current values plus the error map of the most recent submit attempt
///
/// Updates never validate; errors only change when a submission replaces them.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: ErrorMap,
}

impl FormState {
    pub fn new(initial: FormValues) -> Self {
        Self {
            values: initial,
            errors: ErrorMap::new(),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Message to show under a field, from the last attempt
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.message(field)
    }

    pub fn get(&self, path: &str) -> Result<FieldValue> {
        resolver::get(&self.values, path)
    }

    /// Apply one field change and return the new snapshot
    pub fn update(&mut self, path: &str, raw: &str, kind: InputKind) -> Result<&FormValues> {
        let next = resolver::set(&self.values, path, kind.coerce(raw))?;
        tracing::debug!(path, ?kind, "field updated");
        self.values = next;
        Ok(&self.values)
    }

    /// Fields shown for the currently selected position, in form order
    pub fn visible_fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL
            .into_iter()
            .filter(|f| f.applies_to(self.values.position))
    }

    pub(crate) fn replace_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }
}
