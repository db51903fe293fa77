// Validation errors

use crate::state::Field;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Category of a failed rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty value for a field every applicant must fill in
    MissingRequiredField,
    /// Value present but not in the expected shape
    InvalidFormat,
    /// Empty value for a field only the current position requires
    ConditionalRequirement,
    /// No skill selected
    CollectionConstraint,
}

/// A failed rule for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl Violation {
    pub fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Per-field validation result of one submit attempt
///
/// A field with no entry is valid. An empty map means the whole form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<Field, Violation>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn get(&self, field: Field) -> Option<&Violation> {
        self.entries.get(&field)
    }

    /// Message to display under a field, if it failed
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.entries.get(&field).map(|v| v.message)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    /// Field name to message, the shape a renderer consumes
    pub fn messages(&self) -> BTreeMap<&'static str, &'static str> {
        self.entries
            .iter()
            .map(|(f, v)| (f.name(), v.message))
            .collect()
    }
}

impl FromIterator<(Field, Violation)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, Violation)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ErrorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(f, v)| (f, v.message)))
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, violation) in &self.entries {
            writeln!(f, "{}: {}", field, violation)?;
        }
        Ok(())
    }
}
