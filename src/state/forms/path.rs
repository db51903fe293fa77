//! Field path resolution
//!
//! A path is either a bare field name (`"email"`) or a skill selector
//! (`"additionalSkills.CSS"`). Writes never touch the snapshot they read from.

use super::field::{Field, FieldValue, FormValues};
use crate::error::{FormError, Result};
use std::fmt;
use std::str::FromStr;

/// Selector for one leaf value on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    /// A scalar top-level field (never `additionalSkills`)
    Field(Field),
    /// One entry of the skill set
    Skill(String),
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self> {
        let unknown = || FormError::UnknownFieldPath(path.to_string());
        match path.split_once('.') {
            None => match Field::from_name(path) {
                Some(Field::AdditionalSkills) | None => Err(unknown()),
                Some(field) => Ok(FieldPath::Field(field)),
            },
            Some((head, skill)) if head == Field::AdditionalSkills.name() && !skill.is_empty() => {
                Ok(FieldPath::Skill(skill.to_string()))
            }
            Some(_) => Err(unknown()),
        }
    }

    /// The top-level field this path lives under
    pub fn field(&self) -> Field {
        match self {
            FieldPath::Field(field) => *field,
            FieldPath::Skill(_) => Field::AdditionalSkills,
        }
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field(field) => f.write_str(field.name()),
            FieldPath::Skill(skill) => write!(f, "{}.{}", Field::AdditionalSkills.name(), skill),
        }
    }
}

/// Read the value at `path`
pub fn get(values: &FormValues, path: &str) -> Result<FieldValue> {
    match FieldPath::parse(path)? {
        FieldPath::Skill(skill) => values
            .additional_skills
            .get(&skill)
            .map(FieldValue::Bool)
            .ok_or_else(|| FormError::UnknownFieldPath(path.to_string())),
        FieldPath::Field(Field::Position) => {
            Ok(FieldValue::Text(values.position.as_str().to_string()))
        }
        FieldPath::Field(Field::RelevantExperience) => {
            Ok(FieldValue::Number(values.relevant_experience.clone()))
        }
        FieldPath::Field(field) => text_slot(values, field)
            .map(|s| FieldValue::Text(s.to_string()))
            .ok_or_else(|| FormError::UnknownFieldPath(path.to_string())),
    }
}

/// Produce a new snapshot with the value at `path` replaced
pub fn set(values: &FormValues, path: &str, value: FieldValue) -> Result<FormValues> {
    let resolved = FieldPath::parse(path)?;
    let mut next = values.clone();

    match resolved {
        FieldPath::Skill(skill) => {
            let checked = value.as_bool().ok_or_else(|| mismatch(path, "boolean"))?;
            next.additional_skills = values
                .additional_skills
                .with(&skill, checked)
                .ok_or_else(|| FormError::UnknownFieldPath(path.to_string()))?;
        }
        FieldPath::Field(Field::Position) => {
            let raw = value.as_text().ok_or_else(|| mismatch(path, "text"))?;
            next.position = raw.parse()?;
        }
        FieldPath::Field(field) => {
            let raw = value.as_text().ok_or_else(|| mismatch(path, "text"))?;
            let slot = text_slot_mut(&mut next, field)
                .ok_or_else(|| FormError::UnknownFieldPath(path.to_string()))?;
            *slot = raw.to_string();
        }
    }

    Ok(next)
}

fn mismatch(path: &str, expected: &'static str) -> FormError {
    FormError::TypeMismatch {
        path: path.to_string(),
        expected,
    }
}

fn text_slot(values: &FormValues, field: Field) -> Option<&str> {
    let slot = match field {
        Field::FullName => &values.full_name,
        Field::Email => &values.email,
        Field::PhoneNumber => &values.phone_number,
        Field::RelevantExperience => &values.relevant_experience,
        Field::PortfolioUrl => &values.portfolio_url,
        Field::ManagementExperience => &values.management_experience,
        Field::PreferredInterviewTime => &values.preferred_interview_time,
        Field::Position | Field::AdditionalSkills => return None,
    };
    Some(slot)
}

fn text_slot_mut(values: &mut FormValues, field: Field) -> Option<&mut String> {
    match field {
        Field::FullName => Some(&mut values.full_name),
        Field::Email => Some(&mut values.email),
        Field::PhoneNumber => Some(&mut values.phone_number),
        Field::RelevantExperience => Some(&mut values.relevant_experience),
        Field::PortfolioUrl => Some(&mut values.portfolio_url),
        Field::ManagementExperience => Some(&mut values.management_experience),
        Field::PreferredInterviewTime => Some(&mut values.preferred_interview_time),
        Field::Position | Field::AdditionalSkills => None,
    }
}
