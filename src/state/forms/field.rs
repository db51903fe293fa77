//! Form field value objects

use crate::error::FormError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Skill checkboxes offered when no other set is configured
pub const DEFAULT_SKILLS: [&str; 3] = ["JavaScript", "CSS", "Python"];

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Numeric input kept in its raw string form
    Number(String),
    Bool(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the string form (returns None for booleans)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Number(s) => Some(s),
            FieldValue::Bool(_) => None,
        }
    }

    /// Get the boolean value (returns None for text and numbers)
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Position the applicant is applying for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Unset,
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Unset,
        Position::Developer,
        Position::Designer,
        Position::Manager,
    ];

    /// Wire form, as a select element would submit it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "Select a position",
            other => other.as_str(),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Unset => Self::Developer,
            Self::Developer => Self::Designer,
            Self::Designer => Self::Manager,
            Self::Manager => Self::Unset,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Unset => Self::Manager,
            Self::Developer => Self::Unset,
            Self::Designer => Self::Developer,
            Self::Manager => Self::Designer,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FormError::UnknownPosition(s.to_string()))
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Top-level fields of the application form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Email,
        Field::PhoneNumber,
        Field::Position,
        Field::RelevantExperience,
        Field::PortfolioUrl,
        Field::ManagementExperience,
        Field::AdditionalSkills,
        Field::PreferredInterviewTime,
    ];

    /// Name used in field paths, error maps and the submitted payload
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Position => "position",
            Self::RelevantExperience => "relevantExperience",
            Self::PortfolioUrl => "portfolioURL",
            Self::ManagementExperience => "managementExperience",
            Self::AdditionalSkills => "additionalSkills",
            Self::PreferredInterviewTime => "preferredInterviewTime",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience",
            Self::AdditionalSkills => "Additional Skills",
            Self::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Whether the field is shown for, and checked against, the given position
    pub fn applies_to(&self, position: Position) -> bool {
        match self {
            Self::RelevantExperience => {
                matches!(position, Position::Developer | Position::Designer)
            }
            Self::PortfolioUrl => position == Position::Designer,
            Self::ManagementExperience => position == Position::Manager,
            _ => true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The fixed set of skill checkboxes and their state
///
/// Keys are fixed when the set is built; only the flags change afterwards.
/// Entries keep their construction order so the payload and the UI list
/// skills the way they were configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skills {
    entries: Vec<(String, bool)>,
}

impl Skills {
    /// Build an all-unchecked set from skill names
    ///
    /// Duplicates and blank names are dropped; a blank name has no field path.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, bool)> = Vec::new();
        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                tracing::warn!("Skipping blank skill name");
                continue;
            }
            if !entries.iter().any(|(n, _)| *n == name) {
                entries.push((name, false));
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, checked)| *checked)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Copy of the set with one flag replaced, or None for an unknown skill
    pub fn with(&self, name: &str, checked: bool) -> Option<Self> {
        if !self.contains(name) {
            return None;
        }
        let entries = self
            .entries
            .iter()
            .map(|(n, c)| {
                if n == name {
                    (n.clone(), checked)
                } else {
                    (n.clone(), *c)
                }
            })
            .collect();
        Some(Self { entries })
    }

    pub fn any_selected(&self) -> bool {
        self.entries.iter().any(|(_, checked)| *checked)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, c)| (n, c)))
    }
}

/// Snapshot of every value on the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: Position,
    pub relevant_experience: String,
    #[serde(rename = "portfolioURL")]
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: Skills,
    pub preferred_interview_time: String,
}

impl FormValues {
    /// Blank snapshot with the default skill set
    pub fn new() -> Self {
        Self::default()
    }

    /// Blank snapshot with a custom skill set
    pub fn with_skills<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            additional_skills: Skills::new(names),
            ..Self::default()
        }
    }

    /// Payload shown to the user after a clean submission
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod position {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_unset() {
            assert_eq!(Position::default(), Position::Unset);
            assert_eq!(Position::Unset.as_str(), "");
        }

        #[test]
        fn test_parse_known_values() {
            assert_eq!("Developer".parse::<Position>(), Ok(Position::Developer));
            assert_eq!("Designer".parse::<Position>(), Ok(Position::Designer));
            assert_eq!("Manager".parse::<Position>(), Ok(Position::Manager));
            assert_eq!("".parse::<Position>(), Ok(Position::Unset));
        }

        #[test]
        fn test_parse_is_case_sensitive() {
            assert_eq!(
                "developer".parse::<Position>(),
                Err(FormError::UnknownPosition("developer".to_string()))
            );
        }

        #[test]
        fn test_next_and_prev_cycle() {
            let mut p = Position::Unset;
            for _ in 0..4 {
                p = p.next();
            }
            assert_eq!(p, Position::Unset);
            assert_eq!(Position::Unset.prev(), Position::Manager);
            assert_eq!(Position::Designer.prev().next(), Position::Designer);
        }
    }

    mod field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_name_round_trips_every_field() {
            for field in Field::ALL {
                assert_eq!(Field::from_name(field.name()), Some(field));
            }
            assert_eq!(Field::from_name("portfolioUrl"), None);
        }

        #[test]
        fn test_conditional_fields_follow_position() {
            assert!(!Field::RelevantExperience.applies_to(Position::Unset));
            assert!(Field::RelevantExperience.applies_to(Position::Developer));
            assert!(Field::RelevantExperience.applies_to(Position::Designer));
            assert!(!Field::RelevantExperience.applies_to(Position::Manager));
            assert!(Field::PortfolioUrl.applies_to(Position::Designer));
            assert!(!Field::PortfolioUrl.applies_to(Position::Developer));
            assert!(Field::ManagementExperience.applies_to(Position::Manager));
            assert!(!Field::ManagementExperience.applies_to(Position::Designer));
            assert!(Field::Email.applies_to(Position::Unset));
        }
    }

    mod skills {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_set_is_unchecked() {
            let skills = Skills::default();
            assert_eq!(
                skills.names().collect::<Vec<_>>(),
                vec!["JavaScript", "CSS", "Python"]
            );
            assert!(!skills.any_selected());
        }

        #[test]
        fn test_with_replaces_only_target() {
            let skills = Skills::default();
            let updated = skills.with("CSS", true).unwrap();
            assert_eq!(updated.get("CSS"), Some(true));
            assert_eq!(updated.get("JavaScript"), Some(false));
            assert_eq!(updated.get("Python"), Some(false));
            // original untouched
            assert_eq!(skills.get("CSS"), Some(false));
        }

        #[test]
        fn test_with_unknown_skill_is_none() {
            assert!(Skills::default().with("Rust", true).is_none());
        }

        #[test]
        fn test_new_drops_duplicates() {
            let skills = Skills::new(["Go", "Go", "Rust"]);
            assert_eq!(skills.len(), 2);
        }

        #[test]
        fn test_new_skips_blank_names() {
            let skills = Skills::new(["", "  ", "Rust"]);
            assert_eq!(skills.names().collect::<Vec<_>>(), vec!["Rust"]);
        }

        #[test]
        fn test_empty_set_has_nothing_selected() {
            let skills = Skills::new(Vec::<String>::new());
            assert!(skills.is_empty());
            assert!(!skills.any_selected());
        }
    }

    mod form_values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_payload_uses_form_field_names() {
            let mut values = FormValues::new();
            values.full_name = "Ada".to_string();
            values.position = Position::Designer;
            values.additional_skills = values.additional_skills.with("Python", true).unwrap();

            let json: serde_json::Value =
                serde_json::from_str(&values.to_pretty_json().unwrap()).unwrap();
            assert_eq!(json["fullName"], "Ada");
            assert_eq!(json["position"], "Designer");
            assert_eq!(json["portfolioURL"], "");
            assert_eq!(json["additionalSkills"]["Python"], true);
            assert_eq!(json["additionalSkills"]["CSS"], false);
        }

        #[test]
        fn test_unset_position_serializes_empty() {
            let json = serde_json::to_value(FormValues::new()).unwrap();
            assert_eq!(json["position"], "");
        }

        #[test]
        fn test_with_skills_uses_given_names() {
            let values = FormValues::with_skills(["Rust", "SQL"]);
            assert_eq!(
                values.additional_skills.names().collect::<Vec<_>>(),
                vec!["Rust", "SQL"]
            );
        }
    }
}
