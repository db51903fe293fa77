// Rule table for the application form

use super::errors::{ErrorKind, Violation};
use crate::state::{Field, FormValues, Position};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://.*\..*").unwrap());

pub const FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email address is invalid";
pub const PHONE_REQUIRED: &str = "Phone Number is required";
pub const PHONE_INVALID: &str = "Please enter 10 digits number.";
pub const EXPERIENCE_INVALID: &str =
    "Relevant Experience is required and must be greater than 0";
pub const PORTFOLIO_INVALID: &str = "Portfolio URL is required and must be a valid URL";
pub const MANAGEMENT_REQUIRED: &str = "Management Experience is required";
pub const SKILLS_REQUIRED: &str = "At least one skill must be selected";
pub const INTERVIEW_TIME_REQUIRED: &str = "Preferred Interview Time is required";

type Check = fn(&FormValues) -> Option<Violation>;

/// One row of the rule table: a field, when it applies, and its check
pub struct Rule {
    pub field: Field,
    applies: fn(Position) -> bool,
    check: Check,
}

impl Rule {
    pub fn applies(&self, position: Position) -> bool {
        (self.applies)(position)
    }

    /// Run the check if the rule applies to the current position
    pub fn evaluate(&self, values: &FormValues) -> Option<Violation> {
        if !self.applies(values.position) {
            return None;
        }
        (self.check)(values)
    }
}

fn always(_: Position) -> bool {
    true
}

fn developer_or_designer(position: Position) -> bool {
    Field::RelevantExperience.applies_to(position)
}

fn designer(position: Position) -> bool {
    Field::PortfolioUrl.applies_to(position)
}

fn manager(position: Position) -> bool {
    Field::ManagementExperience.applies_to(position)
}

/// Every rule; each reads only its own field, so order is irrelevant
pub static RULES: [Rule; 8] = [
    Rule {
        field: Field::FullName,
        applies: always,
        check: check_full_name,
    },
    Rule {
        field: Field::Email,
        applies: always,
        check: check_email,
    },
    Rule {
        field: Field::PhoneNumber,
        applies: always,
        check: check_phone_number,
    },
    Rule {
        field: Field::RelevantExperience,
        applies: developer_or_designer,
        check: check_relevant_experience,
    },
    Rule {
        field: Field::PortfolioUrl,
        applies: designer,
        check: check_portfolio_url,
    },
    Rule {
        field: Field::ManagementExperience,
        applies: manager,
        check: check_management_experience,
    },
    Rule {
        field: Field::AdditionalSkills,
        applies: always,
        check: check_additional_skills,
    },
    Rule {
        field: Field::PreferredInterviewTime,
        applies: always,
        check: check_interview_time,
    },
];

fn missing(message: &'static str) -> Option<Violation> {
    Some(Violation::new(ErrorKind::MissingRequiredField, message))
}

fn invalid(message: &'static str) -> Option<Violation> {
    Some(Violation::new(ErrorKind::InvalidFormat, message))
}

fn conditional(message: &'static str) -> Option<Violation> {
    Some(Violation::new(ErrorKind::ConditionalRequirement, message))
}

fn check_full_name(values: &FormValues) -> Option<Violation> {
    if values.full_name.trim().is_empty() {
        return missing(FULL_NAME_REQUIRED);
    }
    None
}

fn check_email(values: &FormValues) -> Option<Violation> {
    if values.email.is_empty() {
        missing(EMAIL_REQUIRED)
    } else if !EMAIL_REGEX.is_match(&values.email) {
        invalid(EMAIL_INVALID)
    } else {
        None
    }
}

fn check_phone_number(values: &FormValues) -> Option<Violation> {
    if values.phone_number.is_empty() {
        missing(PHONE_REQUIRED)
    } else if !PHONE_REGEX.is_match(&values.phone_number) {
        invalid(PHONE_INVALID)
    } else {
        None
    }
}

fn check_relevant_experience(values: &FormValues) -> Option<Violation> {
    let raw = values.relevant_experience.trim();
    if raw.is_empty() {
        return conditional(EXPERIENCE_INVALID);
    }
    // Unparseable input counts as not greater than zero.
    match raw.parse::<f64>() {
        Ok(years) if years.is_finite() && years > 0.0 => None,
        _ => invalid(EXPERIENCE_INVALID),
    }
}

fn check_portfolio_url(values: &FormValues) -> Option<Violation> {
    if values.portfolio_url.is_empty() {
        conditional(PORTFOLIO_INVALID)
    } else if !URL_REGEX.is_match(&values.portfolio_url) {
        invalid(PORTFOLIO_INVALID)
    } else {
        None
    }
}

fn check_management_experience(values: &FormValues) -> Option<Violation> {
    if values.management_experience.is_empty() {
        return conditional(MANAGEMENT_REQUIRED);
    }
    None
}

fn check_additional_skills(values: &FormValues) -> Option<Violation> {
    if values.additional_skills.any_selected() {
        return None;
    }
    Some(Violation::new(
        ErrorKind::CollectionConstraint,
        SKILLS_REQUIRED,
    ))
}

fn check_interview_time(values: &FormValues) -> Option<Violation> {
    if values.preferred_interview_time.is_empty() {
        return missing(INTERVIEW_TIME_REQUIRED);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(field: Field) -> &'static Rule {
        RULES.iter().find(|r| r.field == field).unwrap()
    }

    fn kind(field: Field, values: &FormValues) -> Option<ErrorKind> {
        rule(field).evaluate(values).map(|v| v.kind)
    }

    #[test]
    fn test_one_rule_per_field() {
        let mut fields: Vec<Field> = RULES.iter().map(|r| r.field).collect();
        fields.sort();
        fields.dedup();
        assert_eq!(fields.len(), RULES.len());
        assert!(!fields.contains(&Field::Position));
    }

    mod full_name {
        use super::*;

        #[test]
        fn test_blank_is_missing() {
            let mut values = FormValues::new();
            values.full_name = "   ".to_string();
            assert_eq!(
                kind(Field::FullName, &values),
                Some(ErrorKind::MissingRequiredField)
            );
        }

        #[test]
        fn test_present_passes() {
            let mut values = FormValues::new();
            values.full_name = "Grace Hopper".to_string();
            assert_eq!(kind(Field::FullName, &values), None);
        }
    }

    mod email {
        use super::*;

        fn check(email: &str) -> Option<&'static str> {
            let mut values = FormValues::new();
            values.email = email.to_string();
            rule(Field::Email).evaluate(&values).map(|v| v.message)
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(check(""), Some(EMAIL_REQUIRED));
        }

        #[test]
        fn test_shapes() {
            assert_eq!(check("a@b.com"), None);
            assert_eq!(check("first.last@sub.example.org"), None);
            assert_eq!(check("no-at-sign.com"), Some(EMAIL_INVALID));
            assert_eq!(check("a@nodot"), Some(EMAIL_INVALID));
            assert_eq!(check("@b.com"), Some(EMAIL_INVALID));
        }
    }

    mod phone_number {
        use super::*;

        fn check(phone: &str) -> Option<&'static str> {
            let mut values = FormValues::new();
            values.phone_number = phone.to_string();
            rule(Field::PhoneNumber).evaluate(&values).map(|v| v.message)
        }

        #[test]
        fn test_exactly_ten_digits() {
            assert_eq!(check(""), Some(PHONE_REQUIRED));
            assert_eq!(check("1234567890"), None);
            assert_eq!(check("12345"), Some(PHONE_INVALID));
            assert_eq!(check("12345678901"), Some(PHONE_INVALID));
            assert_eq!(check("123-456-78"), Some(PHONE_INVALID));
            assert_eq!(check("123456789a"), Some(PHONE_INVALID));
        }
    }

    mod relevant_experience {
        use super::*;

        fn developer(experience: &str) -> FormValues {
            let mut values = FormValues::new();
            values.position = Position::Developer;
            values.relevant_experience = experience.to_string();
            values
        }

        #[test]
        fn test_empty_is_conditional_requirement() {
            assert_eq!(
                kind(Field::RelevantExperience, &developer("")),
                Some(ErrorKind::ConditionalRequirement)
            );
        }

        #[test]
        fn test_must_be_positive() {
            assert_eq!(kind(Field::RelevantExperience, &developer("2")), None);
            assert_eq!(kind(Field::RelevantExperience, &developer("0.5")), None);
            assert_eq!(
                kind(Field::RelevantExperience, &developer("0")),
                Some(ErrorKind::InvalidFormat)
            );
            assert_eq!(
                kind(Field::RelevantExperience, &developer("-1")),
                Some(ErrorKind::InvalidFormat)
            );
            assert_eq!(
                kind(Field::RelevantExperience, &developer("lots")),
                Some(ErrorKind::InvalidFormat)
            );
        }

        #[test]
        fn test_skipped_for_other_positions() {
            let mut values = developer("");
            values.position = Position::Manager;
            assert_eq!(kind(Field::RelevantExperience, &values), None);
            values.position = Position::Unset;
            assert_eq!(kind(Field::RelevantExperience, &values), None);
        }
    }

    mod portfolio_url {
        use super::*;

        fn designer(url: &str) -> FormValues {
            let mut values = FormValues::new();
            values.position = Position::Designer;
            values.portfolio_url = url.to_string();
            values
        }

        #[test]
        fn test_url_shape() {
            assert_eq!(kind(Field::PortfolioUrl, &designer("https://ada.dev")), None);
            assert_eq!(kind(Field::PortfolioUrl, &designer("HTTP://ADA.DEV")), None);
            assert_eq!(
                kind(Field::PortfolioUrl, &designer("not-a-url")),
                Some(ErrorKind::InvalidFormat)
            );
            assert_eq!(
                kind(Field::PortfolioUrl, &designer("ftp://ada.dev")),
                Some(ErrorKind::InvalidFormat)
            );
            assert_eq!(
                kind(Field::PortfolioUrl, &designer("")),
                Some(ErrorKind::ConditionalRequirement)
            );
        }

        #[test]
        fn test_only_checked_for_designer() {
            let mut values = designer("not-a-url");
            values.position = Position::Developer;
            assert_eq!(kind(Field::PortfolioUrl, &values), None);
        }
    }

    mod management_experience {
        use super::*;

        #[test]
        fn test_required_for_manager_only() {
            let mut values = FormValues::new();
            values.position = Position::Manager;
            assert_eq!(
                kind(Field::ManagementExperience, &values),
                Some(ErrorKind::ConditionalRequirement)
            );
            values.position = Position::Designer;
            assert_eq!(kind(Field::ManagementExperience, &values), None);
        }
    }

    mod additional_skills {
        use super::*;

        #[test]
        fn test_requires_one_selection() {
            let values = FormValues::new();
            assert_eq!(
                kind(Field::AdditionalSkills, &values),
                Some(ErrorKind::CollectionConstraint)
            );

            let mut selected = values.clone();
            selected.additional_skills = selected.additional_skills.with("CSS", true).unwrap();
            assert_eq!(kind(Field::AdditionalSkills, &selected), None);
        }

        #[test]
        fn test_empty_skill_set_fails() {
            let values = FormValues::with_skills(Vec::<String>::new());
            assert_eq!(
                kind(Field::AdditionalSkills, &values),
                Some(ErrorKind::CollectionConstraint)
            );
        }
    }
}
