//! Validation engine
//!
//! Derives an [`ErrorMap`] from a [`FormValues`] snapshot by running every
//! applicable row of the rule table. Validation is pure: no logging, no state.

mod errors;
mod rules;

pub use errors::{ErrorKind, ErrorMap, Violation};
pub use rules::{Rule, RULES};

use crate::state::FormValues;

/// Validate a snapshot against the full rule table
pub fn validate(values: &FormValues) -> ErrorMap {
    validate_with(RULES.iter(), values)
}

/// Validate a snapshot against the given rules, in the order given
pub fn validate_with<'a, I>(rules: I, values: &FormValues) -> ErrorMap
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules
        .into_iter()
        .filter_map(|rule| rule.evaluate(values).map(|v| (rule.field, v)))
        .collect()
}
