//! Form session: one form state driven by one submission controller

use crate::error::Result;
use crate::state::{Field, FormState, FormValues, InputKind};
use crate::submission::{SubmissionController, SubmissionSink, SubmissionState};
use crate::validation::ErrorMap;

/// Entry point for an input-binding layer
pub struct FormSession<S> {
    form: FormState,
    controller: SubmissionController<S>,
}

impl<S: SubmissionSink> FormSession<S> {
    pub fn new(initial: FormValues, sink: S) -> Self {
        Self {
            form: FormState::new(initial),
            controller: SubmissionController::new(sink),
        }
    }

    /// Apply one field change (see [`FormState::update`])
    pub fn update(&mut self, path: &str, raw: &str, kind: InputKind) -> Result<&FormValues> {
        self.form.update(path, raw, kind)
    }

    /// Submit the current values; returns true when the attempt was clean
    pub fn submit(&mut self) -> bool {
        let outcome = self.controller.attempt(self.form.values());
        let clean = outcome.is_clean();
        self.form.replace_errors(outcome.errors);
        clean
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn values(&self) -> &FormValues {
        self.form.values()
    }

    pub fn errors(&self) -> &ErrorMap {
        self.form.errors()
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.form.error_for(field)
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.controller.state()
    }

    pub fn controller(&self) -> &SubmissionController<S> {
        &self.controller
    }
}
