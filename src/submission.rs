//! Submission controller
//!
//! A submit attempt validates the snapshot it is given and, when the result is
//! clean, hands the values to the success sink exactly once. The sink is only
//! ever called from inside [`SubmissionController::attempt`], so later value
//! changes cannot trigger it.

use crate::state::FormValues;
use crate::validation::{validate, ErrorMap};

/// Receives the values of each clean submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn on_submit_success(&mut self, values: &FormValues);
}

/// Sink backed by a closure
pub struct FnSink<F>(F);

/// Wrap a closure as a [`SubmissionSink`]
pub fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(&FormValues),
{
    FnSink(f)
}

impl<F> SubmissionSink for FnSink<F>
where
    F: FnMut(&FormValues),
{
    fn on_submit_success(&mut self, values: &FormValues) {
        (self.0)(values)
    }
}

/// Where the controller is between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// The last attempt failed validation; its errors are on display
    AttemptRecorded,
}

/// What one submit attempt produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    pub errors: ErrorMap,
}

impl AttemptOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct SubmissionController<S> {
    sink: S,
    state: SubmissionState,
    last_clean: Option<bool>,
    attempts: u64,
    submissions: u64,
}

impl<S: SubmissionSink> SubmissionController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            state: SubmissionState::Idle,
            last_clean: None,
            attempts: 0,
            submissions: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Whether the most recent attempt was clean (None before the first one)
    pub fn last_attempt_clean(&self) -> Option<bool> {
        self.last_clean
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Number of clean attempts, i.e. sink invocations
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Run one submit attempt against `values`
    pub fn attempt(&mut self, values: &FormValues) -> AttemptOutcome {
        let errors = validate(values);
        let clean = errors.is_empty();

        self.attempts += 1;
        self.state = SubmissionState::AttemptRecorded;
        self.last_clean = Some(clean);
        tracing::debug!(
            attempt = self.attempts,
            errors = errors.len(),
            "submit attempt validated"
        );

        if clean {
            self.sink.on_submit_success(values);
            self.submissions += 1;
            self.state = SubmissionState::Idle;
            tracing::info!(attempt = self.attempts, "form submitted");
        } else {
            let failed: Vec<&str> = errors.fields().map(|f| f.name()).collect();
            tracing::info!(
                attempt = self.attempts,
                fields = ?failed,
                "submission rejected"
            );
        }

        AttemptOutcome { errors }
    }
}
