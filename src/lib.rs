//! Job application form core
//!
//! Field values with a nested skill set, a position-dependent validation rule
//! table, and a submission controller that calls the success sink once per
//! clean submit attempt. Rendering and input binding live outside this crate
//! (see the `job-form` binary for a terminal front-end).

pub mod error;
pub mod session;
pub mod state;
pub mod submission;
pub mod validation;

pub use error::FormError;
pub use session::FormSession;
pub use state::{Field, FieldPath, FieldValue, FormState, FormValues, InputKind, Position, Skills};
pub use submission::{
    sink_fn, AttemptOutcome, SubmissionController, SubmissionSink, SubmissionState,
};
pub use validation::{validate, ErrorKind, ErrorMap, Violation};
