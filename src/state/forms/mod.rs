//! Form domain layer
//!
//! Values, field paths and the per-session form state.

mod field;
mod form_state;
pub mod path;

pub use field::{Field, FieldValue, FormValues, Position, Skills, DEFAULT_SKILLS};
pub use form_state::{FormState, InputKind};
pub use path::FieldPath;
