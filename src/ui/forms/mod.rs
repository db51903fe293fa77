//! Form rendering module
//!
//! - `field_renderer`: Row rendering utilities
//! - `application_form`: The job application form

mod application_form;
mod field_renderer;

pub use application_form::draw_application;
