//! Reusable UI components

mod dialog;

pub use dialog::render_success_dialog;
