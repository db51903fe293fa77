//! Platform-specific key hints

/// Submit shortcut display for the help line
/// Ctrl+S works on all platforms (Enter on the Submit row also submits)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Dismiss hint for modal dialogs
/// - macOS: "Return"
/// - Linux/Windows: "Enter"
#[cfg(target_os = "macos")]
pub const CONFIRM_KEY: &str = "Return";

#[cfg(not(target_os = "macos"))]
pub const CONFIRM_KEY: &str = "Enter";
