//! Success dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the submitted payload in a dialog overlay centered on the screen
pub fn render_success_dialog(frame: &mut Frame, payload: &str) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            crate::platform::CONFIRM_KEY,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Form submitted successfully!",
            title_color: Color::Green,
            border_color: Color::Green,
            message: payload,
            hint: Some(hint),
            max_width: 72,
        },
    );
}
