//! Field rendering utilities for forms

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CURSOR: &str = "▌";

fn label_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn marker(is_active: bool) -> Span<'static> {
    if is_active {
        Span::styled("> ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

/// Error line shown under a field after a failed submit
pub fn error_line(message: &str) -> Line<'_> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(message, Style::default().fg(Color::Red)),
    ])
}

/// Lines for a text input: label and value, then its error if any
pub fn field_lines<'a>(
    label: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
) -> Vec<Line<'a>> {
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let value_style = if value.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        marker(is_active),
        Span::styled(format!("{label}: "), label_style(is_active)),
        Span::styled(display_value, value_style),
    ];
    if is_active {
        spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }

    let mut lines = vec![Line::from(spans)];
    lines.extend(error.map(error_line));
    lines
}

/// Lines for a selector showing its current choice between arrows
pub fn selector_lines<'a>(
    label: &'a str,
    choice: &'a str,
    is_active: bool,
    error: Option<&'a str>,
) -> Vec<Line<'a>> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![Line::from(vec![
        marker(is_active),
        Span::styled(format!("{label}: "), label_style(is_active)),
        Span::styled("◀ ", arrow_style),
        Span::styled(choice, Style::default().fg(Color::White)),
        Span::styled(" ▶", arrow_style),
    ])];
    lines.extend(error.map(error_line));
    lines
}

/// A checkbox line
pub fn checkbox_line(label: &str, checked: bool, is_active: bool) -> Line<'static> {
    let checkbox = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        marker(is_active),
        Span::raw("  "),
        Span::styled(format!("{checkbox} {label}"), style),
    ])
}

/// A button line
pub fn button_line(label: &str, is_active: bool) -> Line<'static> {
    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    Line::from(vec![
        marker(is_active),
        Span::styled(format!("[ {label} ]"), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_inactive_empty_field_shows_placeholder() {
        let lines = field_lines("Email", "", false, None);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "  Email: (empty)");
    }

    #[test]
    fn test_active_field_has_cursor_and_marker() {
        let lines = field_lines("Email", "a@b", true, None);
        assert_eq!(text(&lines[0]), "> Email: a@b▌");
    }

    #[test]
    fn test_error_adds_line() {
        let lines = field_lines("Email", "x", false, Some("Email address is invalid"));
        assert_eq!(lines.len(), 2);
        assert!(text(&lines[1]).contains("Email address is invalid"));
    }

    #[test]
    fn test_checkbox_states() {
        assert!(text(&checkbox_line("CSS", true, false)).contains("[x] CSS"));
        assert!(text(&checkbox_line("CSS", false, false)).contains("[ ] CSS"));
    }
}
