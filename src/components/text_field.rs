//! Single-line text input
//!
//! Form values live in plain `String`s owned by the form. This module only
//! applies key presses to such a string and renders it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use crate::theme::Styles;

/// Result of feeding a key to a field being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value changed
    Changed,
    /// Key consumed, value unchanged
    Unchanged,
    /// Enter: accept the value
    Submit,
    /// Esc: stop editing
    Cancel,
    /// Tab: accept and move to the next field
    Next,
    /// Shift+Tab: accept and move to the previous field
    Previous,
}

/// Apply a key press to `value`
pub fn edit(value: &mut String, key: KeyEvent) -> EditOutcome {
    match key.code {
        KeyCode::Enter => EditOutcome::Submit,
        KeyCode::Esc => EditOutcome::Cancel,
        KeyCode::Tab => EditOutcome::Next,
        KeyCode::BackTab => EditOutcome::Previous,
        KeyCode::Backspace => {
            if value.pop().is_some() {
                EditOutcome::Changed
            } else {
                EditOutcome::Unchanged
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if value.is_empty() {
                EditOutcome::Unchanged
            } else {
                value.clear();
                EditOutcome::Changed
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            value.push(c);
            EditOutcome::Changed
        }
        _ => EditOutcome::Unchanged,
    }
}

/// Render `label: value` with a placeholder when empty and a cursor while
/// editing
pub fn field_line(label: &str, value: &str, focused: bool, editing: bool) -> Line<'static> {
    let label_style = if focused {
        Styles::focused()
    } else {
        Styles::text_secondary()
    };

    let mut spans = vec![Span::styled(format!("{label:<18}"), label_style)];
    if value.is_empty() && !editing {
        spans.push(Span::styled(format!("[{label}]"), Styles::text_muted()));
    } else {
        spans.push(Span::styled(value.to_string(), Styles::text()));
    }
    if editing {
        spans.push(Span::styled("▏", Styles::title()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut value = String::new();
        assert_eq!(edit(&mut value, key(KeyCode::Char('é'))), EditOutcome::Changed);
        assert_eq!(edit(&mut value, key(KeyCode::Char('t'))), EditOutcome::Changed);
        assert_eq!(value, "ét");
        assert_eq!(edit(&mut value, key(KeyCode::Backspace)), EditOutcome::Changed);
        assert_eq!(value, "é");
        edit(&mut value, key(KeyCode::Backspace));
        assert_eq!(edit(&mut value, key(KeyCode::Backspace)), EditOutcome::Unchanged);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut value = "SLA-0001".to_string();
        let outcome = edit(
            &mut value,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert_eq!(outcome, EditOutcome::Changed);
        assert!(value.is_empty());
    }

    #[test]
    fn test_control_keys() {
        let mut value = String::new();
        assert_eq!(edit(&mut value, key(KeyCode::Enter)), EditOutcome::Submit);
        assert_eq!(edit(&mut value, key(KeyCode::Esc)), EditOutcome::Cancel);
        assert_eq!(edit(&mut value, key(KeyCode::Tab)), EditOutcome::Next);
        assert_eq!(edit(&mut value, key(KeyCode::BackTab)), EditOutcome::Previous);
        assert_eq!(edit(&mut value, key(KeyCode::F(5))), EditOutcome::Unchanged);
    }
}
