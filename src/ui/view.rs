//! Line-based page building blocks
//!
//! Every page is rendered as a scrollable column of lines. `PageView` collects
//! those lines and remembers which one holds the focus so the view can
//! follow it.

use ratatui::text::{Line, Span};

use crate::content::Card;
use crate::theme::Styles;

#[derive(Debug, Default)]
pub struct PageView {
    pub lines: Vec<Line<'static>>,
    /// Index of the line holding the focused control
    pub focus_line: Option<usize>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Mark the next pushed line as focused
    pub fn focus_next(&mut self) {
        self.focus_line = Some(self.lines.len());
    }

    pub fn kicker(&mut self, text: &str) {
        self.push(Line::styled(text.to_uppercase(), Styles::kicker()));
    }

    /// Page or hero title
    pub fn title(&mut self, text: &str) {
        self.push(Line::styled(text.to_string(), Styles::title()));
    }

    /// Section heading preceded by a blank line
    pub fn section(&mut self, text: &str) {
        self.blank();
        self.push(Line::styled(format!("━━ {text}"), Styles::title()));
    }

    pub fn text(&mut self, text: &str) {
        self.push(Line::styled(text.to_string(), Styles::text_secondary()));
    }

    pub fn muted(&mut self, text: &str) {
        self.push(Line::styled(text.to_string(), Styles::text_muted()));
    }

    pub fn bullet(&mut self, text: &str) {
        self.push(Line::from(vec![
            Span::styled("  • ", Styles::title()),
            Span::styled(text.to_string(), Styles::text_secondary()),
        ]));
    }

    pub fn card(&mut self, card: &Card) {
        self.push(Line::styled(format!("▸ {}", card.title), Styles::text_bold()));
        self.push(Line::styled(format!("  {}", card.text), Styles::text_secondary()));
    }

    pub fn cards(&mut self, cards: &[Card]) {
        for card in cards {
            self.card(card);
        }
    }

    /// Numbered list of cards ("1. Title")
    pub fn steps(&mut self, cards: &[Card]) {
        for (i, card) in cards.iter().enumerate() {
            self.push(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), Styles::title()),
                Span::styled(card.title.to_string(), Styles::text_bold()),
            ]));
            self.push(Line::styled(format!("    {}", card.text), Styles::text_secondary()));
        }
    }

    /// `key: value` pair
    pub fn field(&mut self, label: &str, value: &str) {
        self.push(Line::from(vec![
            Span::styled(format!("{label:<16}"), Styles::text_muted()),
            Span::styled(value.to_string(), Styles::text()),
        ]));
    }

    /// Call-to-action hint: `[key] label`
    pub fn action(&mut self, key: &str, label: &str) {
        self.push(action_line(key, label, false));
    }

    pub fn error(&mut self, text: &str) {
        self.push(Line::styled(format!("⚠ {text}"), Styles::error()));
    }

    pub fn success(&mut self, text: &str) {
        self.push(Line::styled(format!("✓ {text}"), Styles::success()));
    }
}

pub fn action_line(key: &str, label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Styles::button_active()
    } else {
        Styles::button_inactive()
    };
    Line::from(vec![
        Span::styled(format!("[{key}] "), Styles::title()),
        Span::styled(format!(" {label} "), style),
    ])
}

/// Row of options: the chosen one filled, the one under the cursor
/// underlined while the row has focus
pub fn choice_row<S: AsRef<str>>(
    options: &[S],
    selected: Option<usize>,
    cursor: Option<usize>,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (i, option) in options.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if selected == Some(i) {
            Styles::selected()
        } else if cursor == Some(i) {
            Styles::focused()
        } else {
            Styles::unselected()
        };
        let marker = if cursor == Some(i) { "›" } else { " " };
        spans.push(Span::styled(format!("{marker}{}", option.as_ref()), style));
    }
    Line::from(spans)
}

/// Number of terminal rows `line` takes once wrapped to `width`
pub fn wrapped_rows(line: &Line, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let w = line.width().max(1);
    u16::try_from(w.div_ceil(usize::from(width))).unwrap_or(u16::MAX)
}

/// Total rows of `lines` wrapped to `width`, and the first row of line
/// `focus`
pub fn measure(lines: &[Line], width: u16, focus: Option<usize>) -> (u16, Option<u16>) {
    let mut total: u16 = 0;
    let mut focus_row = None;
    for (i, line) in lines.iter().enumerate() {
        if focus == Some(i) {
            focus_row = Some(total);
        }
        total = total.saturating_add(wrapped_rows(line, width));
    }
    (total, focus_row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_rows() {
        assert_eq!(wrapped_rows(&Line::from(""), 10), 1);
        assert_eq!(wrapped_rows(&Line::from("abcdefghij"), 10), 1);
        assert_eq!(wrapped_rows(&Line::from("abcdefghijk"), 10), 2);
    }

    #[test]
    fn test_measure_focus_row() {
        let lines = vec![
            Line::from("a".repeat(25)),
            Line::from("b"),
            Line::from("c"),
        ];
        let (total, focus) = measure(&lines, 10, Some(2));
        assert_eq!(total, 5);
        assert_eq!(focus, Some(4));
    }

    #[test]
    fn test_choice_row_marks_cursor() {
        let line = choice_row(&["Auto", "Karting"], Some(0), Some(1));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Auto  ›Karting");
    }
}
