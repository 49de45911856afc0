//! One-line form fields: text inputs and cycling selectors.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

const CURSOR: &str = "\u{2588}";

fn label_span(label: &str, width: usize, active: bool) -> Span<'static> {
    let style = if active {
        Style::default().fg(theme::HIGHLIGHT)
    } else {
        Style::default().fg(theme::TEXT)
    };
    let marker = if active { "\u{25B8}" } else { " " };
    Span::styled(format!("{marker} {label:<width$}  "), style)
}

/// `▸ Label   value█`; the cursor block only shows while active.
pub fn input_line(label: &str, value: &str, width: usize, active: bool) -> Line<'static> {
    let mut text = value.to_owned();
    if active {
        text.push_str(CURSOR);
    }
    Line::from(vec![
        label_span(label, width, active),
        Span::styled(text, Style::default().fg(theme::HIGHLIGHT)),
    ])
}

/// `▸ Label   ◂ value ▸`; arrows only show while active.
pub fn selector_line(label: &str, value: &str, width: usize, active: bool) -> Line<'static> {
    let (open, close) = if active {
        ("\u{25C2} ", " \u{25B8}")
    } else {
        ("", "")
    };
    Line::from(vec![
        label_span(label, width, active),
        Span::styled(open, theme::key_hint_key()),
        Span::styled(value.to_owned(), Style::default().fg(theme::HIGHLIGHT)),
        Span::styled(close, theme::key_hint_key()),
    ])
}

/// `key action  key action ...` hint line.
pub fn hint_line(pairs: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, action) in pairs {
        spans.push(Span::styled(format!(" {key} "), theme::key_hint_key()));
        spans.push(Span::styled(format!("{action} "), theme::key_hint()));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn active_input_shows_cursor() {
        assert_eq!(plain(&input_line("SKU", "A1", 5, true)), "\u{25B8} SKU    A1\u{2588}");
        assert_eq!(plain(&input_line("SKU", "A1", 5, false)), "  SKU    A1");
    }

    #[test]
    fn selector_arrows_only_when_active() {
        assert_eq!(
            plain(&selector_line("Status", "Pending", 6, true)),
            "\u{25B8} Status  \u{25C2} Pending \u{25B8}"
        );
        assert_eq!(
            plain(&selector_line("Status", "Pending", 6, false)),
            "  Status  Pending"
        );
    }
}
