//! API status indicator for the status bar.

use ratatui::style::Style;
use ratatui::text::Span;

use stockroom_core::ApiStatus;

use crate::theme;

pub fn status_symbol(status: ApiStatus) -> &'static str {
    match status {
        ApiStatus::Connected => "●",
        ApiStatus::Checking => "◐",
        ApiStatus::Error | ApiStatus::Unreachable => "○",
    }
}

/// `● Connected to API`, colored by status.
pub fn status_span(status: ApiStatus) -> Span<'static> {
    Span::styled(
        format!("{} {}", status_symbol(status), status.label()),
        Style::default().fg(theme::api_status_color(status)),
    )
}
