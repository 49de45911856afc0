//! Palette and semantic styles for the TUI.

use ratatui::style::{Color, Modifier, Style};

use stockroom_core::{ApiStatus, NoticeLevel, OrderStatus};

// ── Palette ───────────────────────────────────────────────────────────

pub const ACCENT: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const HIGHLIGHT: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const WARNING: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const SUCCESS: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const ERROR: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const TEXT: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const MUTED: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_HIGHLIGHT: Color = Color::Rgb(40, 42, 54); // #282a36
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29
pub const INFO: Color = Color::Rgb(139, 233, 253); // #8be9fd

// ── Semantic Styles ───────────────────────────────────────────────────

pub fn title_style() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT)
}

pub fn border_default() -> Style {
    Style::default().fg(MUTED)
}

pub fn table_header() -> Style {
    Style::default()
        .fg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn table_row() -> Style {
    Style::default().fg(TEXT)
}

pub fn table_selected() -> Style {
    Style::default()
        .fg(ACCENT)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Placeholder rows ("No products found", "Loading...").
pub fn placeholder() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn tab_active() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn tab_inactive() -> Style {
    Style::default().fg(TEXT)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

pub fn key_hint_key() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Big numbers on the dashboard cards.
pub fn stat_value() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => SUCCESS,
        NoticeLevel::Error => ERROR,
        NoticeLevel::Info => INFO,
    }
}

pub fn api_status_color(status: ApiStatus) -> Color {
    match status {
        ApiStatus::Connected => SUCCESS,
        ApiStatus::Checking => WARNING,
        ApiStatus::Error | ApiStatus::Unreachable => ERROR,
    }
}

pub fn order_status_color(status: &OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => WARNING,
        OrderStatus::Shipped => INFO,
        OrderStatus::Delivered => SUCCESS,
        OrderStatus::Other(_) => TEXT,
    }
}
