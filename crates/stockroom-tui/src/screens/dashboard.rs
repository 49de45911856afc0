//! Dashboard: totals, pending orders, and the recent-items previews.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use stockroom_core::Dashboard;

use super::list::placeholder_line;
use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::form;

pub struct DashboardScreen {
    focused: bool,
    dashboard: Dashboard,
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            dashboard: Dashboard::default(),
        }
    }

    fn panel(&self, title: &str) -> Block<'static> {
        Block::default()
            .title(format!(" {title} "))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            })
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, title: &str, value: usize) {
        let block = self.panel(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(value.to_string(), theme::stat_value()))
                .alignment(Alignment::Center),
            inner,
        );
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect, title: &str, entries: &[String]) {
        let lines: Vec<Line> = if entries.is_empty() {
            let text = if self.dashboard.refreshed_at.is_some() {
                "None yet"
            } else {
                "Loading..."
            };
            vec![placeholder_line(text)]
        } else {
            entries
                .iter()
                .map(|e| Line::from(Span::styled(format!("  {e}"), theme::table_row())))
                .collect()
        };
        frame.render_widget(Paragraph::new(lines).block(self.panel(title)), area);
    }
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DashboardScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(match key.code {
            KeyCode::Char('r') => Some(Action::RefreshDashboard),
            _ => None,
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Action::DashboardUpdated(dashboard) = action {
            self.dashboard = dashboard.clone();
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

        let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(layout[0]);
        let d = &self.dashboard;
        self.render_card(frame, cards[0], "Products", d.total_products);
        self.render_card(frame, cards[1], "Suppliers", d.total_suppliers);
        self.render_card(frame, cards[2], "Orders", d.total_orders);
        self.render_card(frame, cards[3], "Pending", d.pending_orders);

        let previews =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(layout[1]);
        self.render_preview(frame, previews[0], "Recent Products", &d.recent_products);
        self.render_preview(frame, previews[1], "Recent Orders", &d.recent_orders);

        let refreshed = d.refreshed_at.map_or_else(
            || "never".to_owned(),
            |at| {
                at.with_timezone(&chrono::Local)
                    .format("%H:%M:%S")
                    .to_string()
            },
        );
        let mut footer = form::hint_line(&[("r", "refresh")]);
        footer.spans.push(Span::styled(
            format!("  last refresh {refreshed}"),
            theme::key_hint(),
        ));
        frame.render_widget(Paragraph::new(footer), layout[2]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        "dashboard"
    }
}
