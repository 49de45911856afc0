//! Orders table.

use ratatui::layout::Constraint;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Cell;

use stockroom_core::{EntityId, EntityKind, ListView, OrderRow, RowAction};

use super::list::{ListScreen, TableRow};
use crate::action::Action;
use crate::theme;

pub type OrdersScreen = ListScreen<OrderRow>;

impl TableRow for OrderRow {
    const KIND: EntityKind = EntityKind::Order;
    const HEADERS: &'static [&'static str] = &["Supplier", "Items", "Status"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(12),
        ]
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn actions(&self) -> &'static [RowAction] {
        OrderRow::actions(self)
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        let status_style = Style::default().fg(theme::order_status_color(&self.status));
        vec![
            Cell::from(self.supplier.clone()),
            Cell::from(self.items.clone()),
            Cell::from(Span::styled(self.status_label.clone(), status_style)),
        ]
    }

    fn view_from(action: &Action) -> Option<&ListView<Self>> {
        match action {
            Action::OrdersUpdated(view) => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;
    use stockroom_core::OrderStatus;

    fn order(id: &str) -> OrderRow {
        OrderRow {
            id: id.into(),
            supplier: "Acme".into(),
            items: "2 items".into(),
            status: OrderStatus::Pending,
            status_label: "pending".into(),
        }
    }

    #[test]
    fn enter_and_v_open_details() {
        let mut screen = OrdersScreen::new();
        screen
            .update(&Action::OrdersUpdated(ListView::Rows(Arc::new(vec![
                order("o1"),
                order("o2"),
            ]))))
            .unwrap();
        screen
            .handle_key_event(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE))
            .unwrap();

        for code in [KeyCode::Enter, KeyCode::Char('v')] {
            let action = screen
                .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap();
            assert!(matches!(
                action,
                Some(Action::OpenDetails(ref id)) if id.as_str() == "o2"
            ));
        }
    }
}
