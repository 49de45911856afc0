//! Suppliers table.

use ratatui::layout::Constraint;
use ratatui::widgets::Cell;

use stockroom_core::{EntityId, EntityKind, ListView, RowAction, SupplierRow};

use super::list::{ListScreen, TableRow};
use crate::action::Action;

pub type SuppliersScreen = ListScreen<SupplierRow>;

impl TableRow for SupplierRow {
    const KIND: EntityKind = EntityKind::Supplier;
    const HEADERS: &'static [&'static str] = &["Name", "Contact"];

    fn widths() -> Vec<Constraint> {
        vec![Constraint::Percentage(40), Constraint::Percentage(60)]
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn actions(&self) -> &'static [RowAction] {
        SupplierRow::actions(self)
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.name.clone()),
            Cell::from(self.contact.clone()),
        ]
    }

    fn view_from(action: &Action) -> Option<&ListView<Self>> {
        match action {
            Action::SuppliersUpdated(view) => Some(view),
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

    #[test]
    fn failed_load_shows_error_row() {
        let mut screen = SuppliersScreen::new();
        screen
            .update(&Action::SuppliersUpdated(ListView::failed(
                EntityKind::Supplier,
            )))
            .unwrap();

        assert_eq!(
            screen.view().placeholder(),
            Some("Error loading suppliers")
        );
        let edit = screen
            .handle_key_event(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE))
            .unwrap();
        assert!(edit.is_none());
    }
}
