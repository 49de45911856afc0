//! Products table.

use ratatui::layout::Constraint;
use ratatui::widgets::Cell;

use stockroom_core::{EntityId, EntityKind, ListView, ProductRow, RowAction};

use super::list::{ListScreen, TableRow};
use crate::action::Action;

pub type ProductsScreen = ListScreen<ProductRow>;

impl TableRow for ProductRow {
    const KIND: EntityKind = EntityKind::Product;
    const HEADERS: &'static [&'static str] = &["SKU", "Name", "Price", "Stock"];

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Length(12),
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(8),
        ]
    }

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn actions(&self) -> &'static [RowAction] {
        ProductRow::actions(self)
    }

    fn cells(&self) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.sku.clone()),
            Cell::from(self.name.clone()),
            Cell::from(self.price.clone()),
            Cell::from(self.stock.clone()),
        ]
    }

    fn view_from(action: &Action) -> Option<&ListView<Self>> {
        match action {
            Action::ProductsUpdated(view) => Some(view),
            _ => None,
        }
    }
}
