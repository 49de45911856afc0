// ── Order composer ──
//
// State of the "new order" form: a supplier, a status, and a
// variable-length list of line-item rows. Each row picks a product from
// the latest fetched product options and carries a free-text quantity.
// The composer always holds at least one row.

use std::sync::Arc;

use crate::command::{LineItemRequest, OrderRequest};
use crate::error::CoreError;
use crate::model::{EntityId, OrderStatus};
use crate::view::ProductOption;

/// Stable handle for a composer row; survives removal of other rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

/// One line-item input row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerRow {
    pub id: RowId,
    /// Selected product, `None` while the selector shows its prompt.
    pub product: Option<EntityId>,
    /// Raw quantity text as typed.
    pub quantity: String,
}

const DEFAULT_QUANTITY: &str = "1";

#[derive(Debug, Clone)]
pub struct OrderComposer {
    rows: Vec<ComposerRow>,
    next_row: u64,
    products: Arc<Vec<ProductOption>>,
    supplier: Option<EntityId>,
    status: OrderStatus,
}

impl Default for OrderComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderComposer {
    /// A composer with a single blank row and status `pending`.
    pub fn new() -> Self {
        let mut composer = Self {
            rows: Vec::new(),
            next_row: 0,
            products: Arc::new(Vec::new()),
            supplier: None,
            status: OrderStatus::Pending,
        };
        composer.push_blank_row();
        composer
    }

    fn push_blank_row(&mut self) -> RowId {
        let id = RowId(self.next_row);
        self.next_row += 1;
        self.rows.push(ComposerRow {
            id,
            product: None,
            quantity: DEFAULT_QUANTITY.to_owned(),
        });
        id
    }

    fn row_mut(&mut self, id: RowId) -> Option<&mut ComposerRow> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn rows(&self) -> &[ComposerRow] {
        &self.rows
    }

    /// Options currently offered by every row selector.
    pub fn products(&self) -> &[ProductOption] {
        &self.products
    }

    pub fn supplier(&self) -> Option<&EntityId> {
        self.supplier.as_ref()
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// The option a row has selected, if it is still offered.
    pub fn selected_option(&self, id: RowId) -> Option<&ProductOption> {
        let row = self.rows.iter().find(|r| r.id == id)?;
        let product = row.product.as_ref()?;
        self.products.iter().find(|o| &o.id == product)
    }

    // ── Row list ─────────────────────────────────────────────────────

    /// Append a blank row. Callers re-populate the selectors afterwards
    /// from a fresh product fetch.
    pub fn add_row(&mut self) -> RowId {
        self.push_blank_row()
    }

    /// Remove a row. Refused (returns `false`) for the last remaining row
    /// or an unknown id.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        self.rows.len() != before
    }

    /// Replace the option set of every row selector.
    ///
    /// A row keeps its selection only while that product is still offered.
    pub fn populate_products(&mut self, options: Arc<Vec<ProductOption>>) {
        for row in &mut self.rows {
            let still_offered = row
                .product
                .as_ref()
                .is_some_and(|p| options.iter().any(|o| &o.id == p));
            if !still_offered {
                row.product = None;
            }
        }
        self.products = options;
    }

    // ── Row edits ────────────────────────────────────────────────────

    /// Select a product for a row. Returns `false` if the row is unknown
    /// or the product is not among the current options.
    pub fn select_product(&mut self, id: RowId, product: Option<EntityId>) -> bool {
        if let Some(ref p) = product {
            if !self.products.iter().any(|o| &o.id == p) {
                return false;
            }
        }
        match self.row_mut(id) {
            Some(row) => {
                row.product = product;
                true
            }
            None => false,
        }
    }

    /// Step a row's selector through "no product" and every option.
    pub fn cycle_product(&mut self, id: RowId, forward: bool) {
        let options = Arc::clone(&self.products);
        let Some(row) = self.row_mut(id) else {
            return;
        };
        // position 0 is the prompt, 1..=n are options
        let slots = options.len() + 1;
        let current = row
            .product
            .as_ref()
            .and_then(|p| options.iter().position(|o| &o.id == p))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        row.product = next
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .map(|o| o.id.clone());
    }

    pub fn set_quantity(&mut self, id: RowId, quantity: impl Into<String>) {
        if let Some(row) = self.row_mut(id) {
            row.quantity = quantity.into();
        }
    }

    /// Mutable access to a row's quantity text, for in-place editing.
    pub fn quantity_mut(&mut self, id: RowId) -> Option<&mut String> {
        self.row_mut(id).map(|r| &mut r.quantity)
    }

    pub fn set_supplier(&mut self, supplier: Option<EntityId>) {
        self.supplier = supplier;
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    // ── Submit / reset ───────────────────────────────────────────────

    /// Build the create request.
    ///
    /// Rows missing a product or a quantity are dropped silently. With
    /// no complete rows left this fails with [`CoreError::NoItems`] and
    /// nothing should be sent. Quantities must be whole numbers of at
    /// least 1; they are not checked against stock.
    pub fn submit(&self) -> Result<OrderRequest, CoreError> {
        let complete: Vec<(&EntityId, &str)> = self
            .rows
            .iter()
            .filter_map(|r| {
                let product = r.product.as_ref()?;
                let qty = r.quantity.trim();
                (!qty.is_empty()).then_some((product, qty))
            })
            .collect();

        if complete.is_empty() {
            return Err(CoreError::NoItems);
        }

        let mut items = Vec::with_capacity(complete.len());
        for (product, qty) in complete {
            let qty: i64 = qty
                .parse()
                .ok()
                .filter(|q| *q >= 1)
                .ok_or_else(|| CoreError::validation("Quantity must be a whole number of at least 1"))?;
            let price = self
                .products
                .iter()
                .find(|o| &o.id == product)
                .and_then(|o| o.price);
            items.push(LineItemRequest {
                product_id: Some(product.clone()),
                qty: Some(qty),
                price,
            });
        }

        let supplier = self
            .supplier
            .clone()
            .ok_or_else(|| CoreError::validation("Please select a supplier"))?;

        Ok(OrderRequest {
            supplier_id: Some(supplier),
            status: self.status.clone(),
            items,
        })
    }

    /// Back to a single blank row, no supplier, status `pending`.
    ///
    /// Product options are kept; callers re-populate them afterwards.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.supplier = None;
        self.status = OrderStatus::Pending;
        self.push_blank_row();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn option(id: &str, price: Decimal) -> ProductOption {
        ProductOption {
            id: id.into(),
            label: format!("{id} - item (${price})"),
            price: Some(price),
        }
    }

    fn composer_with_products() -> OrderComposer {
        let mut c = OrderComposer::new();
        c.populate_products(Arc::new(vec![
            option("p1", dec!(9.99)),
            option("p2", dec!(4.50)),
        ]));
        c
    }

    #[test]
    fn starts_with_one_blank_row() {
        let c = OrderComposer::new();
        assert_eq!(c.rows().len(), 1);
        assert_eq!(c.rows()[0].product, None);
        assert_eq!(c.rows()[0].quantity, "1");
        assert_eq!(c.status(), &OrderStatus::Pending);
    }

    #[test]
    fn add_n_remove_m_leaves_difference() {
        let mut c = OrderComposer::new();
        let mut ids = vec![c.rows()[0].id];
        for _ in 0..4 {
            ids.push(c.add_row());
        }
        assert_eq!(c.rows().len(), 5);

        for id in &ids[..3] {
            assert!(c.remove_row(*id));
        }
        assert_eq!(c.rows().len(), 2);
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut c = OrderComposer::new();
        let second = c.add_row();
        assert!(c.remove_row(second));

        let only = c.rows()[0].id;
        assert!(!c.remove_row(only));
        assert_eq!(c.rows().len(), 1);
    }

    #[test]
    fn removing_unknown_row_is_refused() {
        let mut c = OrderComposer::new();
        let extra = c.add_row();
        assert!(c.remove_row(extra));
        c.add_row();
        assert!(!c.remove_row(extra));
        assert_eq!(c.rows().len(), 2);
    }

    #[test]
    fn zero_complete_rows_is_no_items() {
        let mut c = composer_with_products();
        c.set_supplier(Some("s1".into()));
        let row = c.add_row();
        c.select_product(row, None);
        assert!(matches!(c.submit(), Err(CoreError::NoItems)));
    }

    #[test]
    fn incomplete_rows_are_discarded() {
        let mut c = composer_with_products();
        c.set_supplier(Some("s1".into()));
        let first = c.rows()[0].id;
        c.select_product(first, Some("p1".into()));
        c.set_quantity(first, "2");

        let no_qty = c.add_row();
        c.select_product(no_qty, Some("p2".into()));
        c.set_quantity(no_qty, "  ");

        c.add_row(); // no product

        let req = c.submit().unwrap();
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].product_id, Some("p1".into()));
        assert_eq!(req.items[0].qty, Some(2));
        assert_eq!(req.items[0].price, Some(dec!(9.99)));
    }

    #[test]
    fn two_line_items_capture_prices() {
        let mut c = composer_with_products();
        c.set_supplier(Some("s1".into()));
        let first = c.rows()[0].id;
        c.select_product(first, Some("p1".into()));
        c.set_quantity(first, "2");
        let second = c.add_row();
        c.select_product(second, Some("p2".into()));

        let req = c.submit().unwrap();
        assert_eq!(req.supplier_id, Some("s1".into()));
        assert_eq!(req.status, OrderStatus::Pending);
        assert_eq!(
            req.items,
            vec![
                LineItemRequest {
                    product_id: Some("p1".into()),
                    qty: Some(2),
                    price: Some(dec!(9.99)),
                },
                LineItemRequest {
                    product_id: Some("p2".into()),
                    qty: Some(1),
                    price: Some(dec!(4.50)),
                },
            ]
        );
    }

    #[test]
    fn quantity_below_one_is_rejected() {
        let mut c = composer_with_products();
        c.set_supplier(Some("s1".into()));
        let row = c.rows()[0].id;
        c.select_product(row, Some("p1".into()));
        for bad in ["0", "-3", "abc", "1.5"] {
            c.set_quantity(row, bad);
            assert!(
                matches!(c.submit(), Err(CoreError::Validation { .. })),
                "quantity {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn quantity_is_not_checked_against_stock() {
        let mut c = composer_with_products();
        c.set_supplier(Some("s1".into()));
        let row = c.rows()[0].id;
        c.select_product(row, Some("p1".into()));
        c.set_quantity(row, "100000");
        assert_eq!(c.submit().unwrap().items[0].qty, Some(100_000));
    }

    #[test]
    fn supplier_is_required() {
        let mut c = composer_with_products();
        let row = c.rows()[0].id;
        c.select_product(row, Some("p1".into()));
        assert!(matches!(c.submit(), Err(CoreError::Validation { .. })));
    }

    #[test]
    fn repopulating_keeps_only_offered_selections() {
        let mut c = composer_with_products();
        let first = c.rows()[0].id;
        let second = c.add_row();
        c.select_product(first, Some("p1".into()));
        c.select_product(second, Some("p2".into()));

        c.populate_products(Arc::new(vec![option("p1", dec!(10.00))]));

        assert_eq!(c.rows()[0].product, Some("p1".into()));
        assert_eq!(c.rows()[1].product, None);
        assert_eq!(c.selected_option(first).unwrap().price, Some(dec!(10.00)));
    }

    #[test]
    fn unknown_product_cannot_be_selected() {
        let mut c = composer_with_products();
        let row = c.rows()[0].id;
        assert!(!c.select_product(row, Some("gone".into())));
        assert_eq!(c.rows()[0].product, None);
    }

    #[test]
    fn cycling_wraps_through_prompt() {
        let mut c = composer_with_products();
        let row = c.rows()[0].id;

        c.cycle_product(row, true);
        assert_eq!(c.rows()[0].product, Some("p1".into()));
        c.cycle_product(row, true);
        assert_eq!(c.rows()[0].product, Some("p2".into()));
        c.cycle_product(row, true);
        assert_eq!(c.rows()[0].product, None);
        c.cycle_product(row, false);
        assert_eq!(c.rows()[0].product, Some("p2".into()));
    }

    #[test]
    fn reset_collapses_to_one_blank_row() {
        let mut c = composer_with_products();
        c.set_supplier(Some("s1".into()));
        c.set_status(OrderStatus::Shipped);
        let first = c.rows()[0].id;
        c.select_product(first, Some("p1".into()));
        c.add_row();
        c.add_row();

        c.reset();

        assert_eq!(c.rows().len(), 1);
        assert_eq!(c.rows()[0].product, None);
        assert_eq!(c.rows()[0].quantity, "1");
        assert_eq!(c.supplier(), None);
        assert_eq!(c.status(), &OrderStatus::Pending);
        assert_eq!(c.products().len(), 2);
    }
}
