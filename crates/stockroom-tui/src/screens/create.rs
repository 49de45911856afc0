//! Create screen: a product / supplier / order form selector.
//!
//! The order form hosts the [`OrderComposer`]. While a form is being
//! edited the screen captures every key, so digits and letters land in
//! the fields instead of triggering global bindings; `Esc` hands the
//! keyboard back.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use throbber_widgets_tui::{Throbber, ThrobberState};

use stockroom_core::{
    Command, CoreError, EntityKind, MutationKind, Notice, OrderComposer, ProductForm, RowId,
    SupplierForm, SupplierOption,
};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::{form, sub_tabs};

const SELECT_SUPPLIER: &str = "Select supplier";
const SELECT_PRODUCT: &str = "Select product";
const LAST_ROW: &str = "An order needs at least one item row";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormKind {
    #[default]
    Product,
    Supplier,
    Order,
}

impl FormKind {
    const ALL: [Self; 3] = [Self::Product, Self::Supplier, Self::Order];

    fn index(self) -> usize {
        match self {
            Self::Product => 0,
            Self::Supplier => 1,
            Self::Order => 2,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A focusable field of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderField {
    Supplier,
    Status,
    Product(RowId),
    Quantity(RowId),
}

pub struct CreateScreen {
    focused: bool,
    kind: FormKind,
    editing: bool,
    focus: usize,
    product: ProductForm,
    supplier: SupplierForm,
    composer: OrderComposer,
    supplier_options: Arc<Vec<SupplierOption>>,
    /// Kind of the create request in flight, if any.
    submitting: Option<EntityKind>,
    throbber: ThrobberState,
}

impl CreateScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            kind: FormKind::default(),
            editing: false,
            focus: 0,
            product: ProductForm::default(),
            supplier: SupplierForm::default(),
            composer: OrderComposer::new(),
            supplier_options: Arc::new(Vec::new()),
            submitting: None,
            throbber: ThrobberState::default(),
        }
    }

    // ── Field bookkeeping ────────────────────────────────────────────

    fn order_fields(&self) -> Vec<OrderField> {
        let mut fields = vec![OrderField::Supplier, OrderField::Status];
        for row in self.composer.rows() {
            fields.push(OrderField::Product(row.id));
            fields.push(OrderField::Quantity(row.id));
        }
        fields
    }

    fn field_count(&self) -> usize {
        match self.kind {
            FormKind::Product => ProductForm::LABELS.len(),
            FormKind::Supplier => SupplierForm::LABELS.len(),
            FormKind::Order => self.order_fields().len(),
        }
    }

    fn focused_order_field(&self) -> Option<OrderField> {
        self.order_fields().get(self.focus).copied()
    }

    fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    fn focus_prev(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + count - 1) % count;
    }

    fn clamp_focus(&mut self) {
        self.focus = self.focus.min(self.field_count().saturating_sub(1));
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.kind {
            FormKind::Product => self.product.field_mut(self.focus),
            FormKind::Supplier => self.supplier.field_mut(self.focus),
            FormKind::Order => match self.focused_order_field()? {
                OrderField::Quantity(row) => self.composer.quantity_mut(row),
                _ => None,
            },
        }
    }

    // ── Order form selectors ─────────────────────────────────────────

    fn cycle_supplier(&mut self, forward: bool) {
        let options = Arc::clone(&self.supplier_options);
        // slot 0 is the prompt, 1..=n are options
        let slots = options.len() + 1;
        let current = self
            .composer
            .supplier()
            .and_then(|id| options.iter().position(|o| &o.id == id))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let supplier = next
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .map(|o| o.id.clone());
        self.composer.set_supplier(supplier);
    }

    fn cycle_selector(&mut self, forward: bool) {
        match self.focused_order_field() {
            Some(OrderField::Supplier) => self.cycle_supplier(forward),
            Some(OrderField::Status) => {
                let status = self.composer.status();
                let next = if forward { status.next() } else { status.prev() };
                self.composer.set_status(next);
            }
            Some(OrderField::Product(row)) => self.composer.cycle_product(row, forward),
            Some(OrderField::Quantity(_)) | None => {}
        }
    }

    /// Append a row and focus its product selector. The new selector
    /// needs a fresh product list, hence the follow-up refresh.
    fn add_row(&mut self) -> Option<Action> {
        let row = self.composer.add_row();
        if let Some(pos) = self
            .order_fields()
            .iter()
            .position(|f| *f == OrderField::Product(row))
        {
            self.focus = pos;
        }
        Some(Action::RefreshProductOptions)
    }

    fn remove_focused_row(&mut self) -> Option<Action> {
        let (OrderField::Product(row) | OrderField::Quantity(row)) = self.focused_order_field()?
        else {
            return None;
        };
        if self.composer.remove_row(row) {
            self.clamp_focus();
            None
        } else {
            Some(Action::Notify(Notice::info(LAST_ROW)))
        }
    }

    // ── Submit ───────────────────────────────────────────────────────

    fn build_command(&self) -> Result<Command, CoreError> {
        Ok(match self.kind {
            FormKind::Product => Command::CreateProduct(self.product.to_request()?),
            FormKind::Supplier => Command::CreateSupplier(self.supplier.to_request()?),
            FormKind::Order => Command::CreateOrder(self.composer.submit()?),
        })
    }

    fn submit(&mut self) -> Option<Action> {
        if self.submitting.is_some() {
            return None;
        }
        match self.build_command() {
            Ok(cmd) => {
                self.submitting = Some(cmd.kind());
                Some(Action::Submit(cmd))
            }
            Err(e) => Some(Action::Notify(Notice::error(e.to_string()))),
        }
    }

    /// Clear the form after a successful create.
    fn reset(&mut self, kind: EntityKind) -> Option<Action> {
        self.focus = 0;
        match kind {
            EntityKind::Product => self.product.clear(),
            EntityKind::Supplier => self.supplier.clear(),
            EntityKind::Order => {
                self.composer.reset();
                return Some(Action::RefreshProductOptions);
            }
        }
        None
    }

    // ── Key handling ─────────────────────────────────────────────────

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.kind = self.kind.prev();
                self.focus = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.kind = self.kind.next();
                self.focus = 0;
            }
            KeyCode::Enter | KeyCode::Char('i') => self.editing = true,
            _ => {}
        }
        None
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => return self.submit(),
            KeyCode::Left if self.kind == FormKind::Order => self.cycle_selector(false),
            KeyCode::Right if self.kind == FormKind::Order => self.cycle_selector(true),
            KeyCode::Char('n') if ctrl && self.kind == FormKind::Order => return self.add_row(),
            KeyCode::Char('d') if ctrl && self.kind == FormKind::Order => {
                return self.remove_focused_row();
            }
            KeyCode::Backspace => {
                if let Some(input) = self.active_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(input) = self.active_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
        None
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn field_lines(&self) -> Vec<Line<'static>> {
        let active = |i: usize| self.editing && i == self.focus;
        match self.kind {
            FormKind::Product => ProductForm::LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    form::input_line(label, self.product.field(i).unwrap_or(""), 7, active(i))
                })
                .collect(),
            FormKind::Supplier => SupplierForm::LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    form::input_line(label, self.supplier.field(i).unwrap_or(""), 7, active(i))
                })
                .collect(),
            FormKind::Order => self.order_lines(&active),
        }
    }

    fn order_lines(&self, active: &dyn Fn(usize) -> bool) -> Vec<Line<'static>> {
        let mut item = 0;
        self.order_fields()
            .into_iter()
            .enumerate()
            .map(|(i, field)| match field {
                OrderField::Supplier => {
                    let label = self
                        .composer
                        .supplier()
                        .and_then(|id| self.supplier_options.iter().find(|o| &o.id == id))
                        .map_or(SELECT_SUPPLIER, |o| o.label.as_str());
                    form::selector_line("Supplier", label, 8, active(i))
                }
                OrderField::Status => {
                    form::selector_line("Status", self.composer.status().label(), 8, active(i))
                }
                OrderField::Product(row) => {
                    item += 1;
                    let label = self
                        .composer
                        .selected_option(row)
                        .map_or(SELECT_PRODUCT, |o| o.label.as_str());
                    form::selector_line(&format!("Item {item}"), label, 8, active(i))
                }
                OrderField::Quantity(row) => {
                    let qty = self
                        .composer
                        .rows()
                        .iter()
                        .find(|r| r.id == row)
                        .map_or("", |r| r.quantity.as_str());
                    form::input_line("  Qty", qty, 8, active(i))
                }
            })
            .collect()
    }

    fn hints(&self) -> Line<'static> {
        if !self.editing {
            return form::hint_line(&[("\u{25C2}/\u{25B8}", "form"), ("Enter", "edit")]);
        }
        if self.kind == FormKind::Order {
            form::hint_line(&[
                ("Tab", "next"),
                ("\u{25C2}/\u{25B8}", "select"),
                ("^N", "add item"),
                ("^D", "remove item"),
                ("Enter", "create"),
                ("Esc", "done"),
            ])
        } else {
            form::hint_line(&[("Tab", "next"), ("Enter", "create"), ("Esc", "done")])
        }
    }
}

impl Default for CreateScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CreateScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        Ok(if self.editing {
            self.handle_edit_key(key)
        } else {
            self.handle_browse_key(key)
        })
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ProductOptionsUpdated(options) => {
                self.composer.populate_products(Arc::clone(options));
            }
            Action::SupplierOptionsUpdated(options) => {
                let still_offered = self
                    .composer
                    .supplier()
                    .is_none_or(|id| options.iter().any(|o| &o.id == id));
                if !still_offered {
                    self.composer.set_supplier(None);
                }
                self.supplier_options = Arc::clone(options);
            }
            Action::MutationFinished {
                kind,
                mutation: MutationKind::Create,
                applied,
            } if self.submitting == Some(*kind) => {
                self.submitting = None;
                if *applied {
                    return Ok(self.reset(*kind));
                }
            }
            Action::Tick if self.submitting.is_some() => self.throbber.calc_next(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Create ")
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.editing {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let labels: Vec<&str> = FormKind::ALL
            .iter()
            .map(|k| match k {
                FormKind::Product => "Product",
                FormKind::Supplier => "Supplier",
                FormKind::Order => "Order",
            })
            .collect();
        frame.render_widget(
            Paragraph::new(sub_tabs::render_sub_tabs(&labels, self.kind.index())),
            layout[0],
        );

        frame.render_widget(Paragraph::new(self.field_lines()), layout[1]);

        if self.submitting.is_some() {
            let throbber = Throbber::default()
                .label(" Creating...")
                .style(Style::default().fg(theme::HIGHLIGHT))
                .throbber_style(Style::default().fg(theme::ACCENT));
            frame.render_stateful_widget(throbber, layout[2], &mut self.throbber.clone());
        }

        frame.render_widget(Paragraph::new(self.hints()), layout[3]);
    }

    fn captures_input(&self) -> bool {
        self.editing
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.editing = false;
        }
    }

    fn id(&self) -> &str {
        "create"
    }
}
