//! Modal dialog overlay: entity edit form or read-only order details.
//!
//! Wraps core's [`Dialog`] with focus and submit state. The loaded
//! session carries kind, id, and entity, so nothing outside this value
//! needs to remember what is being edited.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use stockroom_core::{Dialog, EditSession, MutationKind, Notice, OrderDetails};
use stockroom_core::{ProductForm, SupplierForm};

use crate::action::Action;
use crate::theme;
use crate::widgets::{self, form};

pub struct DialogView {
    dialog: Dialog,
    focus: usize,
    submitting: bool,
    throbber: ThrobberState,
}

impl DialogView {
    pub fn edit(session: EditSession) -> Self {
        Self::new(Dialog::Edit(session))
    }

    pub fn details(details: OrderDetails) -> Self {
        Self::new(Dialog::Details(details))
    }

    fn new(dialog: Dialog) -> Self {
        Self {
            dialog,
            focus: 0,
            submitting: false,
            throbber: ThrobberState::default(),
        }
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    fn field_count(&self) -> usize {
        match &self.dialog {
            Dialog::Edit(EditSession::Product { .. }) => ProductForm::LABELS.len(),
            Dialog::Edit(EditSession::Supplier { .. }) => SupplierForm::LABELS.len(),
            Dialog::Edit(EditSession::Order { .. }) => 1,
            Dialog::Details(_) => 0,
        }
    }

    fn active_input_mut(&mut self) -> Option<&mut String> {
        match &mut self.dialog {
            Dialog::Edit(EditSession::Product { form, .. }) => form.field_mut(self.focus),
            Dialog::Edit(EditSession::Supplier { form, .. }) => form.field_mut(self.focus),
            Dialog::Edit(EditSession::Order { .. }) | Dialog::Details(_) => None,
        }
    }

    fn focus_next(&mut self) {
        let count = self.field_count().max(1);
        self.focus = (self.focus + 1) % count;
    }

    fn focus_prev(&mut self) {
        let count = self.field_count().max(1);
        self.focus = (self.focus + count - 1) % count;
    }

    fn cycle_status(&mut self, forward: bool) {
        if let Dialog::Edit(EditSession::Order { status, .. }) = &mut self.dialog {
            *status = if forward { status.next() } else { status.prev() };
        }
    }

    fn submit(&mut self) -> Option<Action> {
        let Dialog::Edit(session) = &self.dialog else {
            return Some(Action::CloseDialog);
        };
        match session.to_command() {
            Ok(cmd) => {
                self.submitting = true;
                Some(Action::Submit(cmd))
            }
            Err(e) => Some(Action::Notify(Notice::error(e.to_string()))),
        }
    }

    /// Whether the dialog should close after a mutation finished.
    ///
    /// Only a successful update closes it; a failed one leaves the form
    /// open for another try.
    pub fn mutation_finished(&mut self, mutation: MutationKind, applied: bool) -> bool {
        if !self.submitting || mutation != MutationKind::Update {
            return false;
        }
        self.submitting = false;
        applied
    }

    pub fn tick(&mut self) {
        if self.submitting {
            self.throbber.calc_next();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.code == KeyCode::Esc {
            return Some(Action::CloseDialog);
        }
        if self.submitting {
            return None;
        }

        if matches!(self.dialog, Dialog::Details(_)) {
            return match key.code {
                KeyCode::Enter | KeyCode::Char('q' | 'v') => Some(Action::CloseDialog),
                _ => None,
            };
        }

        if matches!(self.dialog, Dialog::Edit(EditSession::Order { .. })) {
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => self.cycle_status(false),
                KeyCode::Right | KeyCode::Char('l' | ' ') => self.cycle_status(true),
                KeyCode::Enter => return self.submit(),
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => return self.submit(),
            KeyCode::Backspace => {
                if let Some(input) = self.active_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = self.active_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
        None
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.dialog {
            Dialog::Details(details) => Self::render_details(frame, area, details),
            Dialog::Edit(session) => self.render_edit(frame, area, session),
        }
    }

    fn render_details(frame: &mut Frame, area: Rect, details: &OrderDetails) {
        let items = details.item_lines();
        let height = u16::try_from(items.len()).unwrap_or(u16::MAX).saturating_add(10);
        let panel = widgets::centered_rect(area, 70, height);
        let inner = widgets::overlay_block(frame, panel, "Order Details", theme::border_focused());

        let label = |text: &'static str| Span::styled(text, Style::default().fg(theme::MUTED));
        let value = |text: &str| Span::styled(text.to_owned(), Style::default().fg(theme::TEXT));

        let mut lines = vec![
            Line::from(vec![label(" Order:    "), value(details.id.as_str())]),
            Line::from(vec![label(" Supplier: "), value(&details.supplier)]),
            Line::from(vec![label(" Contact:  "), value(&details.contact)]),
            Line::from(vec![label(" Status:   "), value(&details.status)]),
            Line::from(""),
            Line::from(Span::styled(" Items", theme::title_style())),
        ];
        lines.extend(
            items
                .into_iter()
                .map(|item| Line::from(vec![Span::raw("   "), value(item)])),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label(" Total Items: "),
            value(&details.total_items.to_string()),
        ]));

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), layout[0]);
        frame.render_widget(Paragraph::new(form::hint_line(&[("Esc", "close")])), layout[1]);
    }

    fn render_edit(&self, frame: &mut Frame, area: Rect, session: &EditSession) {
        let fields = self.field_lines(session);
        let height = u16::try_from(fields.len()).unwrap_or(u16::MAX).saturating_add(6);
        let panel = widgets::centered_rect(area, 60, height);
        let inner = widgets::overlay_block(frame, panel, &session.title(), theme::border_focused());

        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        frame.render_widget(Paragraph::new(fields), layout[1]);

        if self.submitting {
            let throbber = Throbber::default()
                .label(" Saving...")
                .style(Style::default().fg(theme::HIGHLIGHT))
                .throbber_style(Style::default().fg(theme::ACCENT));
            frame.render_stateful_widget(throbber, layout[2], &mut self.throbber.clone());
        }

        let hints = if matches!(session, EditSession::Order { .. }) {
            form::hint_line(&[("\u{25C2}/\u{25B8}", "status"), ("Enter", "save"), ("Esc", "cancel")])
        } else {
            form::hint_line(&[("Tab", "next field"), ("Enter", "save"), ("Esc", "cancel")])
        };
        frame.render_widget(Paragraph::new(hints), layout[3]);
    }

    fn field_lines(&self, session: &EditSession) -> Vec<Line<'static>> {
        match session {
            EditSession::Product { form: fields, .. } => ProductForm::LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    form::input_line(label, fields.field(i).unwrap_or(""), 7, i == self.focus)
                })
                .collect(),
            EditSession::Supplier { form: fields, .. } => SupplierForm::LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    form::input_line(label, fields.field(i).unwrap_or(""), 7, i == self.focus)
                })
                .collect(),
            EditSession::Order { order, status } => {
                let supplier = order
                    .supplier
                    .as_ref()
                    .and_then(|s| s.name.clone())
                    .unwrap_or_else(|| "Unknown Supplier".to_owned());
                vec![
                    form::input_line("Supplier", &supplier, 8, false),
                    form::input_line("Items", &format!("{} items", order.items.len()), 8, false),
                    form::selector_line("Status", status.label(), 8, true),
                ]
            }
        }
    }
}
