//! Generic entity table screen, shared by products, suppliers, and orders.
//!
//! Each row type says how it lays out and which published view it
//! listens to; selection, placeholders, and the row actions (`e` edit,
//! `d` delete, `Enter`/`v` details) live here once.

use std::marker::PhantomData;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use stockroom_core::{EntityId, EntityKind, ListView, RowAction};

use crate::action::Action;
use crate::component::Component;
use crate::theme;
use crate::widgets::form;

/// A row type a [`ListScreen`] can show.
pub trait TableRow: Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    const HEADERS: &'static [&'static str];

    fn widths() -> Vec<Constraint>;
    fn id(&self) -> &EntityId;
    fn actions(&self) -> &'static [RowAction];
    fn cells(&self) -> Vec<Cell<'static>>;
    /// The published view carried by `action`, if it is this row type's.
    fn view_from(action: &Action) -> Option<&ListView<Self>>;
}

pub struct ListScreen<R: TableRow> {
    focused: bool,
    view: ListView<R>,
    table_state: TableState,
    _row: PhantomData<R>,
}

impl<R: TableRow> ListScreen<R> {
    pub fn new() -> Self {
        Self {
            focused: false,
            view: ListView::Loading,
            table_state: TableState::default(),
            _row: PhantomData,
        }
    }

    pub fn view(&self) -> &ListView<R> {
        &self.view
    }

    fn set_view(&mut self, view: ListView<R>) {
        self.view = view;
        let len = self.view.rows().len();
        let selected = match (self.table_state.selected(), len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), n) => Some(i.min(n - 1)),
        };
        self.table_state.select(selected);
    }

    pub fn selected(&self) -> Option<&R> {
        self.table_state
            .selected()
            .and_then(|i| self.view.rows().get(i))
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.view.rows().len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    /// The action for `wanted` on the selected row, if the row offers it.
    fn row_action(&self, wanted: RowAction) -> Option<Action> {
        let row = self.selected()?;
        if !row.actions().contains(&wanted) {
            return None;
        }
        let id = row.id().clone();
        Some(match wanted {
            RowAction::Edit => Action::OpenEdit(R::KIND, id),
            RowAction::Delete => Action::RequestDelete(R::KIND, id),
            RowAction::ViewDetails => Action::OpenDetails(id),
        })
    }

    fn title(&self) -> String {
        let mut chars = R::KIND.collection().chars();
        let title: String = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect())
            .unwrap_or_default();
        match &self.view {
            ListView::Rows(rows) => format!("{title} ({})", rows.len()),
            _ => title,
        }
    }
}

impl<R: TableRow> Default for ListScreen<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TableRow> Component for ListScreen<R> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(None);
        }
        let action = match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                None
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.move_selection(isize::MIN);
                None
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.move_selection(isize::MAX);
                None
            }
            KeyCode::Char('r') => Some(Action::Refresh(R::KIND)),
            KeyCode::Char('e') => self.row_action(RowAction::Edit),
            KeyCode::Char('d') => self.row_action(RowAction::Delete),
            KeyCode::Enter | KeyCode::Char('v') => self.row_action(RowAction::ViewDetails),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if let Some(view) = R::view_from(action) {
            self.set_view(view.clone());
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" {} ", self.title()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                theme::border_focused()
            } else {
                theme::border_default()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

        let header = Row::new(R::HEADERS.iter().map(|h| Cell::from(*h))).style(theme::table_header());

        let rows: Vec<Row> = match self.view.placeholder() {
            Some(text) => {
                let style = if self.view.is_failed() {
                    ratatui::style::Style::default().fg(theme::ERROR)
                } else {
                    theme::placeholder()
                };
                vec![Row::new([Cell::from(Span::styled(text.to_owned(), style))])]
            }
            None => self
                .view
                .rows()
                .iter()
                .map(|r| Row::new(r.cells()).style(theme::table_row()))
                .collect(),
        };

        let widths = if self.view.placeholder().is_some() {
            vec![Constraint::Percentage(100)]
        } else {
            R::widths()
        };

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(theme::table_selected())
            .highlight_symbol("\u{25B8} ");

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, layout[0], &mut state);

        let mut hints = vec![("j/k", "move"), ("r", "refresh"), ("e", "edit"), ("d", "delete")];
        if R::KIND == EntityKind::Order {
            hints.insert(2, ("Enter", "details"));
        }
        frame.render_widget(Paragraph::new(form::hint_line(&hints)), layout[1]);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn id(&self) -> &str {
        R::KIND.collection()
    }
}

/// Shared "no rows" line for screens that render plain lists.
pub fn placeholder_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {text}"), theme::placeholder()))
}
