//! Application core: event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use stockroom_core::{
    ApiStatus, Command, EntityId, EntityKind, Inventory, Notice, NoticeLevel, dialog,
};

use crate::action::{Action, PendingConfirm};
use crate::component::Component;
use crate::dialog::DialogView;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::{self, status_indicator};

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);
const COMPACT_WIDTH: u16 = 60;

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Last published API status check result.
    api_status: ApiStatus,
    /// Help overlay visibility.
    help_visible: bool,
    /// Terminal size; narrow terminals get a compact tab bar.
    terminal_size: (u16, u16),
    /// Action sender. Components and spawned tasks dispatch through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver, drained by the main loop.
    action_rx: mpsc::UnboundedReceiver<Action>,
    inventory: Inventory,
    /// Cancellation token for the data bridge task.
    data_cancel: CancellationToken,
    /// Pending delete confirmation (blocks other input while active).
    pending_confirm: Option<PendingConfirm>,
    /// Open edit or details dialog.
    dialog: Option<DialogView>,
    /// Active notification toast with display timestamp.
    notification: Option<(Notice, Instant)>,
}

impl App {
    pub fn new(inventory: Inventory) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            active_screen: ScreenId::default(),
            screens: create_screens().into_iter().collect(),
            running: true,
            api_status: ApiStatus::default(),
            help_visible: false,
            terminal_size: (0, 0),
            action_tx,
            action_rx,
            inventory,
            data_cancel: CancellationToken::new(),
            pending_confirm: None,
            dialog: None,
            notification: None,
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));
        self.init_screens()?;

        let inventory = self.inventory.clone();
        let cancel = self.data_cancel.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            crate::data_bridge::spawn_data_bridge(inventory, tx, cancel).await;
        });

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.data_cancel.cancel();
        drop(tui);
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Overlays take keys first, then
    /// global bindings, then the active screen.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.pending_confirm.is_some() {
            return Ok(match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            });
        }

        if let Some(dialog) = self.dialog.as_mut() {
            return Ok(dialog.handle_key(key));
        }

        if self.help_visible {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Some(Action::ToggleHelp),
                _ => None,
            });
        }

        let captured = self
            .screens
            .get(&self.active_screen)
            .is_some_and(|s| s.captures_input());
        if !captured {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(Some(Action::Quit)),
                (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                    return Ok(Some(Action::ToggleHelp));
                }
                (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='5')) => {
                    let n = c as u8 - b'0';
                    if let Some(screen) = ScreenId::from_number(n) {
                        return Ok(Some(Action::SwitchScreen(screen)));
                    }
                }
                (KeyModifiers::NONE, KeyCode::Tab) => {
                    return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
                }
                (_, KeyCode::BackTab) => {
                    return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
                }
                _ => {}
            }
        }

        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }
        Ok(None)
    }

    /// Forward `action` to every screen, queueing their follow-ups.
    fn broadcast(&mut self, action: &Action) -> Result<()> {
        for screen in self.screens.values_mut() {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }
        Ok(())
    }

    /// Process a single action: update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::Resize(w, h) => self.terminal_size = (*w, *h),

            Action::Render => {}

            Action::Tick => {
                if let Some((_, shown)) = &self.notification {
                    if shown.elapsed() > NOTIFICATION_TTL {
                        self.notification = None;
                    }
                }
                if let Some(dialog) = self.dialog.as_mut() {
                    dialog.tick();
                }
                self.broadcast(action)?;
            }

            Action::SwitchScreen(target) => {
                if *target != self.active_screen {
                    debug!("switching screen: {} → {}", self.active_screen, target);
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(false);
                    }
                    self.active_screen = *target;
                    if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                        screen.set_focused(true);
                    }
                }
            }

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::ApiStatusUpdated(status) => self.api_status = *status,

            // Data updates go to ALL screens so they stay in sync
            Action::ProductsUpdated(_)
            | Action::SuppliersUpdated(_)
            | Action::OrdersUpdated(_)
            | Action::DashboardUpdated(_)
            | Action::ProductOptionsUpdated(_)
            | Action::SupplierOptionsUpdated(_) => self.broadcast(action)?,

            // ── Refresh requests ──────────────────────────────────────
            Action::Refresh(kind) => {
                let kind = *kind;
                self.spawn_task(move |inv| async move { inv.refresh(kind).await });
            }
            Action::RefreshDashboard => {
                self.spawn_task(|inv| async move {
                    tokio::join!(inv.check_status(), inv.refresh_dashboard());
                });
            }
            Action::RefreshProductOptions => {
                self.spawn_task(|inv| async move { inv.refresh_product_options().await });
            }

            // ── Dialogs ───────────────────────────────────────────────
            Action::OpenEdit(kind, id) => self.open_edit(*kind, id.clone()),
            Action::OpenDetails(id) => self.open_details(id.clone()),
            Action::EditLoaded(session) => {
                self.dialog = Some(DialogView::edit(session.clone()));
            }
            Action::DetailsLoaded(details) => {
                self.dialog = Some(DialogView::details(details.clone()));
            }
            Action::CloseDialog => self.dialog = None,

            // ── Command pipeline ──────────────────────────────────────
            Action::RequestDelete(kind, id) => {
                self.pending_confirm =
                    PendingConfirm::for_command(Command::delete(*kind, id.clone()));
            }
            Action::ConfirmYes => {
                if let Some(confirm) = self.pending_confirm.take() {
                    self.execute_command(confirm.command);
                }
            }
            Action::ConfirmNo => self.pending_confirm = None,
            Action::Submit(cmd) => self.execute_command(cmd.clone()),
            Action::MutationFinished {
                mutation, applied, ..
            } => {
                if self
                    .dialog
                    .as_mut()
                    .is_some_and(|d| d.mutation_finished(*mutation, *applied))
                {
                    self.dialog = None;
                }
                self.broadcast(action)?;
            }

            // ── Notices ───────────────────────────────────────────────
            Action::Notify(notice) => {
                self.notification = Some((notice.clone(), Instant::now()));
            }
            Action::DismissNotification => self.notification = None,
        }
        Ok(())
    }

    // ── Background work ──────────────────────────────────────────────

    /// Run `task` against the inventory off the UI loop. Its results come
    /// back through the published views.
    fn spawn_task<F, Fut>(&self, task: F)
    where
        F: FnOnce(Inventory) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(task(self.inventory.clone()));
    }

    fn open_edit(&self, kind: EntityKind, id: EntityId) {
        let inventory = self.inventory.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match inventory.open_edit(kind, &id).await {
                Ok(session) => Action::EditLoaded(session),
                Err(e) => {
                    warn!(error = %e, %kind, %id, "failed to load item for editing");
                    Action::Notify(Notice::error(dialog::LOAD_ITEM_FAILED))
                }
            };
            let _ = tx.send(action);
        });
    }

    fn open_details(&self, id: EntityId) {
        let inventory = self.inventory.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match inventory.order_details(&id).await {
                Ok(details) => Action::DetailsLoaded(details),
                Err(e) => {
                    warn!(error = %e, %id, "failed to load order details");
                    Action::Notify(Notice::error(dialog::LOAD_DETAILS_FAILED))
                }
            };
            let _ = tx.send(action);
        });
    }

    /// Spawn a mutation. Reports back with `MutationFinished` and the
    /// outcome's notice.
    fn execute_command(&self, cmd: Command) {
        let inventory = self.inventory.clone();
        let tx = self.action_tx.clone();
        let kind = cmd.kind();
        let mutation = cmd.mutation();
        tokio::spawn(async move {
            let outcome = inventory.apply_confirmed(cmd).await;
            let _ = tx.send(Action::MutationFinished {
                kind,
                mutation,
                applied: outcome.is_applied(),
            });
            if let Some(notice) = outcome.notice() {
                let _ = tx.send(Action::Notify(notice.clone()));
            }
        });
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Layout: [screen content] [tab bar] [status bar]
        let layout = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, layout[0]);
        }
        self.render_tab_bar(frame, layout[1]);
        self.render_status_bar(frame, layout[2]);

        // Overlays, last = topmost
        if let Some(dialog) = &self.dialog {
            dialog.render(frame, area);
        }
        if let Some((notice, _)) = &self.notification {
            Self::render_notification(frame, area, notice);
        }
        if let Some(confirm) = &self.pending_confirm {
            Self::render_confirm_dialog(frame, area, confirm);
        }
        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let compact = self.terminal_size.0 < COMPACT_WIDTH;
        let titles: Vec<Line> = ScreenId::ALL
            .iter()
            .map(|&id| {
                let style = if id == self.active_screen {
                    theme::tab_active()
                } else {
                    theme::tab_inactive()
                };
                let title = if compact {
                    format!(" {} ", id.number())
                } else {
                    format!(" {} {} ", id.number(), id.label())
                };
                Line::from(Span::styled(title, style))
            })
            .collect();

        let tabs = Tabs::new(titles)
            .divider(Span::styled(" ", theme::key_hint()))
            .select(
                ScreenId::ALL
                    .iter()
                    .position(|&s| s == self.active_screen)
                    .unwrap_or(0),
            );
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" "),
            status_indicator::status_span(self.api_status),
            Span::styled(" │ ? help  Tab switch  q quit", theme::key_hint()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let panel = widgets::centered_rect(area, 58, 20);
        let inner =
            widgets::overlay_block(frame, panel, "Keyboard Shortcuts", theme::border_focused());

        let section = |title: &'static str| {
            Line::from(Span::styled(
                format!("  {title}"),
                Style::default().fg(theme::HIGHLIGHT),
            ))
        };
        let binding = |key: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {key:<10}"), theme::key_hint_key()),
                Span::styled(what, theme::key_hint()),
            ])
        };

        let help_text = vec![
            Line::from(""),
            section("Navigation"),
            binding("1-5", "Jump to screen"),
            binding("Tab", "Next screen"),
            binding("j/k ↑/↓", "Move up/down"),
            binding("g/G", "Top / bottom"),
            Line::from(""),
            section("Tables"),
            binding("r", "Refresh"),
            binding("e", "Edit selected"),
            binding("d", "Delete selected"),
            binding("Enter", "Order details"),
            Line::from(""),
            section("Create"),
            binding("←/→", "Switch form / cycle choice"),
            binding("Enter", "Start editing / create"),
            binding("Ctrl+N/D", "Add / remove order item"),
            Line::from(""),
            binding("?", "This help"),
            binding("q", "Quit"),
        ];
        frame.render_widget(Paragraph::new(help_text), inner);
    }

    fn render_confirm_dialog(frame: &mut Frame, area: Rect, confirm: &PendingConfirm) {
        let panel = widgets::centered_rect(area, 50, 5);
        let inner = widgets::overlay_block(
            frame,
            panel,
            "Confirm",
            Style::default().fg(theme::WARNING),
        );

        let text = vec![
            Line::from(Span::styled(
                format!("  {}", confirm.prompt),
                Style::default().fg(theme::TEXT),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  y ", theme::key_hint_key()),
                Span::styled("confirm    ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(text), inner);
    }

    /// Render a notification toast in the bottom-right corner.
    fn render_notification(frame: &mut Frame, area: Rect, notice: &Notice) {
        let msg_len = u16::try_from(notice.message.chars().count()).unwrap_or(u16::MAX);
        let width = msg_len.saturating_add(6).clamp(20, 60).min(area.width);
        let height = 3u16;
        let x = area.width.saturating_sub(width + 1);
        let y = area.height.saturating_sub(height + 2); // above status bar
        let toast_area = Rect::new(area.x + x, area.y + y, width, height.min(area.height));

        let color = theme::notice_color(notice.level);
        let icon = match notice.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✗",
            NoticeLevel::Info => "·",
        };

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let line = Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::styled(notice.message.as_str(), Style::default().fg(theme::TEXT)),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stockroom_core::{ApiConfig, EditSession, MutationKind, ProductForm};

    fn app() -> App {
        let config = ApiConfig::new("http://127.0.0.1:9/".parse().unwrap());
        App::new(Inventory::new(&config).unwrap())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dispatch(app: &mut App, code: KeyCode) {
        if let Some(action) = app.handle_key_event(key(code)).unwrap() {
            app.process_action(&action).unwrap();
        }
    }

    #[test]
    fn number_keys_switch_screens() {
        let mut app = app();
        dispatch(&mut app, KeyCode::Char('4'));
        assert_eq!(app.active_screen, ScreenId::Orders);
        dispatch(&mut app, KeyCode::Tab);
        assert_eq!(app.active_screen, ScreenId::Create);
        dispatch(&mut app, KeyCode::Tab);
        assert_eq!(app.active_screen, ScreenId::Dashboard);
    }

    #[test]
    fn editing_create_form_swallows_global_keys() {
        let mut app = app();
        dispatch(&mut app, KeyCode::Char('5'));
        dispatch(&mut app, KeyCode::Enter);

        dispatch(&mut app, KeyCode::Char('q'));
        dispatch(&mut app, KeyCode::Char('2'));
        assert!(app.running);
        assert_eq!(app.active_screen, ScreenId::Create);

        dispatch(&mut app, KeyCode::Esc);
        dispatch(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn declined_delete_clears_confirmation() {
        let mut app = app();
        app.process_action(&Action::RequestDelete(EntityKind::Supplier, "s1".into()))
            .unwrap();
        let prompt = app.pending_confirm.as_ref().unwrap().prompt.clone();
        assert!(prompt.contains("supplier"));

        // other keys are swallowed while the prompt is up
        assert!(app.handle_key_event(key(KeyCode::Char('q'))).unwrap().is_none());

        dispatch(&mut app, KeyCode::Char('n'));
        assert!(app.pending_confirm.is_none());
    }

    #[test]
    fn help_overlay_toggles() {
        let mut app = app();
        dispatch(&mut app, KeyCode::Char('?'));
        assert!(app.help_visible);
        dispatch(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_screen, ScreenId::Dashboard);
        dispatch(&mut app, KeyCode::Esc);
        assert!(!app.help_visible);
    }

    #[test]
    fn open_dialog_receives_keys_until_closed() {
        let mut app = app();
        let session = EditSession::Product {
            id: "p1".into(),
            form: ProductForm::default(),
        };
        app.process_action(&Action::EditLoaded(session)).unwrap();

        dispatch(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert!(app.dialog.is_some());

        dispatch(&mut app, KeyCode::Esc);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn failed_update_keeps_dialog_open() {
        let mut app = app();
        let session = EditSession::Product {
            id: "p1".into(),
            form: ProductForm::default(),
        };
        app.process_action(&Action::EditLoaded(session)).unwrap();
        app.process_action(&Action::MutationFinished {
            kind: EntityKind::Product,
            mutation: MutationKind::Update,
            applied: false,
        })
        .unwrap();
        assert!(app.dialog.is_some());
    }

    #[test]
    fn notices_are_shown_then_dismissed() {
        let mut app = app();
        app.process_action(&Action::Notify(Notice::success("Product created successfully!")))
            .unwrap();
        assert_eq!(
            app.notification.as_ref().unwrap().0.message,
            "Product created successfully!"
        );
        app.process_action(&Action::DismissNotification).unwrap();
        assert!(app.notification.is_none());
    }
}
