//! Terminal input merged with tick and render heartbeats.
//!
//! `EventReader::next` polls crossterm and both intervals in place, so the
//! reader stops as soon as the event loop stops asking for events.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    /// Terminal was resized to (cols, rows).
    Resize(u16, u16),
    /// Periodic tick for toast expiry and spinner animation.
    Tick,
    /// Redraw request.
    Render,
}

pub struct EventReader {
    input: EventStream,
    tick: Interval,
    render: Interval,
}

impl EventReader {
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        Self {
            input: EventStream::new(),
            tick: heartbeat(tick_rate),
            render: heartbeat(render_rate),
        }
    }

    /// Next event, or `None` once terminal input has closed.
    pub async fn next(&mut self) -> Option<Event> {
        loop {
            let event = tokio::select! {
                _ = self.tick.tick() => Some(Event::Tick),
                _ = self.render.tick() => Some(Event::Render),
                input = self.input.next() => match input {
                    None => return None,
                    Some(Ok(raw)) => translate(raw),
                    Some(Err(e)) => {
                        warn!("terminal input error: {e}");
                        None
                    }
                },
            };
            if event.is_some() {
                return event;
            }
        }
    }
}

fn heartbeat(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Keep key presses and resizes. Regaining focus forces a redraw since
/// some terminals drop the screen contents while unfocused.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        CrosstermEvent::FocusGained => Some(Event::Render),
        _ => None,
    }
}
