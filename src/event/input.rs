use std::{thread, time::Duration};

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::Sender;

use crate::flash::FlashId;

#[derive(Debug)]
pub enum AppEvent {
    /// The trigger: the screen is ready and the initial flashes are visible.
    /// Sent exactly once, before any other event.
    Ready,
    Input(KeyEvent),
    Tick,
    Quit,
    FlashClosing(FlashId),
    FlashRemove(FlashId),
    ExecCommand(String),
}

pub type EventSender = Sender<AppEvent>;

pub fn start(event_sender: EventSender) {
    thread::spawn(move || {
        if event_sender.blocking_send(AppEvent::Ready).is_err() {
            return;
        }
        loop {
            // short poll so closing flashes redraw at animation cadence
            if poll(Duration::from_millis(50)).unwrap() {
                if let Event::Key(key) = event::read().unwrap() {
                    let action: Option<AppEvent> = match key.modifiers {
                        KeyModifiers::CONTROL => match key.code {
                            KeyCode::Char('c') => Some(AppEvent::Quit),
                            _ => None,
                        },
                        _ => None,
                    };

                    let sent = match action {
                        Some(a) => event_sender.blocking_send(a),
                        None => event_sender.blocking_send(AppEvent::Input(key)),
                    };
                    if sent.is_err() {
                        return;
                    }
                }
            } else if event_sender.blocking_send(AppEvent::Tick).is_err() {
                return;
            }
        }
    });
}
