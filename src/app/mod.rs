use std::{fmt::Display, io, time::Instant};

use crossterm::event::{Event, KeyCode};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{Receiver, Sender};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    board::FlashBoard,
    config::Config,
    dismiss::Dismisser,
    event::input::AppEvent,
    flash::parse_message,
    theme::Scheme,
    ui::render,
};

#[derive(PartialEq, Eq, Debug)]
pub enum InputMode {
    Normal,
    Command,
}

impl Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub struct App {
    pub config: Config,
    pub board: FlashBoard,
    pub input_mode: InputMode,
    pub command_input: Input,
    dismisser: Dismisser,
    receiver: Receiver<AppEvent>,
    sender: Sender<AppEvent>,
    quit: bool,
}

impl App {
    pub fn new(config: Config, receiver: Receiver<AppEvent>, sender: Sender<AppEvent>) -> App {
        let mut board = FlashBoard::new();
        for raw in &config.messages {
            let (level, message) = parse_message(raw);
            board.post(message, level);
        }
        let dismisser = Dismisser::new(config.delay, config.slide, sender.clone());
        App {
            config,
            board,
            dismisser,
            receiver,
            sender,
            input_mode: InputMode::Normal,
            command_input: Input::default(),
            quit: false,
        }
    }

    pub fn theme(&self) -> Scheme {
        self.config.theme.scheme()
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), anyhow::Error> {
        loop {
            let event = self.receiver.recv().await;

            if event.is_none() {
                continue;
            }

            let event = event.unwrap();

            self.handle_event(event).await?;

            if self.quit {
                return Ok(());
            }

            terminal.autoresize()?;
            terminal.draw(|frame| {
                render(self, frame);
            })?;
        }
    }

    async fn handle_event(&mut self, event: AppEvent) -> Result<(), anyhow::Error> {
        match event {
            AppEvent::Quit => self.quit = true,
            AppEvent::Ready => {
                // capture once: flashes posted after this are not managed
                let ids = self.board.ids();
                log::info!("ready, scheduling dismissal of {} flashes", ids.len());
                self.dismisser.arm(ids);
            }
            AppEvent::FlashClosing(id) => {
                self.board.mark_closing(id, Instant::now());
            }
            AppEvent::FlashRemove(id) => {
                self.board.remove(id);
            }
            AppEvent::ExecCommand(ref cmd) => self.exec_command(cmd).await?,
            AppEvent::Input(e) => match self.input_mode {
                InputMode::Normal => {
                    if let KeyCode::Char(char) = e.code {
                        match char {
                            ':' => self.input_mode = InputMode::Command,
                            // dismiss the topmost flash by hand
                            'x' => {
                                if let Some(id) = self.board.first_id() {
                                    self.board.remove(id);
                                }
                            }
                            'q' => self.sender.send(AppEvent::Quit).await?,
                            _ => (),
                        }
                    }
                }
                InputMode::Command => match e.code {
                    // escape back to normal mode
                    KeyCode::Esc => {
                        self.input_mode = InputMode::Normal;
                        self.command_input.reset();
                    }
                    // execute command
                    KeyCode::Enter => {
                        self.input_mode = InputMode::Normal;
                        let cmd = self.command_input.value().to_string();
                        self.command_input.reset();
                        self.sender.send(AppEvent::ExecCommand(cmd)).await?;
                    }
                    // delegate keys to command input
                    _ => {
                        self.command_input.handle_event(&Event::Key(e));
                    }
                },
            },
            AppEvent::Tick => (),
        };
        Ok(())
    }

    async fn exec_command(&mut self, cmd: &str) -> Result<(), anyhow::Error> {
        match cmd {
            "q" => self.sender.send(AppEvent::Quit).await?,
            _ => {
                if let Some(raw) = cmd.strip_prefix("flash ") {
                    let (level, message) = parse_message(raw);
                    self.board.post(message, level);
                }
            }
        }
        Ok(())
    }
}
