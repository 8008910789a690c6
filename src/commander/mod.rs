// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command-line input logic and state management.
//!
//! This module implements the `:` command line, handling a text input
//! component and dispatching the corresponding application event when a
//! command is submitted. Commands issue the same outbound host actions as
//! the table key bindings; unknown commands and unparsable arguments are
//! ignored silently, consistent with the dispatch suppression policy.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{components::TrackTableAction, events::AppEvent};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Esc => {
                        self.active = false;
                        self.input.reset();
                        true
                    }

                    KeyCode::Enter => {
                        let buffer = self.input.value().trim().to_string();
                        if !buffer.is_empty() {
                            let _ = self.run_command(&buffer, event_tx);
                        }
                        self.input.reset();
                        self.active = false;
                        true
                    }

                    _ => {
                        // Delegate all key events to the managed input component.
                        self.input.handle_event(&event);
                        true
                    }
                },

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char(':') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => event_tx.send(AppEvent::ExitApplication)?,

            ["p"] => event_tx.send(AppEvent::Dispatch(TrackTableAction::PlayAll))?,
            ["pi"] => event_tx.send(AppEvent::Dispatch(TrackTableAction::PlayAllByIds))?,

            ["ar", id] => {
                if let Some(id) = parse_arg(id) {
                    event_tx.send(AppEvent::Dispatch(TrackTableAction::OpenArtist(id)))?
                }
            }
            ["al", id] => {
                if let Some(id) = parse_arg(id) {
                    event_tx.send(AppEvent::Dispatch(TrackTableAction::OpenAlbum(id)))?
                }
            }
            ["v", id] => {
                if let Some(id) = parse_arg(id).filter(|id| *id != 0) {
                    event_tx.send(AppEvent::Dispatch(TrackTableAction::PlayVideo(id)))?
                }
            }

            [] => {}

            [_, ..] => {} // unknown command (and params)
        }

        Ok(())
    }
}

fn parse_arg(arg: &str) -> Option<i64> {
    arg.parse::<i64>().ok().filter(|id| *id >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::sync::mpsc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn submit(commander: &mut Commander, text: &str, event_tx: &Sender<AppEvent>) {
        assert!(commander.handle_event(key(KeyCode::Char(':')), event_tx));
        for c in text.chars() {
            commander.handle_event(key(KeyCode::Char(c)), event_tx);
        }
        commander.handle_event(key(KeyCode::Enter), event_tx);
    }

    #[test]
    fn colon_activates_and_escape_cancels() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(key(KeyCode::Char('x')), &tx));
        assert!(commander.handle_event(key(KeyCode::Char(':')), &tx));
        assert!(commander.active());

        commander.handle_event(key(KeyCode::Esc), &tx);
        assert!(!commander.active());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn play_all_commands_dispatch() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        submit(&mut commander, "p", &tx);
        submit(&mut commander, "pi", &tx);

        assert!(matches!(
            rx.recv().unwrap(),
            AppEvent::Dispatch(TrackTableAction::PlayAll)
        ));
        assert!(matches!(
            rx.recv().unwrap(),
            AppEvent::Dispatch(TrackTableAction::PlayAllByIds)
        ));
    }

    #[test]
    fn open_artist_parses_its_argument() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        submit(&mut commander, "ar 42", &tx);
        assert!(matches!(
            rx.recv().unwrap(),
            AppEvent::Dispatch(TrackTableAction::OpenArtist(42))
        ));

        submit(&mut commander, "ar x42", &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn video_command_suppresses_the_zero_sentinel() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        submit(&mut commander, "v 0", &tx);
        assert!(rx.try_recv().is_err());

        submit(&mut commander, "v 3001", &tx);
        assert!(matches!(
            rx.recv().unwrap(),
            AppEvent::Dispatch(TrackTableAction::PlayVideo(3001))
        ));
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        submit(&mut commander, "frobnicate 1 2 3", &tx);
        assert!(rx.try_recv().is_err());
        assert!(!commander.active());
    }
}
