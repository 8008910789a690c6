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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs (keyboard events, pushes
//! from the host, and commander submissions) are translated into state
//! changes and outbound host commands.
//!
//! # Organization
//!
//! * [`handlers`]: Handlers for host-originated events (pushes, video,
//!   diagnostics).
//! * [`key_handlers`]: Keyboard routing and the single dispatch point that
//!   turns table actions into host bridge calls.

mod handlers;
mod key_handlers;

use std::io::Stdout;

use anyhow::{Result, bail};
use crossterm::event::KeyEvent;
use log::error;
use ratatui::{Terminal, prelude::CrosstermBackend};
use serde_json::Value;

use crate::{App, components::TrackTableAction, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A table payload pushed by the host, kind still unvalidated.
    HostPush { kind: String, payload: Value },
    /// The host asked the view to surface a music video.
    ShowVideo(String),
    /// Diagnostic text forwarded by the host.
    HostLog(String),

    /// A command resolved outside the table key path (commander).
    Dispatch(TrackTableAction),

    Tick,

    ExitApplication,

    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::HostPush { kind, payload } => handlers::handle_host_push(app, &kind, payload),
            AppEvent::ShowVideo(url) => handlers::handle_show_video(app, url),
            AppEvent::HostLog(text) => handlers::handle_host_log(text),
            AppEvent::Dispatch(action) => key_handlers::dispatch_table_action(app, action)?,
            AppEvent::FatalError(message) => {
                error!("{message}");
                bail!(message);
            }
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
