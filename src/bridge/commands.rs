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

//! Host command wire format and the bridge worker.
//!
//! Commands cross the host connection as newline-delimited JSON objects
//! tagged with a `cmd` field. The worker thread drains the command channel
//! and writes one line per command; if the connection dies the failure is
//! broadcast as a fatal application event and the worker stops.

use std::{
    io::Write,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{events::AppEvent, model::Track};

/// Messages sent from the view to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub(crate) enum HostCommand {
    PlayTrack { id: i64 },
    PlayTracks { tracks: Vec<Track> },
    PlayTrackIds { track_ids: Vec<i64> },
    PlayVideo { id: i64 },
    OpenArtist { id: i64 },
    OpenAlbum { id: i64 },
}

/// Spawns a background thread to write queued commands to the host.
///
/// The worker takes ownership of the command receiver and the write half of
/// the host connection. It runs until the channel closes or a write fails;
/// a write failure is reported as a fatal event since the view is useless
/// without its host link.
pub(crate) fn spawn_bridge_worker<W: Write + Send + 'static>(
    command_rx: Receiver<HostCommand>,
    writer: W,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        if let Err(e) = bridge_worker(command_rx, writer) {
            let _ = event_tx.send(AppEvent::FatalError(format!("Host link failure: {e:?}")));
        }
    });
}

fn bridge_worker<W: Write>(command_rx: Receiver<HostCommand>, mut writer: W) -> Result<()> {
    while let Ok(command) = command_rx.recv() {
        debug!("dispatch {command:?}");
        write_command(&mut writer, &command)?;
    }

    Ok(())
}

/// Writes one command as a single JSON line.
fn write_command<W: Write>(writer: &mut W, command: &HostCommand) -> Result<()> {
    serde_json::to_writer(&mut *writer, command).context("Failed to encode host command")?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .context("Failed to write host command")?;
    Ok(())
}
