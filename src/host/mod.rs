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

//! Inbound host pushes.
//!
//! The host drives the view by pushing newline-delimited JSON envelopes of
//! the form `{"push": <kind>, "payload": ...}` over its connection. A reader
//! thread parses each line and forwards it to the main event loop; table
//! payloads travel with their kind string untouched so that the push handler
//! is the single place where an unsupported kind is rejected.

use std::{
    io::{BufRead, BufReader, Read},
    sync::mpsc::Sender,
    thread,
};

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::events::AppEvent;

/// One push from the host, as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct PushEnvelope {
    pub(crate) push: String,
    #[serde(default)]
    pub(crate) payload: Value,
}

#[derive(Debug, Deserialize)]
struct VideoPayload {
    url: String,
}

#[derive(Debug, Deserialize)]
struct LogPayload {
    text: String,
}

/// Spawns a background thread that reads host pushes line by line.
///
/// The thread runs until the connection closes or the event channel is
/// dropped. Unreadable lines are logged and skipped; a bad push never takes
/// the view down.
pub(crate) fn spawn_host_reader<R: Read + Send + 'static>(reader: R, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        let reader = BufReader::new(reader);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            if line.trim().is_empty() {
                continue;
            }

            let envelope: PushEnvelope = match serde_json::from_str(&line) {
                Ok(envelope) => envelope,
                Err(e) => {
                    warn!("unreadable host push: {e}");
                    continue;
                }
            };

            if let Some(event) = push_event(envelope) {
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }
    });
}

/// Maps a push envelope to an application event.
///
/// `video` and `log` pushes are passthroughs handled before normalization;
/// everything else is a table payload and is forwarded with its raw kind.
pub(crate) fn push_event(envelope: PushEnvelope) -> Option<AppEvent> {
    match envelope.push.as_str() {
        "video" => match serde_json::from_value::<VideoPayload>(envelope.payload) {
            Ok(video) => Some(AppEvent::ShowVideo(video.url)),
            Err(_) => {
                debug!("video push without a url, ignored");
                None
            }
        },
        "log" => match serde_json::from_value::<LogPayload>(envelope.payload) {
            Ok(log) => Some(AppEvent::HostLog(log.text)),
            Err(_) => None,
        },
        _ => Some(AppEvent::HostPush {
            kind: envelope.push,
            payload: envelope.payload,
        }),
    }
}
