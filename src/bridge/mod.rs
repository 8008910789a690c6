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

//! The outbound host bridge.
//!
//! This module provides the high-level [`HostBridge`] interface the view uses
//! to issue commands to the surrounding music-player application. Every call
//! is fire-and-forget: the command is queued for a background worker that
//! writes it onto the host connection, nothing is returned, and the outcome
//! is entirely the host's concern. This layer never retries or inspects
//! results.

mod commands;

pub(crate) use commands::{HostCommand, spawn_bridge_worker};

use std::sync::mpsc::Sender;

use anyhow::Result;

use crate::model::Track;

/// A handle to the host command channel.
///
/// This struct acts as a command proxy; it performs no I/O itself but
/// instead sends instructions to the bridge worker thread.
pub(crate) struct HostBridge {
    command_tx: Sender<HostCommand>,
}

impl HostBridge {
    pub(crate) fn new(command_tx: Sender<HostCommand>) -> Self {
        Self { command_tx }
    }

    /// Asks the host to play a single track.
    pub(crate) fn play_track(&self, id: i64) -> Result<()> {
        self.command_tx.send(HostCommand::PlayTrack { id })?;
        Ok(())
    }

    /// Asks the host to play a whole list of tracks, serialized in full.
    pub(crate) fn play_tracks(&self, tracks: Vec<Track>) -> Result<()> {
        self.command_tx.send(HostCommand::PlayTracks { tracks })?;
        Ok(())
    }

    /// Asks the host to play tracks by id only.
    pub(crate) fn play_track_ids(&self, track_ids: Vec<i64>) -> Result<()> {
        self.command_tx.send(HostCommand::PlayTrackIds { track_ids })?;
        Ok(())
    }

    /// Asks the host to play a music video. Callers guarantee `id != 0`.
    pub(crate) fn play_video(&self, id: i64) -> Result<()> {
        self.command_tx.send(HostCommand::PlayVideo { id })?;
        Ok(())
    }

    /// Asks the host to navigate to an artist page.
    pub(crate) fn open_artist(&self, id: i64) -> Result<()> {
        self.command_tx.send(HostCommand::OpenArtist { id })?;
        Ok(())
    }

    /// Asks the host to navigate to an album page.
    pub(crate) fn open_album(&self, id: i64) -> Result<()> {
        self.command_tx.send(HostCommand::OpenAlbum { id })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn methods_queue_one_command_each() {
        let (tx, rx) = mpsc::channel();
        let bridge = HostBridge::new(tx);

        bridge.play_track(101).unwrap();
        bridge.play_video(3001).unwrap();
        bridge.open_artist(1).unwrap();
        bridge.open_album(4).unwrap();

        assert_eq!(rx.recv().unwrap(), HostCommand::PlayTrack { id: 101 });
        assert_eq!(rx.recv().unwrap(), HostCommand::PlayVideo { id: 3001 });
        assert_eq!(rx.recv().unwrap(), HostCommand::OpenArtist { id: 1 });
        assert_eq!(rx.recv().unwrap(), HostCommand::OpenAlbum { id: 4 });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn bulk_ids_keep_their_order() {
        let (tx, rx) = mpsc::channel();
        let bridge = HostBridge::new(tx);

        bridge.play_track_ids(vec![10, 20, 30]).unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            HostCommand::PlayTrackIds {
                track_ids: vec![10, 20, 30],
            }
        );
    }
}
