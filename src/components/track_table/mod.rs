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

//! Interactive song table widget and state management.
//!
//! This module provides the table component for the current view: it owns
//! the focus state over the rendered rows and the row → identifier bindings
//! that interaction handling resolves commands against. The bindings are
//! rebuilt wholesale from the table model on every push, so targets from a
//! previous render can never leak into the next one and rebinding is
//! idempotent by construction.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{TableModel, Track};

/// Commands a table interaction can resolve to. Dispatching them to the host
/// bridge is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    PlayTrack(i64),
    PlayVideo(i64),
    PlayAll,
    PlayAllByIds,
    OpenArtist(i64),
    OpenAlbum(i64),
}

/// Identifier targets for one rendered row.
///
/// Unresolvable identifiers stay `None` and the matching interaction is a
/// silent no-op; the video id keeps the host's `0` sentinel for "no video".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RowTarget {
    pub(crate) track_id: Option<i64>,
    pub(crate) video_id: i64,
    pub(crate) artist_id: Option<i64>,
    pub(crate) album_id: Option<i64>,
}

impl RowTarget {
    fn for_track(track: &Track) -> Self {
        Self {
            track_id: track.id,
            video_id: track.mv_id,
            artist_id: track.artists.first().and_then(|artist| artist.id),
            album_id: track.album.id,
        }
    }
}

pub(crate) struct TrackTableState {
    rows: Vec<RowTarget>,
    pub(crate) table_state: TableState,
}

impl TrackTableState {
    pub(crate) fn new() -> Self {
        Self {
            rows: vec![],
            table_state: TableState::new(),
        }
    }

    /// Rebuilds the row bindings from a freshly normalized model.
    ///
    /// The previous bindings and scroll state are dropped entirely. The
    /// first row receives focus; an empty table has no focus at all.
    pub(crate) fn rebind(&mut self, model: &TableModel) {
        self.rows = model.items.iter().map(RowTarget::for_track).collect();
        self.table_state = TableState::new();
        if !self.rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn focused(&self) -> Option<&RowTarget> {
        self.table_state
            .selected()
            .and_then(|index| self.rows.get(index))
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    fn goto_next(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    // Moving up stops at the first row; only forward navigation wraps.
    fn goto_previous(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }
}
