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

//! View-session state.
//!
//! This module provides the owned holder for everything a single page view
//! displays: the current [`TableModel`] and the displayed-songs cache that
//! bulk actions read. Both are replaced together on every successful push,
//! and neither outlives the view.

use crate::model::{TableModel, Track};

/// State for the current page view.
///
/// The displayed-songs cache is a copy of the table's items taken at install
/// time; bulk-play commands serialize it directly instead of walking the
/// rendered table again.
pub(crate) struct ViewSession {
    table: TableModel,
    displayed: Vec<Track>,
}

impl ViewSession {
    pub(crate) fn new() -> Self {
        Self {
            table: TableModel::default(),
            displayed: vec![],
        }
    }

    /// Replaces the current table model and overwrites the displayed-songs
    /// cache in lockstep.
    pub(crate) fn install(&mut self, model: TableModel) {
        self.displayed = model.items.clone();
        self.table = model;
    }

    pub(crate) fn table(&self) -> &TableModel {
        &self.table
    }

    pub(crate) fn displayed_tracks(&self) -> Vec<Track> {
        self.displayed.clone()
    }

    /// Ids of the displayed songs, in display order. Rows whose identifier
    /// never resolved are skipped.
    pub(crate) fn displayed_ids(&self) -> Vec<i64> {
        self.displayed.iter().filter_map(|track| track.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PayloadKind, normalize::normalize};
    use serde_json::json;

    #[test]
    fn install_copies_items_into_the_cache() {
        let payload = json!({"name": "p", "tracks": [{"id": 10}, {"id": 20}, {"id": 30}]});
        let model = normalize(PayloadKind::Playlist, &payload).unwrap();

        let mut session = ViewSession::new();
        session.install(model);

        let cached = session.displayed_tracks();
        assert_eq!(cached.len(), session.table().items.len());
        let cached_ids: Vec<_> = cached.iter().map(|t| t.id).collect();
        let table_ids: Vec<_> = session.table().items.iter().map(|t| t.id).collect();
        assert_eq!(cached_ids, table_ids);
    }

    #[test]
    fn install_overwrites_the_previous_view() {
        let mut session = ViewSession::new();

        let first = normalize(PayloadKind::Search, &json!([{"id": 1}, {"id": 2}])).unwrap();
        session.install(first);
        let second = normalize(PayloadKind::Search, &json!([{"id": 9}])).unwrap();
        session.install(second);

        assert_eq!(session.displayed_ids(), vec![9]);
        assert_eq!(session.table().count, 1);
    }

    #[test]
    fn unresolved_ids_are_skipped_in_the_id_list() {
        let payload = json!([{"id": 10}, {"id": "nope"}, {"id": 30}]);
        let model = normalize(PayloadKind::Search, &payload).unwrap();

        let mut session = ViewSession::new();
        session.install(model);

        assert_eq!(session.displayed_ids(), vec![10, 30]);
        assert_eq!(session.displayed_tracks().len(), 3);
    }
}
