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

//! Input handling and event processing for the song table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! outbound command actions. An interaction whose target identifier never
//! resolved is ignored without issuing anything, and the video control only
//! exists for rows that actually have a video.

use crossterm::event::{Event, KeyCode};

use crate::components::{TrackTableAction, TrackTableState};

impl TrackTableState {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<TrackTableAction> {
        // Internal navigation
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
                _ => {}
            },

            _ => {}
        }

        // Events that resolve to a host command
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Enter => self
                    .focused()
                    .and_then(|row| row.track_id)
                    .map(TrackTableAction::PlayTrack),

                KeyCode::Char('v') => self
                    .focused()
                    .map(|row| row.video_id)
                    .filter(|id| *id != 0)
                    .map(TrackTableAction::PlayVideo),

                KeyCode::Char('p') => Some(TrackTableAction::PlayAll),
                KeyCode::Char('P') => Some(TrackTableAction::PlayAllByIds),

                KeyCode::Char('a') => self
                    .focused()
                    .and_then(|row| row.artist_id)
                    .map(TrackTableAction::OpenArtist),
                KeyCode::Char('o') => self
                    .focused()
                    .and_then(|row| row.album_id)
                    .map(TrackTableAction::OpenAlbum),

                _ => None,
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PayloadKind, TableModel, normalize::normalize};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use serde_json::json;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn five_row_model() -> TableModel {
        let payload = json!([
            {"id": 10, "mvid": 0},
            {"id": 20, "mvid": 3001, "artists": [{"id": 7, "name": "Ann"}], "album": {"id": 40, "name": "Alb"}},
            {"id": 30},
            {"id": "bad"},
            {"id": 50},
        ]);
        normalize(PayloadKind::Search, &payload).unwrap()
    }

    fn bound_table() -> TrackTableState {
        let mut table = TrackTableState::new();
        table.rebind(&five_row_model());
        table
    }

    #[test]
    fn first_row_is_focused_after_rebind() {
        let table = bound_table();
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn next_wraps_back_to_the_first_row() {
        let mut table = bound_table();
        for _ in 0..5 {
            table.process_event(&key(KeyCode::Char('j')));
        }
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn previous_does_not_wrap_at_the_top() {
        let mut table = bound_table();
        table.process_event(&key(KeyCode::Char('k')));
        assert_eq!(table.table_state.selected(), Some(0));

        table.process_event(&key(KeyCode::Char('j')));
        table.process_event(&key(KeyCode::Up));
        assert_eq!(table.table_state.selected(), Some(0));
    }

    #[test]
    fn enter_plays_the_focused_row_exactly_once() {
        let mut table = bound_table();
        table.process_event(&key(KeyCode::Char('j')));

        let action = table.process_event(&key(KeyCode::Enter));
        assert_eq!(action, Some(TrackTableAction::PlayTrack(20)));
    }

    #[test]
    fn enter_on_an_unresolved_row_is_silently_ignored() {
        let mut table = bound_table();
        for _ in 0..3 {
            table.process_event(&key(KeyCode::Char('j')));
        }
        assert_eq!(table.table_state.selected(), Some(3));
        assert_eq!(table.process_event(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn video_control_respects_the_zero_sentinel() {
        let mut table = bound_table();
        assert_eq!(table.process_event(&key(KeyCode::Char('v'))), None);

        table.process_event(&key(KeyCode::Char('j')));
        assert_eq!(
            table.process_event(&key(KeyCode::Char('v'))),
            Some(TrackTableAction::PlayVideo(3001))
        );
    }

    #[test]
    fn cross_navigation_uses_the_rows_credits() {
        let mut table = bound_table();
        assert_eq!(table.process_event(&key(KeyCode::Char('a'))), None);
        assert_eq!(table.process_event(&key(KeyCode::Char('o'))), None);

        table.process_event(&key(KeyCode::Down));
        assert_eq!(
            table.process_event(&key(KeyCode::Char('a'))),
            Some(TrackTableAction::OpenArtist(7))
        );
        assert_eq!(
            table.process_event(&key(KeyCode::Char('o'))),
            Some(TrackTableAction::OpenAlbum(40))
        );
    }

    #[test]
    fn bulk_play_keys_do_not_depend_on_focus() {
        let mut table = TrackTableState::new();
        table.rebind(&TableModel::default());
        assert_eq!(
            table.process_event(&key(KeyCode::Char('p'))),
            Some(TrackTableAction::PlayAll)
        );
        assert_eq!(
            table.process_event(&key(KeyCode::Char('P'))),
            Some(TrackTableAction::PlayAllByIds)
        );
    }

    #[test]
    fn empty_table_has_no_focus_and_never_panics() {
        let mut table = TrackTableState::new();
        table.rebind(&TableModel::default());

        assert_eq!(table.table_state.selected(), None);
        table.process_event(&key(KeyCode::Char('j')));
        table.process_event(&key(KeyCode::Char('k')));
        assert_eq!(table.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(table.process_event(&key(KeyCode::Char('v'))), None);
    }

    #[test]
    fn rebinding_replaces_the_previous_targets() {
        let mut table = bound_table();
        for _ in 0..4 {
            table.process_event(&key(KeyCode::Char('j')));
        }

        let next = normalize(PayloadKind::Search, &json!([{"id": 99}])).unwrap();
        table.rebind(&next);

        assert_eq!(table.len(), 1);
        assert_eq!(table.table_state.selected(), Some(0));
        assert_eq!(
            table.process_event(&key(KeyCode::Enter)),
            Some(TrackTableAction::PlayTrack(99))
        );
    }
}
