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

//! Keyboard routing and command dispatch.
//!
//! This module acts as the primary input router, translating low-level
//! [`KeyEvent`]s into high-level actions. The commander gets first refusal
//! on every key; remaining keys go to the global bindings and then to the
//! song table. [`dispatch_table_action`] is the single point where a
//! resolved table action becomes a fire-and-forget host bridge call.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use log::debug;

use crate::{App, components::TrackTableAction, events::AppEvent};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let handled = app.commander.handle_event(event, &app.event_tx);
    if handled {
        return Ok(());
    }

    if let KeyCode::Char('q') = key.code {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);
    if let Some(action) = app.table.process_event(&event) {
        dispatch_table_action(app, action)?;
    }

    Ok(())
}

/// Issues the host command for a resolved table action.
///
/// Commands are fire-and-forget; once queued for the bridge worker their
/// outcome is the host's concern.
pub(super) fn dispatch_table_action(app: &mut App, action: TrackTableAction) -> Result<()> {
    match action {
        TrackTableAction::PlayTrack(id) => {
            debug!("play : {id}");
            app.bridge.play_track(id)?;
        }
        TrackTableAction::PlayVideo(id) => app.bridge.play_video(id)?,
        TrackTableAction::PlayAll => app.bridge.play_tracks(app.session.displayed_tracks())?,
        TrackTableAction::PlayAllByIds => app.bridge.play_track_ids(app.session.displayed_ids())?,
        TrackTableAction::OpenArtist(id) => app.bridge.open_artist(id)?,
        TrackTableAction::OpenAlbum(id) => app.bridge.open_album(id)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bridge::{HostBridge, HostCommand},
        config::AppConfig,
        model::{PayloadKind, normalize::normalize},
    };
    use crossterm::event::KeyModifiers;
    use serde_json::json;
    use std::sync::mpsc::{self, Receiver};

    fn test_app() -> (App, Receiver<HostCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let app = App::new(AppConfig::default(), HostBridge::new(command_tx));
        (app, command_rx)
    }

    fn install(app: &mut App, payload: serde_json::Value) {
        let model = normalize(PayloadKind::Search, &payload).unwrap();
        app.table.rebind(&model);
        app.session.install(model);
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn navigation_and_activation_issue_one_play_command() {
        let (mut app, command_rx) = test_app();
        install(
            &mut app,
            json!([{"id": 10}, {"id": 20}, {"id": 30}, {"id": 40}, {"id": 50}]),
        );

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(command_rx.recv().unwrap(), HostCommand::PlayTrack { id: 30 });
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn quit_key_sends_the_exit_event() {
        let (mut app, _command_rx) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(matches!(
            app.event_rx.try_recv().unwrap(),
            AppEvent::ExitApplication
        ));
    }

    #[test]
    fn commander_gets_the_keys_first() {
        let (mut app, command_rx) = test_app();
        install(&mut app, json!([{"id": 10}]));

        press(&mut app, KeyCode::Char(':'));
        // 'p' now types into the commander instead of playing all
        press(&mut app, KeyCode::Char('p'));
        assert!(command_rx.try_recv().is_err());
        assert_eq!(app.commander.input.value(), "p");

        press(&mut app, KeyCode::Esc);
    }

    #[test]
    fn dispatch_covers_every_action() {
        let (mut app, command_rx) = test_app();
        install(&mut app, json!([{"id": 10}, {"id": 20}]));

        dispatch_table_action(&mut app, TrackTableAction::PlayVideo(3001)).unwrap();
        dispatch_table_action(&mut app, TrackTableAction::OpenArtist(1)).unwrap();
        dispatch_table_action(&mut app, TrackTableAction::OpenAlbum(4)).unwrap();
        dispatch_table_action(&mut app, TrackTableAction::PlayAllByIds).unwrap();

        assert_eq!(command_rx.recv().unwrap(), HostCommand::PlayVideo { id: 3001 });
        assert_eq!(command_rx.recv().unwrap(), HostCommand::OpenArtist { id: 1 });
        assert_eq!(command_rx.recv().unwrap(), HostCommand::OpenAlbum { id: 4 });
        assert_eq!(
            command_rx.recv().unwrap(),
            HostCommand::PlayTrackIds {
                track_ids: vec![10, 20],
            }
        );
    }
}
