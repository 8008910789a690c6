use log::{debug, info, warn};
use serde_json::Value;

use crate::{
    App,
    model::{
        PayloadKind,
        normalize::{self, NormalizeError},
    },
};

/// Refreshes the table from a host push.
///
/// Normalization either succeeds and replaces the whole view (table model,
/// displayed-songs cache, and row bindings together) or fails and changes
/// nothing, leaving the previously displayed table visible.
pub(super) fn handle_host_push(app: &mut App, kind: &str, payload: Value) {
    match refresh_table(app, kind, &payload) {
        Ok(kind) => debug!(
            "installed {} view: {} songs",
            kind,
            app.session.table().count
        ),
        Err(e) => warn!("push dropped: {e}"),
    }
}

fn refresh_table(app: &mut App, kind: &str, payload: &Value) -> Result<PayloadKind, NormalizeError> {
    let kind = normalize::parse_kind(kind)?;
    let model = normalize::normalize(kind, payload)?;

    app.table.rebind(&model);
    app.session.install(model);

    Ok(kind)
}

pub(super) fn handle_show_video(app: &mut App, url: String) {
    debug!("video source set to {url}");
    app.video_url = Some(url);
}

pub(super) fn handle_host_log(text: String) {
    info!("host: {text}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bridge::{HostBridge, HostCommand},
        config::AppConfig,
        events::key_handlers::process_key_event,
    };
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::json;
    use std::sync::mpsc::{self, Receiver};

    fn test_app() -> (App, Receiver<HostCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let app = App::new(AppConfig::default(), HostBridge::new(command_tx));
        (app, command_rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn drive_playlist() -> Value {
        json!({
            "id": 7,
            "name": "Drive",
            "coverImgUrl": "http://x/img.png",
            "tracks": [{
                "id": 101,
                "name": "A",
                "artists": [{"id": 1, "name": "Ann"}],
                "album": {"name": "Alb"},
                "duration": 125000,
                "mvid": 0,
            }],
        })
    }

    #[test]
    fn playlist_push_refreshes_table_cache_and_bindings() {
        let (mut app, command_rx) = test_app();

        handle_host_push(&mut app, "playlist", drive_playlist());

        assert_eq!(app.session.table().title, "Drive");
        assert_eq!(app.session.table().cover_image_url, "http://x/img.png");
        assert_eq!(app.session.table().count, 1);
        assert_eq!(app.session.displayed_ids(), vec![101]);
        assert_eq!(app.table.len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            command_rx.recv().unwrap(),
            HostCommand::PlayTrack { id: 101 }
        );

        // mv is 0, so the video control issues nothing
        press(&mut app, KeyCode::Char('v'));
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn failed_push_leaves_the_previous_view_intact() {
        let (mut app, _command_rx) = test_app();

        handle_host_push(&mut app, "playlist", drive_playlist());
        handle_host_push(&mut app, "playlist", json!({"name": "broken"}));
        handle_host_push(&mut app, "radio", json!({"tracks": []}));

        assert_eq!(app.session.table().title, "Drive");
        assert_eq!(app.session.displayed_ids(), vec![101]);
        assert_eq!(app.table.len(), 1);
    }

    #[test]
    fn rebinding_on_a_second_push_does_not_duplicate_dispatch() {
        let (mut app, command_rx) = test_app();

        handle_host_push(&mut app, "playlist", drive_playlist());
        handle_host_push(&mut app, "search", json!([{"id": 555}]));

        press(&mut app, KeyCode::Enter);

        assert_eq!(
            command_rx.recv().unwrap(),
            HostCommand::PlayTrack { id: 555 }
        );
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn bulk_play_uses_the_displayed_songs_cache() {
        let (mut app, command_rx) = test_app();

        handle_host_push(
            &mut app,
            "playlist",
            json!({"name": "p", "tracks": [{"id": 10}, {"id": 20}, {"id": 30}]}),
        );

        press(&mut app, KeyCode::Char('P'));
        assert_eq!(
            command_rx.recv().unwrap(),
            HostCommand::PlayTrackIds {
                track_ids: vec![10, 20, 30],
            }
        );

        press(&mut app, KeyCode::Char('p'));
        match command_rx.recv().unwrap() {
            HostCommand::PlayTracks { tracks } => {
                assert_eq!(tracks.len(), 3);
                assert_eq!(tracks[0].id, Some(10));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn video_push_sets_the_player_source() {
        let (mut app, _command_rx) = test_app();
        handle_show_video(&mut app, "http://v/mv.mp4".to_string());
        assert_eq!(app.video_url.as_deref(), Some("http://v/mv.mp4"));
    }
}
