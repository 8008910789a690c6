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

//! Payload normalization.
//!
//! Each of the four push kinds carries its track list and header fields under
//! different names; [`normalize`] maps any of them onto the one canonical
//! [`TableModel`] the renderer consumes. Normalization either succeeds
//! completely or fails without side effects; a failed push must leave the
//! previously displayed table untouched, so nothing here mutates view state.

use serde_json::Value;
use thiserror::Error;

use crate::model::{PayloadKind, TableModel, Track};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum NormalizeError {
    #[error("unknown payload kind `{0}`")]
    UnknownKind(String),
    #[error("malformed {kind} payload: `{field}` is missing or not a list")]
    MalformedPayload {
        kind: PayloadKind,
        field: &'static str,
    },
}

/// Resolves a push-envelope kind string to a [`PayloadKind`].
pub(crate) fn parse_kind(kind: &str) -> Result<PayloadKind, NormalizeError> {
    match kind {
        "search" => Ok(PayloadKind::Search),
        "playlist" => Ok(PayloadKind::Playlist),
        "artist" => Ok(PayloadKind::Artist),
        "album" => Ok(PayloadKind::Album),
        other => Err(NormalizeError::UnknownKind(other.to_string())),
    }
}

/// Converts one host payload into the canonical table model.
///
/// Search results are a bare track list with no header; the other kinds
/// carry a name and a cover image alongside their list. The count is always
/// derived here, never taken from the payload.
pub(crate) fn normalize(kind: PayloadKind, payload: &Value) -> Result<TableModel, NormalizeError> {
    match kind {
        PayloadKind::Search => {
            let items = track_list(kind, payload, "payload")?;
            Ok(TableModel::new(String::new(), String::new(), items))
        }
        PayloadKind::Playlist => {
            let items = track_list_field(kind, payload, "tracks")?;
            Ok(TableModel::new(
                text_field(payload, &["name"]),
                text_field(payload, &["coverImgUrl", "coverImageUrl"]),
                items,
            ))
        }
        PayloadKind::Artist => {
            let items = track_list_field(kind, payload, "hotSongs")?;
            Ok(TableModel::new(
                text_field(payload, &["name"]),
                text_field(payload, &["picUrl", "coverImageUrl"]),
                items,
            ))
        }
        PayloadKind::Album => {
            let items = track_list_field(kind, payload, "songs")?;
            Ok(TableModel::new(
                text_field(payload, &["name"]),
                text_field(payload, &["picUrl", "coverImageUrl"]),
                items,
            ))
        }
    }
}

fn track_list_field(
    kind: PayloadKind,
    payload: &Value,
    field: &'static str,
) -> Result<Vec<Track>, NormalizeError> {
    match payload.get(field) {
        Some(list) => track_list(kind, list, field),
        None => Err(NormalizeError::MalformedPayload { kind, field }),
    }
}

fn track_list(
    kind: PayloadKind,
    list: &Value,
    field: &'static str,
) -> Result<Vec<Track>, NormalizeError> {
    if !list.is_array() {
        return Err(NormalizeError::MalformedPayload { kind, field });
    }

    serde_json::from_value(list.clone())
        .map_err(|_| NormalizeError::MalformedPayload { kind, field })
}

// Reads the first present string field from the payload; header fields keep
// both the API spelling and the canonical one.
fn text_field(payload: &Value, names: &[&str]) -> String {
    names
        .iter()
        .find_map(|name| payload.get(*name).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}
