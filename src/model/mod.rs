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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the view: Tracks with their
//! artist and album credits, the canonical [`TableModel`] derived from host
//! payloads, and the [`PayloadKind`] tag naming the four payload shapes the
//! host can push.
//!
//! Payloads originate from a streaming-music API and are only loosely typed,
//! so every track field is decoded permissively: anything missing falls back
//! to a default, and identifiers accept either an integer or a numeric
//! string. An identifier that cannot be read as a non-negative integer
//! decodes to `None`; actions targeting such a row are later dropped without
//! a command being issued.

pub(crate) mod normalize;
pub(crate) mod session;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One playable song, as pushed by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Track {
    #[serde(default, deserialize_with = "lenient_id")]
    pub(crate) id: Option<i64>,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) artists: Vec<ArtistRef>,
    #[serde(default)]
    pub(crate) album: AlbumRef,
    /// Duration in milliseconds.
    #[serde(default)]
    pub(crate) duration: i64,
    /// Music-video identifier; `0` means the track has no video.
    #[serde(default, alias = "mvid", alias = "mvId", deserialize_with = "lenient_video_id")]
    pub(crate) mv_id: i64,
}

/// An artist credited on a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ArtistRef {
    #[serde(default, deserialize_with = "lenient_id")]
    pub(crate) id: Option<i64>,
    #[serde(default)]
    pub(crate) name: String,
}

/// The album a track belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct AlbumRef {
    #[serde(default, deserialize_with = "lenient_id")]
    pub(crate) id: Option<i64>,
    #[serde(default)]
    pub(crate) name: String,
}

/// The four payload shapes a host push can carry, chosen explicitly by the
/// push envelope rather than inferred from field presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayloadKind {
    Search,
    Playlist,
    Artist,
    Album,
}

impl PayloadKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            PayloadKind::Search => "search",
            PayloadKind::Playlist => "playlist",
            PayloadKind::Artist => "artist",
            PayloadKind::Album => "album",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical, renderable representation of one table of songs.
///
/// `count` is always derived from `items`; callers never supply it.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct TableModel {
    pub(crate) title: String,
    pub(crate) cover_image_url: String,
    pub(crate) count: usize,
    pub(crate) items: Vec<Track>,
}

impl TableModel {
    pub(crate) fn new(title: String, cover_image_url: String, items: Vec<Track>) -> Self {
        Self {
            title,
            cover_image_url,
            count: items.len(),
            items,
        }
    }
}

// Reads an identifier that may arrive as an integer or as a numeric string.
// Anything else, including negative numbers, decodes to `None`.
fn parse_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    };
    id.filter(|id| *id >= 0)
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_id(&value))
}

fn lenient_video_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_id(&value).unwrap_or(0))
}
