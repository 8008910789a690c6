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

//! Render the status line.
//!
//! Shows the video source after the host pushed one, otherwise a short key
//! hint line.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::App;

const KEY_HINTS: &str =
    "j/k move  enter play  v video  p play all  P play ids  a artist  o album  : cmd  q quit";

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.video_url {
        Some(url) => format!("video: {url}"),
        None => KEY_HINTS.to_string(),
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.theme.status_fg)),
        area,
    );
}
