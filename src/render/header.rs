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

//! Render the table header block.
//!
//! Shows the view title, the derived song count, and the cover image URL
//! when the current payload carries one. Search results have no header
//! fields, so only the count line appears for them.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let model = app.session.table();

    let mut lines = vec![
        Line::from(model.title.as_str()).style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("{} songs", model.count)),
    ];
    if !model.cover_image_url.is_empty() {
        lines.push(
            Line::from(model.cover_image_url.as_str())
                .style(Style::default().fg(app.theme.status_fg)),
        );
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(app.theme.border_colour)),
        ),
        area,
    );
}
