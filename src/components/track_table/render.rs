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

//! UI rendering logic for the song table.
//!
//! This module handles the visual representation of the canonical table
//! model, including column layout, focus highlighting, the video marker,
//! and the alternate-row shading carried over from the original page style.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::TrackTableState,
    config::AppConfig,
    model::TableModel,
    theme::Theme,
    util::format,
};

impl TrackTableState {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        model: &TableModel,
        theme: &Theme,
        config: &AppConfig,
    ) {
        let rows = model.items.iter().enumerate().map(|(index, track)| {
            let time = format::format_duration(track.duration);
            let video_marker = if track.mv_id != 0 { "mv" } else { "" };

            let row = Row::new(vec![
                Cell::from(Line::from(track.name.as_str()).style(Style::default().fg(theme.table_track_fg))),
                Cell::from(Line::from(format::artist_names(&track.artists)).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(track.album.name.as_str()).style(Style::default().fg(theme.table_album_fg))),
                Cell::from(Line::from(time).style(Style::default().fg(theme.table_time_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(video_marker).style(Style::default().fg(theme.table_mv_fg))),
            ]);

            if config.alternate_rows && index % 2 == 1 {
                row.style(Style::default().bg(theme.alternate_row_bg))
            } else {
                row
            }
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Length(6),
                Constraint::Length(2),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Artist"),
                Cell::from("Album"),
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from(""),
            ])
            .style(
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(theme.accent_colour),
            )
            .bottom_margin(1),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.focus_bg)
                .fg(theme.focus_fg),
        )
        .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
