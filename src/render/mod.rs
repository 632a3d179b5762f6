// Copyright (C) 2026  zapui contributors
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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

pub(crate) mod icons;
mod overlay;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, model::catalog::CatalogState, render::overlay::draw_overlay};

/// Renders the user interface to the terminal frame.
///
/// The screen is partitioned into a header carrying the application title
/// and the search field, the main area showing the loading indicator, the
/// fetch error, or the channel grid, and a status line with key hints. When
/// a player session is open, its overlay is drawn on top and its bounds are
/// recorded on the [`App`] for outside-click dismissal.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);
    draw_main(f, outer[1], app);
    draw_status(f, outer[2], app);

    if app.player.is_open() {
        app.overlay_area = Some(draw_overlay(f, area, app));
    } else {
        app.overlay_area = None;
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        " ZapUI ",
        Style::default()
            .fg(app.theme.accent_colour)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let search_style = if app.search.active() {
        Style::default().fg(app.theme.accent_colour)
    } else {
        Style::default().fg(app.theme.border_colour)
    };

    let search = Paragraph::new(app.search.value()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title(" Search (/) ")
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(search, chunks[1]);

    if app.search.active() {
        // Place the terminal cursor inside the input field.
        let x = chunks[1].x + 2 + app.search.input.visual_cursor() as u16;
        f.set_cursor_position((x.min(chunks[1].right().saturating_sub(2)), chunks[1].y + 1));
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &mut App) {
    match &app.catalog.state {
        CatalogState::Loading => {
            let loading = Paragraph::new("Loading playlist…")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.card_group_fg));
            f.render_widget(loading, centred_area(area, 1));
        }

        CatalogState::Failed(message) => {
            let error = Paragraph::new(vec![
                Line::from("Failed to load playlist."),
                Line::from(message.as_str()),
            ])
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.error_fg));
            f.render_widget(error, centred_area(area, 2));
        }

        CatalogState::Ready => app.grid.draw(f, area, &app.theme),
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(app.theme.error_fg),
        )),
        None => Line::from(Span::styled(
            " enter play   / search   r refresh   q quit",
            Style::default().fg(app.theme.hint_fg),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}

// An area of the given height vertically centred in the given rect.
fn centred_area(area: Rect, height: u16) -> Rect {
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x, y, area.width, height.min(area.height))
}
