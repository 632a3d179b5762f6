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

//! Render the player overlay.
//!
//! This module renders the dismissible modal shown while a channel session
//! is open: the channel name as its title, playback state, volume, and any
//! non-fatal playback notice.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::PlayerState,
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
};

const MAX_VOLUME: f64 = 130.0;

/// Renders the player overlay centred over the grid and returns its bounds,
/// so clicks outside it can dismiss the session.
pub(crate) fn draw_overlay(f: &mut Frame, area: Rect, app: &App) -> Rect {
    let overlay = centred_rect(area, 60, 40);

    let channel_name = app
        .player
        .current()
        .map(|c| c.name.as_str())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent_colour))
        .title(format!(" {} ", channel_name))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .padding(Padding::uniform(1));

    let inner = block.inner(overlay);

    f.render_widget(Clear, overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let icon = match app.player_state {
        PlayerState::Playing => ICON_PLAY,
        PlayerState::Paused => ICON_PAUSE,
        PlayerState::Stopped => ICON_STOP,
    };

    let title = app.player_title.as_deref().unwrap_or(channel_name);
    let state_line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
            .fg(Color::White),
        Span::styled(title, Style::default().add_modifier(Modifier::BOLD))
            .fg(app.theme.accent_colour),
    ]);
    f.render_widget(Paragraph::new(state_line), chunks[0]);

    if let Some(channel) = app.player.current() {
        let group_line = Line::from(vec![
            Span::raw(" in "),
            Span::styled(channel.group.as_str(), Style::default().fg(app.theme.card_group_fg)),
        ]);
        f.render_widget(Paragraph::new(group_line), chunks[1]);
    }

    draw_volume(f, chunks[2], app);

    if let Some(notice) = &app.notice {
        let notice_line = Paragraph::new(notice.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.error_fg));
        f.render_widget(notice_line, chunks[3]);
    }

    let hints = Paragraph::new(" esc/x close   space pause   m mute   -/= volume")
        .style(Style::default().fg(app.theme.hint_fg));
    f.render_widget(hints, chunks[4]);

    overlay
}

fn draw_volume(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Length(6), Constraint::Min(0)])
        .split(area);

    let volume = app.volume.unwrap_or(0);
    let ratio = (volume as f64 / MAX_VOLUME).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, chunks[0]);

    let label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Left)
        .fg(Color::White);
    f.render_widget(label, chunks[1]);
}

// Percentage-sized rect centred within the given area.
fn centred_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
