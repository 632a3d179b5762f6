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

//! UI rendering logic for the channel grid.
//!
//! This module handles the visual representation of channel cards, including
//! column layout, selection highlighting, scrolling, and the empty-state
//! placeholder, using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{
    components::grid::{GridView, project_cards},
    render::icons::{ICON_NO_LOGO, ICON_TV},
    theme::Theme,
};

const CARD_MIN_WIDTH: u16 = 24;
const CARD_HEIGHT: u16 = 5;

impl GridView {
    /// Renders the card grid, fully rebuilding the widget set from the
    /// visible channel list. Records the observed column layout so keyboard
    /// navigation matches what is on screen.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let cards = project_cards(self.channels());

        if cards.is_empty() {
            let placeholder = Paragraph::new("No channels found.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.card_group_fg));
            f.render_widget(placeholder, centred_line(area));
            return;
        }

        let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        self.columns = columns;

        // Scroll just enough to keep the selection on screen.
        let selected_row = self.selected / columns;
        if selected_row < self.first_row {
            self.first_row = selected_row;
        } else if selected_row >= self.first_row + visible_rows {
            self.first_row = selected_row + 1 - visible_rows;
        }

        let card_width = area.width / columns as u16;

        for (index, card) in cards.iter().enumerate() {
            let row = index / columns;
            if row < self.first_row || row >= self.first_row + visible_rows {
                continue;
            }

            let column = index % columns;
            let cell = Rect::new(
                area.x + column as u16 * card_width,
                area.y + (row - self.first_row) as u16 * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );

            self.draw_card(f, cell, theme, card, index == self.selected);
        }
    }

    fn draw_card(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        card: &super::ChannelCard,
        selected: bool,
    ) {
        let border_style = if selected {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Plain
            })
            .border_style(border_style);

        let logo = if card.has_logo { ICON_TV } else { ICON_NO_LOGO };

        let lines = vec![
            Line::from(logo).alignment(Alignment::Center),
            Line::from(card.name.as_str())
                .style(
                    Style::default()
                        .fg(theme.card_name_fg)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center),
            Line::from(card.group.as_str())
                .style(Style::default().fg(theme.card_group_fg))
                .alignment(Alignment::Center),
        ];

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

// A one-line area vertically centred in the given rect, for placeholders.
fn centred_line(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, 1)
}
