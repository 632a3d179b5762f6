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

//! Channel grid widget and selection state management.
//!
//! This module provides the card grid used to browse channels. The
//! projection from channels to display cards is a pure function, keeping the
//! catalog and parser free of any rendering dependency; layout and widget
//! composition live in the sibling render module.

mod render;

use crate::model::{Channel, PLACEHOLDER_LOGO};

/// View model for one grid card, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChannelCard {
    pub(crate) name: String,
    pub(crate) group: String,
    pub(crate) has_logo: bool,
}

/// Projects a channel sequence into display cards, one per channel, in
/// sequence order. A channel carrying only the placeholder logo is marked so
/// the card can render its fallback art.
pub(crate) fn project_cards(channels: &[Channel]) -> Vec<ChannelCard> {
    channels
        .iter()
        .map(|channel| ChannelCard {
            name: channel.name.clone(),
            group: channel.group.clone(),
            has_logo: channel.logo != PLACEHOLDER_LOGO,
        })
        .collect()
}

pub(crate) struct GridView {
    channels: Vec<Channel>,
    selected: usize,

    // Layout observed during the last draw, reused by keyboard navigation.
    columns: usize,
    first_row: usize,
}

impl GridView {
    pub(crate) fn new() -> Self {
        Self {
            channels: vec![],
            selected: 0,
            columns: 1,
            first_row: 0,
        }
    }

    /// Replaces the visible channel list, fully discarding the previous set
    /// and resetting the selection.
    pub(crate) fn set_channels(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
        self.selected = 0;
        self.first_row = 0;
    }

    pub(crate) fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub(crate) fn selected_channel(&self) -> Option<&Channel> {
        self.channels.get(self.selected)
    }

    pub(crate) fn move_right(&mut self) {
        if self.selected + 1 < self.channels.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        let below = self.selected + self.columns;
        if below < self.channels.len() {
            self.selected = below;
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.columns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_GROUP;

    fn channel(name: &str, logo: &str) -> Channel {
        Channel {
            name: name.to_string(),
            logo: logo.to_string(),
            group: DEFAULT_GROUP.to_string(),
            url: format!("http://stream/{}", name),
        }
    }

    fn grid(count: usize, columns: usize) -> GridView {
        let mut grid = GridView::new();
        grid.set_channels(
            (0..count)
                .map(|i| channel(&format!("ch{}", i), PLACEHOLDER_LOGO))
                .collect(),
        );
        grid.columns = columns;
        grid
    }

    #[test]
    fn projection_preserves_order_and_marks_placeholder_logos() {
        let channels = vec![
            channel("A", "http://l/a.png"),
            channel("B", PLACEHOLDER_LOGO),
        ];

        let cards = project_cards(&channels);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "A");
        assert!(cards[0].has_logo);
        assert_eq!(cards[1].name, "B");
        assert!(!cards[1].has_logo);
    }

    #[test]
    fn empty_grid_has_no_selection() {
        let grid = GridView::new();
        assert!(grid.selected_channel().is_none());
    }

    #[test]
    fn navigation_stays_within_bounds() {
        let mut grid = grid(5, 3);

        grid.move_left();
        grid.move_up();
        assert_eq!(grid.selected_channel().unwrap().name, "ch0");

        grid.move_right();
        grid.move_down();
        assert_eq!(grid.selected_channel().unwrap().name, "ch4");

        grid.move_right();
        grid.move_down();
        assert_eq!(grid.selected_channel().unwrap().name, "ch4");
    }

    #[test]
    fn vertical_navigation_moves_by_a_full_row() {
        let mut grid = grid(9, 3);

        grid.move_down();
        assert_eq!(grid.selected_channel().unwrap().name, "ch3");
        grid.move_down();
        assert_eq!(grid.selected_channel().unwrap().name, "ch6");
        grid.move_up();
        assert_eq!(grid.selected_channel().unwrap().name, "ch3");
    }

    #[test]
    fn replacing_channels_resets_the_selection() {
        let mut grid = grid(6, 3);
        grid.move_down();

        grid.set_channels(vec![channel("only", PLACEHOLDER_LOGO)]);
        assert_eq!(grid.selected_channel().unwrap().name, "only");
    }
}
