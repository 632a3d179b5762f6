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

//! Search input logic and state management.
//!
//! This module implements the live channel filter: a text input component
//! activated with `/` whose value narrows the visible grid on every
//! keystroke. The filter itself lives in the catalog; this component only
//! manages the query text and focus state.

use crossterm::event::{Event, KeyCode, KeyEvent};
use tui_input::{Input, backend::crossterm::EventHandler};

pub(crate) struct SearchBar {
    active: bool,
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Clears the query and drops focus; used when the catalog is rebuilt.
    pub(crate) fn reset(&mut self) {
        self.input.reset();
        self.active = false;
    }

    /// Routes a key event to the search field.
    ///
    /// Returns `true` when the event was consumed; the caller should then
    /// recompute the visible channel list from the current value.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.active {
            match key.code {
                // Abandon the search entirely
                KeyCode::Esc => {
                    self.reset();
                    true
                }

                // Keep the filter, return focus to the grid
                KeyCode::Enter => {
                    self.active = false;
                    true
                }

                _ => {
                    // Delegate all other key events to the managed input
                    // component.
                    self.input.handle_event(&Event::Key(key));
                    true
                }
            }
        } else {
            match key.code {
                KeyCode::Char('/') => {
                    self.active = true;
                    true
                }

                _ => false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn slash_activates_and_typing_builds_the_query() {
        let mut search = SearchBar::new();

        assert!(!search.handle_key(key(KeyCode::Char('b'))));
        assert!(search.handle_key(key(KeyCode::Char('/'))));
        assert!(search.active());

        search.handle_key(key(KeyCode::Char('b')));
        search.handle_key(key(KeyCode::Char('b')));
        search.handle_key(key(KeyCode::Char('c')));
        assert_eq!(search.value(), "bbc");
    }

    #[test]
    fn enter_keeps_the_filter_but_drops_focus() {
        let mut search = SearchBar::new();
        search.handle_key(key(KeyCode::Char('/')));
        search.handle_key(key(KeyCode::Char('x')));

        assert!(search.handle_key(key(KeyCode::Enter)));
        assert!(!search.active());
        assert_eq!(search.value(), "x");
    }

    #[test]
    fn escape_abandons_the_search() {
        let mut search = SearchBar::new();
        search.handle_key(key(KeyCode::Char('/')));
        search.handle_key(key(KeyCode::Char('x')));

        assert!(search.handle_key(key(KeyCode::Esc)));
        assert!(!search.active());
        assert_eq!(search.value(), "");
    }
}
