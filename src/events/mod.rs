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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard, mouse), background worker
//! updates (playlist fetch, media player), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers commands to background workers (fetch task, player).
//! 3. **Render**: After each event is processed, the UI is re-drawn using
//!    the `ratatui` terminal.

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, layout::Position, prelude::CrosstermBackend};

use crate::{
    App,
    model::{Channel, catalog::CatalogState},
    player::PlayerState,
    render::draw,
    tasks::AppTask,
};

const VOLUME_DELTA: i32 = 5;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    ChannelsLoaded(Vec<Channel>),
    PlaylistFailed(String),

    OpenChannel(Channel),
    CloseOverlay,

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    VolumeChanged(u32),
    PlayerNotice(String),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => {
                if let Err(e) = process_key_event(app, key) {
                    app.event_tx.send(AppEvent::Error(e.to_string()))?;
                }
            }
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse)?,

            AppEvent::ChannelsLoaded(channels) => {
                app.catalog.replace_all(channels);
                app.search.reset();
                app.refresh_grid();
            }
            AppEvent::PlaylistFailed(message) => {
                app.catalog.state = CatalogState::Failed(message);
            }

            AppEvent::OpenChannel(channel) => {
                app.notice = None;
                app.player_title = Some(channel.name.clone());
                app.player.open(channel)?;
            }
            AppEvent::CloseOverlay => {
                app.player.close()?;
                app.notice = None;
                app.player_title = None;
            }

            // Player state
            AppEvent::PlayerStateChanged(state) => app.player_state = state,
            AppEvent::TitleChanged(title) => app.player_title = Some(title),
            AppEvent::VolumeChanged(volume) => app.volume = Some(volume),
            AppEvent::PlayerNotice(notice) => app.notice = Some(notice),

            AppEvent::Error(message) => app.status = Some(message),
            AppEvent::FatalError(message) => return Err(anyhow!(message)),

            AppEvent::Tick => {}

            // Handled before the match; the loop has already exited.
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions and playback commands.
///
/// Routing order: while the player overlay is visible its controls consume
/// all keys; otherwise the search bar gets first refusal (live filtering),
/// and anything it leaves falls through to the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.player.is_open() {
        return process_overlay_key_event(app, key);
    }

    if app.search.handle_key(key) {
        app.refresh_grid();
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_overlay_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Escape or the close control dismisses the overlay
        KeyCode::Esc | KeyCode::Char('x') => app.event_tx.send(AppEvent::CloseOverlay)?,

        KeyCode::Char(' ') => app.player.toggle_pause()?,
        KeyCode::Char('m') => app.player.toggle_mute()?,
        KeyCode::Char('-') => app.player.adjust_volume(-VOLUME_DELTA)?,
        KeyCode::Char('=') | KeyCode::Char('+') => app.player.adjust_volume(VOLUME_DELTA)?,

        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        _ => {}
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('r') => {
            app.catalog.state = CatalogState::Loading;
            app.task_tx.send(AppTask::FetchPlaylist)?;
        }

        // Grid navigation
        KeyCode::Char('j') | KeyCode::Down => app.grid.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.grid.move_up(),
        KeyCode::Char('h') | KeyCode::Left => app.grid.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.grid.move_right(),

        KeyCode::Enter => {
            if let Some(channel) = app.grid.selected_channel() {
                app.event_tx.send(AppEvent::OpenChannel(channel.clone()))?;
            }
        }

        _ => {}
    }

    Ok(())
}

/// Dismisses the player overlay when a click lands outside its bounds.
fn process_mouse_event(app: &mut App, mouse: MouseEvent) -> Result<()> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return Ok(());
    }

    if app.player.is_open() {
        let inside = app
            .overlay_area
            .is_some_and(|area| area.contains(Position::new(mouse.column, mouse.row)));
        if !inside {
            app.event_tx.send(AppEvent::CloseOverlay)?;
        }
    }

    Ok(())
}
