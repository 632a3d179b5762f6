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

//! # IPTV Channel Browser TUI.
//!
//! A terminal-based browser and player for M3U channel playlists.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * **Background Workers** handle the playlist fetch and media playback via
//!   asynchronous command processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod events;
mod model;
mod player;
mod playlist;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    components::{GridView, SearchBar},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::catalog::Catalog,
    player::{PlayerSession, PlayerState},
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
///
/// All mutable state is owned here and passed by reference into the event
/// and render layers; there are no module-scope globals.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub player: PlayerSession,

    pub catalog: Catalog,
    pub search: SearchBar,
    pub grid: GridView,

    /// Bounds of the player overlay from the last draw, used to detect
    /// clicks outside it.
    pub overlay_area: Option<Rect>,

    pub player_state: PlayerState,
    pub player_title: Option<String>,
    pub volume: Option<u32>,
    pub notice: Option<String>,
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let player_event_tx = event_tx.clone();

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            player: PlayerSession::new(player_event_tx)?,
            catalog: Catalog::new(),
            search: SearchBar::new(),
            grid: GridView::new(),
            overlay_area: None,
            player_state: PlayerState::Stopped,
            player_title: None,
            volume: None,
            notice: None,
            status: None,
        })
    }

    /// Recomputes the visible channel list from the full catalog and the
    /// current search query.
    pub fn refresh_grid(&mut self) {
        let visible = self.catalog.filter(self.search.value());
        self.grid.set_channels(visible);
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initalise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture, needed for outside-click dismissal of the
///   player overlay.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&theme::Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background
/// color. It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a
/// result, as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event
/// loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s (the playlist
///   fetch).
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw input events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    tx_input.send(AppEvent::Key(key)).ok();
                }
                Ok(event::Event::Mouse(mouse)) => {
                    tx_input.send(AppEvent::Mouse(mouse)).ok();
                }
                _ => {}
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the catalog from the remote playlist
    app.task_tx.send(AppTask::FetchPlaylist).unwrap();

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
