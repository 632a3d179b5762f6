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

//! MPV-backed playback engine and event processing.
//!
//! This module provides the core stream playback logic, leveraging `libmpv`
//! for decoding and output. It manages a background worker thread that
//! bridges the gap between the application's command-based interface and the
//! low-level MPV property observation system.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`PlayerCommand`]s from the session
//!    proxy to control playback (load, teardown, pause, volume).
//! 2. **Event Channel**: Broadcasts [`AppEvent`]s to notify the UI of state
//!    changes, such as stream titles, volume updates, and decode failures.

use anyhow::{Context, Result};
use mpv::Format;
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    events::AppEvent,
    player::{PlayerSession, PlayerState, StreamKind},
};

#[derive(Debug)]
pub(crate) enum PlayerCommand {
    Load(String, StreamKind),
    Teardown,
    TogglePause,
    AdjustVolume(i32),
    ToggleMute,
}

const DEFAULT_VOLUME: &str = "50";

/// Spawns the playback worker thread to process player commands.
///
/// This function takes ownership of the command receiver and the event
/// sender, moving them into a dedicated background thread.
///
/// If the internal worker returns an error, it is caught here and broadcast
/// as a fatal application event.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the player command channel.
/// * `event_tx` - The channel used to broadcast playback updates and errors.
pub(crate) fn spawn_player_worker(
    command_rx: Receiver<PlayerCommand>,
    event_tx: Sender<AppEvent>,
) {
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = player_worker(command_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("MPV worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the playback backend.
///
/// This function initializes a local `libmpv` context and enters a multi-loop
/// select pattern to handle incoming commands and outgoing events
/// simultaneously.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the internal
/// command/event loops encounter an unrecoverable failure.
fn player_worker(command_rx: Receiver<PlayerCommand>, event_tx: Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        // Live video plays in a native MPV window alongside the terminal.
        builder
            .set_option("force-window", "immediate")
            .context("Failed to set window creation")?;
        builder
            .set_option("volume", DEFAULT_VOLUME)
            .context("Failed to set initial volume")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    handler
        .observe_property::<&str>("media-title", 0)
        .context("Failed to observe media-title")?;
    handler
        .observe_property::<bool>("pause", 0)
        .context("Failed to observe pause")?;
    handler
        .observe_property::<f64>("volume", 0)
        .context("Failed to observe volume")?;
    handler
        .observe_property::<bool>("idle-active", 0)
        .context("Failed to observe idle-active")?;

    let mut is_paused = false;
    let mut is_idle = true;

    let mut player_state = PlayerState::Stopped;

    loop {
        process_commands(&mut handler, &command_rx)?;
        process_mpv_events(
            &mut handler,
            &mut is_paused,
            &mut is_idle,
            &mut player_state,
            &event_tx,
        )?;
    }
}

/// Drains and executes all pending commands from the application channel.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &mpsc::Receiver<PlayerCommand>,
) -> Result<()> {
    while let Ok(command) = command_rx.try_recv() {
        match command {
            PlayerCommand::Load(url, kind) => {
                // Segmented live streams get an explicit demuxer hint rather
                // than relying on probing a possibly extensionless server
                // response.
                let format_hint = match kind {
                    StreamKind::Hls => "hls",
                    StreamKind::Direct => "",
                };
                handler
                    .set_property("demuxer-lavf-format", format_hint)
                    .context("Failed to set demuxer format hint")?;

                handler
                    .command(&["loadfile", &url, "replace"])
                    .context(format!("Failed to load stream: {}", &url))?;
                handler.set_property("pause", false)?;
            }
            PlayerCommand::Teardown => {
                handler.command(&["stop"])?;
            }
            PlayerCommand::TogglePause => {
                handler.command(&["cycle", "pause"])?;
            }
            PlayerCommand::AdjustVolume(delta) => {
                handler.command(&["add", "volume", &delta.to_string()])?;
            }
            PlayerCommand::ToggleMute => {
                handler.command(&["cycle", "mute"])?;
            }
        }
    }

    Ok(())
}

/// Polls for MPV events and synchronizes the application state.
///
/// This function waits for up to 50ms for an event from the MPV context.
/// If an event occurs, it updates internal flags and broadcasts any
/// necessary [`AppEvent`]s to the UI. A stream the engine cannot decode is
/// reported as a non-fatal notice; the session stays open with no media
/// playing.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    is_paused: &mut bool,
    is_idle: &mut bool,
    current_state: &mut PlayerState,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        let app_event = match mpv_event {
            mpv::Event::PropertyChange { name, change, .. } => match (name, change) {
                ("media-title", Format::Str(title)) => {
                    Some(AppEvent::TitleChanged(title.to_string()))
                }
                ("pause", Format::Flag(pause)) => {
                    *is_paused = pause;
                    None
                }
                ("volume", Format::Double(volume)) => {
                    Some(AppEvent::VolumeChanged(volume.round() as u32))
                }
                ("idle-active", Format::Flag(idle_active)) => {
                    *is_idle = idle_active;
                    None
                }
                _ => None,
            },
            mpv::Event::EndFile(result) => {
                if let Ok(reason) = result {
                    match reason {
                        mpv::EndFileReason::MPV_END_FILE_REASON_ERROR => Some(AppEvent::PlayerNotice(
                            "Unsupported or unavailable stream format".to_string(),
                        )),
                        _ => None,
                    }
                } else {
                    None
                }
            }
            _ => None,
        };

        let new_player_state = PlayerSession::player_state(*is_paused, *is_idle);

        if new_player_state != *current_state {
            *current_state = new_player_state;
            event_tx
                .send(AppEvent::PlayerStateChanged(new_player_state))
                .context("Failed to send player state event")?;
        }

        if let Some(event) = app_event {
            event_tx.send(event).context("Failed to send event")?;
        }
    }

    Ok(())
}
