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

//! Playback session control and state management.
//!
//! This module provides the high-level [`PlayerSession`] interface used by
//! the UI to play channel streams. It manages a background worker thread
//! that interfaces with the underlying media library (MPV), ensuring that
//! heavy playback operations do not block the main application thread.
//!
//! A session is either closed or open for exactly one channel; opening a new
//! channel while one is active always tears the old playback instance down
//! first.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{events::AppEvent, model::Channel, player::commands::PlayerCommand};

/// Represents the current playback status of the media engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// How a stream URL should be handed to the playback engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum StreamKind {
    /// Segmented live stream; loaded with an explicit HLS demuxer hint.
    Hls,
    /// Anything else; the engine probes the container itself.
    Direct,
}

/// Classifies a stream URL by suffix-matching the path against the HLS
/// playlist extension. Query and fragment parts are not part of the path.
pub(crate) fn stream_kind(url: &str) -> StreamKind {
    let path = url
        .split_once(['?', '#'])
        .map_or(url, |(path, _)| path);

    if path.ends_with(".m3u8") {
        StreamKind::Hls
    } else {
        StreamKind::Direct
    }
}

/// A handle to the playback engine.
///
/// This struct acts as a command proxy; it does not perform media processing
/// itself but instead sends instructions to a background worker thread. It
/// also owns the session state machine: `active` is `Some` exactly while the
/// overlay is visible.
pub(crate) struct PlayerSession {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<PlayerCommand>,

    active: Option<Channel>,
}

impl PlayerSession {
    /// Spawns the playback worker thread and returns a new session handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (like state
    ///   updates or playback notices) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self {
            command_tx,
            active: None,
        })
    }

    pub(crate) fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub(crate) fn current(&self) -> Option<&Channel> {
        self.active.as_ref()
    }

    /// Opens the session for a channel, making it the single active playback
    /// instance. An instance already active for a previous channel is torn
    /// down before the new one is created.
    pub(crate) fn open(&mut self, channel: Channel) -> Result<()> {
        if self.active.is_some() {
            self.command_tx.send(PlayerCommand::Teardown)?;
        }

        let kind = stream_kind(&channel.url);
        self.command_tx
            .send(PlayerCommand::Load(channel.url.clone(), kind))?;

        self.active = Some(channel);
        Ok(())
    }

    /// Closes the session and tears down the active playback instance.
    /// Calling close on an already closed session is a no-op.
    pub(crate) fn close(&mut self) -> Result<()> {
        if self.active.take().is_some() {
            self.command_tx.send(PlayerCommand::Teardown)?;
        }

        Ok(())
    }

    /// Toggles the playback state between paused and playing.
    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(PlayerCommand::TogglePause)?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx.send(PlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    /// Toggles the audio output between muted and unmuted.
    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(PlayerCommand::ToggleMute)?;
        Ok(())
    }

    // Maps internal media backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Stopped
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str, url: &str) -> Channel {
        Channel {
            name: name.to_string(),
            logo: crate::model::PLACEHOLDER_LOGO.to_string(),
            group: crate::model::DEFAULT_GROUP.to_string(),
            url: url.to_string(),
        }
    }

    // Builds a session over a bare channel, no worker thread behind it.
    fn session() -> (PlayerSession, mpsc::Receiver<PlayerCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        let session = PlayerSession {
            command_tx,
            active: None,
        };
        (session, command_rx)
    }

    #[test]
    fn hls_urls_are_detected_by_path_suffix() {
        assert_eq!(stream_kind("http://stream/bbc.m3u8"), StreamKind::Hls);
        assert_eq!(stream_kind("http://stream/bbc.m3u8?token=1"), StreamKind::Hls);
        assert_eq!(stream_kind("http://stream/bbc.ts"), StreamKind::Direct);
        assert_eq!(stream_kind("http://stream/play?file=a.m3u8"), StreamKind::Direct);
    }

    #[test]
    fn open_loads_the_channel_stream() {
        let (mut session, command_rx) = session();

        session.open(channel("BBC", "http://stream/bbc.m3u8")).unwrap();

        assert!(session.is_open());
        assert_eq!(session.current().unwrap().name, "BBC");
        assert!(matches!(
            command_rx.try_recv(),
            Ok(PlayerCommand::Load(url, StreamKind::Hls)) if url == "http://stream/bbc.m3u8"
        ));
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn opening_a_second_channel_tears_the_first_down_before_loading() {
        let (mut session, command_rx) = session();

        session.open(channel("A", "http://stream/a.m3u8")).unwrap();
        session.open(channel("B", "http://stream/b.ts")).unwrap();

        assert_eq!(session.current().unwrap().name, "B");

        // A's load, then teardown of A strictly before B's load.
        assert!(matches!(command_rx.try_recv(), Ok(PlayerCommand::Load(_, _))));
        assert!(matches!(command_rx.try_recv(), Ok(PlayerCommand::Teardown)));
        assert!(matches!(
            command_rx.try_recv(),
            Ok(PlayerCommand::Load(url, StreamKind::Direct)) if url == "http://stream/b.ts"
        ));
    }

    #[test]
    fn close_tears_down_and_is_idempotent() {
        let (mut session, command_rx) = session();

        session.open(channel("A", "http://stream/a.m3u8")).unwrap();
        session.close().unwrap();
        session.close().unwrap();

        assert!(!session.is_open());
        assert!(session.current().is_none());

        assert!(matches!(command_rx.try_recv(), Ok(PlayerCommand::Load(_, _))));
        assert!(matches!(command_rx.try_recv(), Ok(PlayerCommand::Teardown)));
        // The second close sent nothing.
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn close_while_closed_is_a_no_op() {
        let (mut session, command_rx) = session();

        session.close().unwrap();

        assert!(!session.is_open());
        assert!(command_rx.try_recv().is_err());
    }

    #[test]
    fn player_state_mapping() {
        assert_eq!(PlayerSession::player_state(false, true), PlayerState::Stopped);
        assert_eq!(PlayerSession::player_state(true, true), PlayerState::Stopped);
        assert_eq!(PlayerSession::player_state(true, false), PlayerState::Paused);
        assert_eq!(PlayerSession::player_state(false, false), PlayerState::Playing);
    }
}
