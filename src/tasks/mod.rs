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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking work,
//! here the playlist fetch, from the main UI thread. It provides a dedicated
//! worker loop that translates [`AppTask`] requests into network operations
//! and broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of
//! time to process, should be implemented as tasks.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::{config::AppConfig, events::AppEvent, playlist};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchPlaylist,
}

/// The single "fetch failed" condition. Transport failures, non-success
/// statuses, and a broken relay all land here; the rendered message carries
/// the underlying error text. No retry is attempted.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Failed to load playlist: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to load playlist: server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own HTTP client and enters a blocking
/// loop, listening for incoming [`AppTask`]s.
///
/// If the internal worker returns an error, it is caught here and broadcast
/// as a fatal application event.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        if let Err(e) = task_worker(&config, task_rx, event_tx) {
            let _ = error_tx.send(AppEvent::FatalError(format!("Task worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the task worker.
///
/// # Errors
///
/// Returns an error if the HTTP client fails to initialize.
fn task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to initialise HTTP client")?;

    while let Ok(task) = task_rx.recv() {
        match task {
            AppTask::FetchPlaylist => fetch_playlist(config, &client, &event_tx),
        }
    }

    Ok(())
}

/// Retrieves the playlist document, parses it, and broadcasts the resulting
/// channel list. A failure is broadcast as a static message that replaces
/// the loading indicator; the catalog stays empty.
fn fetch_playlist(config: &AppConfig, client: &reqwest::blocking::Client, event_tx: &Sender<AppEvent>) {
    let event = match fetch_playlist_text(config, client) {
        Ok(text) => AppEvent::ChannelsLoaded(playlist::parse_m3u(&text)),
        Err(e) => AppEvent::PlaylistFailed(e.to_string()),
    };

    let _ = event_tx.send(event);
}

/// Produces the playlist document's full text, or fails.
///
/// The playlist origin does not permit direct cross-origin access, so the
/// request is re-issued through the configured relay; the relay endpoint
/// takes the real location as a query parameter.
fn fetch_playlist_text(
    config: &AppConfig,
    client: &reqwest::blocking::Client,
) -> Result<String, FetchError> {
    let response = client
        .get(&config.relay_url)
        .query(&[("url", config.playlist_url.as_str())])
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn status_errors_surface_the_status_text() {
        let error = FetchError::Status(reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(
            error.to_string(),
            "Failed to load playlist: server returned 502 Bad Gateway"
        );
    }

    #[test]
    fn worker_shuts_down_cleanly_when_the_task_channel_closes() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        spawn_task_worker(&AppConfig::default(), task_rx, event_tx);

        // With the task sender gone the worker loop must exit without
        // panicking and without broadcasting a fatal event.
        drop(task_tx);
        assert!(event_rx.recv_timeout(Duration::from_secs(5)).is_err());
    }
}
