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

//! Application configuration.
//!
//! This module manages the application configuration file.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "zapui";

const DEFAULT_PLAYLIST_URL: &str =
    "https://github.com/omnixmain/OMNIX-PLAYLIST-ZONE/raw/refs/heads/main/playlist/RoarZoneTv.m3u";

// The playlist origin does not serve permissive access headers, so the
// request is re-issued through a relay that does.
const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub playlist_url: String,
    pub relay_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            playlist_url: DEFAULT_PLAYLIST_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
