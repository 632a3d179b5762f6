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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—Channels and
//! the catalog that holds them—representing a parsed IPTV playlist.

pub(crate) mod catalog;

/// Display name used when a metadata line carries no name field.
pub(crate) const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Group label used when a metadata line carries no `group-title` attribute.
pub(crate) const DEFAULT_GROUP: &str = "General";

/// Thumbnail URL used when a metadata line carries no `tvg-logo` attribute.
pub(crate) const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/150x150?text=TV";

/// A single playable playlist entry.
///
/// Channels have no identity beyond their position in the catalog; the whole
/// list is rebuilt from scratch on every playlist fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: String,
    pub logo: String,
    pub group: String,
    pub url: String,
}
