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

//! Channel catalog management.
//!
//! This module provides state for the channel catalog, holding the full
//! channel list produced by the most recent playlist fetch and exposing the
//! name filter used by the search view.

use crate::model::Channel;

/// Load progress of the catalog, driving the loading/error display.
pub(crate) enum CatalogState {
    Loading,
    Ready,
    Failed(String),
}

pub(crate) struct Catalog {
    pub(crate) state: CatalogState,
    channels: Vec<Channel>,
}

impl Catalog {
    pub(crate) fn new() -> Self {
        Self {
            state: CatalogState::Loading,
            channels: vec![],
        }
    }

    /// Discards the previous channel list wholesale and replaces it with the
    /// result of a fresh parse. Catalog order is playlist document order.
    pub(crate) fn replace_all(&mut self, channels: Vec<Channel>) {
        self.channels = channels;
        self.state = CatalogState::Ready;
    }

    pub(crate) fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Returns the ordered subsequence of channels whose name contains the
    /// query, compared case-insensitively. An empty query returns the full
    /// catalog. Recomputed from the full list on every call.
    pub(crate) fn filter(&self, query: &str) -> Vec<Channel> {
        if query.is_empty() {
            return self.channels.clone();
        }

        let query = query.to_lowercase();
        self.channels
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(name: &str) -> Channel {
        Channel {
            name: name.to_string(),
            logo: crate::model::PLACEHOLDER_LOGO.to_string(),
            group: crate::model::DEFAULT_GROUP.to_string(),
            url: format!("http://stream/{}", name),
        }
    }

    fn catalog(names: &[&str]) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.replace_all(names.iter().map(|n| channel(n)).collect());
        catalog
    }

    #[test]
    fn empty_query_returns_full_catalog() {
        let catalog = catalog(&["BBC One", "BBC Two", "CNN"]);
        assert_eq!(catalog.filter(""), catalog.channels());
    }

    #[test]
    fn filter_is_case_insensitive_substring_match() {
        let catalog = catalog(&["BBC One", "CNN", "bbc news"]);

        let filtered = catalog.filter("BbC");
        let names: Vec<&str> = filtered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["BBC One", "bbc news"]);
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let catalog = catalog(&["Zap 3", "Zap 1", "Other", "Zap 2"]);

        let filtered = catalog.filter("zap");
        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].name, "Zap 3");
        assert_eq!(filtered[1].name, "Zap 1");
        assert_eq!(filtered[2].name, "Zap 2");
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let catalog = catalog(&["BBC One", "CNN"]);
        assert!(catalog.filter("sport").is_empty());
    }

    #[test]
    fn replace_all_discards_previous_channels() {
        let mut catalog = catalog(&["Old 1", "Old 2"]);
        catalog.replace_all(vec![channel("New")]);

        assert_eq!(catalog.channels().len(), 1);
        assert_eq!(catalog.channels()[0].name, "New");
    }
}
