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

//! Extended M3U playlist parsing.
//!
//! This module converts raw playlist text into an ordered sequence of
//! [`Channel`] records. The format is line-oriented: an `#EXTINF:` metadata
//! line carries `key="value"` attributes and a trailing display name, and is
//! followed by the stream URL it describes. The parser is total; malformed
//! or missing attributes degrade to defaults rather than failing.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::{Channel, DEFAULT_GROUP, PLACEHOLDER_LOGO, UNKNOWN_CHANNEL};

const METADATA_MARKER: &str = "#EXTINF:";
const URL_PREFIX: &str = "http";

/// Recognized metadata attributes and the value substituted when an
/// attribute is absent from the line. Adding a field to a channel starts
/// here.
const ATTRIBUTES: [(&str, &str); 2] = [
    ("tvg-logo", PLACEHOLDER_LOGO),
    ("group-title", DEFAULT_GROUP),
];

static ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z0-9-]+)="([^"]*)""#).unwrap());

/// An in-progress channel assembled from a metadata line, before its stream
/// URL has been observed.
struct Draft {
    name: String,
    logo: String,
    group: String,
}

/// Parses playlist text into channels, preserving document order.
///
/// A channel is produced only once a metadata line and a following URL line
/// have both been observed, in that order. Dangling metadata with no URL
/// yields nothing, as does a URL line with no pending metadata. Blank lines,
/// comments, and unrecognized directives are ignored without disturbing the
/// pending draft. This function never fails; empty input yields an empty
/// vector.
pub(crate) fn parse_m3u(content: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut draft: Option<Draft> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with(METADATA_MARKER) {
            draft = Some(parse_metadata(line));
        } else if line.starts_with(URL_PREFIX) {
            if let Some(pending) = draft.take() {
                // Entries whose name field was present but blank are dropped.
                if !pending.name.is_empty() {
                    channels.push(Channel {
                        name: pending.name,
                        logo: pending.logo,
                        group: pending.group,
                        url: line.to_string(),
                    });
                }
            }
        }
    }

    channels
}

/// Extracts the recognized attributes and the trailing display name from a
/// metadata line, applying defaults where a field is absent.
fn parse_metadata(line: &str) -> Draft {
    let attributes: HashMap<&str, &str> = ATTRIBUTE_RE
        .captures_iter(line)
        .map(|c| {
            let (_, [key, value]) = c.extract();
            (key, value)
        })
        .collect();

    let [logo, group] =
        ATTRIBUTES.map(|(key, default)| attributes.get(key).copied().unwrap_or(default));

    // The display name is the free text after the attribute section,
    // delimited by the first comma on the line. The name field must contain
    // at least one character to count as present; a bare trailing comma is
    // no name at all and falls back to the sentinel.
    let name = match line.split_once(',') {
        Some((_, name)) if !name.is_empty() => name.trim().to_string(),
        _ => UNKNOWN_CHANNEL.to_string(),
    };

    Draft {
        name,
        logo: logo.to_string(),
        group: group.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_channels() {
        assert!(parse_m3u("").is_empty());
    }

    #[test]
    fn header_and_comments_are_ignored() {
        let channels = parse_m3u("#EXTM3U\n# a comment\n\n");
        assert!(channels.is_empty());
    }

    #[test]
    fn full_metadata_line_is_parsed() {
        let input = "#EXTINF:-1 tvg-logo=\"http://l/logo.png\" group-title=\"News\",BBC\nhttp://stream/bbc.m3u8\n";

        let channels = parse_m3u(input);
        assert_eq!(
            channels,
            vec![Channel {
                name: "BBC".to_string(),
                logo: "http://l/logo.png".to_string(),
                group: "News".to_string(),
                url: "http://stream/bbc.m3u8".to_string(),
            }]
        );
    }

    #[test]
    fn missing_attributes_fall_back_to_defaults() {
        let input = "#EXTINF:-1,Sample\nhttp://x/y.m3u8\n";

        let channels = parse_m3u(input);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Sample");
        assert_eq!(channels[0].logo, PLACEHOLDER_LOGO);
        assert_eq!(channels[0].group, DEFAULT_GROUP);
        assert_eq!(channels[0].url, "http://x/y.m3u8");
    }

    #[test]
    fn metadata_without_a_name_field_uses_the_sentinel() {
        let input = "#EXTINF:-1 group-title=\"News\"\nhttp://x/y.ts\n";

        let channels = parse_m3u(input);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, UNKNOWN_CHANNEL);
    }

    #[test]
    fn whitespace_only_name_after_comma_drops_the_entry() {
        let input = "#EXTINF:-1 group-title=\"News\",   \nhttp://x/y.ts\n";
        assert!(parse_m3u(input).is_empty());
    }

    #[test]
    fn bare_trailing_comma_falls_back_to_the_sentinel_name() {
        let channels = parse_m3u("#EXTINF:-1,\nhttp://x/y\n");

        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, UNKNOWN_CHANNEL);
        assert_eq!(channels[0].url, "http://x/y");
    }

    #[test]
    fn dangling_metadata_yields_no_channel() {
        let input = "#EXTINF:-1,First\n#EXTINF:-1,Second\nhttp://stream/second\n#EXTINF:-1,Third\n";

        let channels = parse_m3u(input);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Second");
        assert_eq!(channels[0].url, "http://stream/second");
    }

    #[test]
    fn bare_url_with_no_metadata_is_dropped() {
        let channels = parse_m3u("http://stream/orphan\n#EXTINF:-1,Kept\nhttp://stream/kept\n");

        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Kept");
    }

    #[test]
    fn second_url_line_does_not_reuse_a_consumed_draft() {
        let input = "#EXTINF:-1,Once\nhttp://stream/a\nhttp://stream/b\n";

        let channels = parse_m3u(input);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].url, "http://stream/a");
    }

    #[test]
    fn draft_survives_intervening_directives() {
        let input = "#EXTINF:0,3sat SD\n#EXTVLCOPT:network-caching=1000\nhttp://192.168.178.1/3sat\n";

        let channels = parse_m3u(input);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "3sat SD");
    }

    #[test]
    fn document_order_is_preserved() {
        let input = "\
#EXTM3U
#EXTINF:-1 group-title=\"News\",Alpha
http://stream/alpha
#EXTINF:-1 group-title=\"Movies\",Beta
http://stream/beta
#EXTINF:-1,Gamma
http://stream/gamma
";

        let names: Vec<String> = parse_m3u(input).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn unrecognized_attributes_are_ignored() {
        let input =
            "#EXTINF:-1 tvg-id=\"ZeeCinema.in\" tvg-logo=\"http://l/z.png\",Zee Cinema\nhttp://stream/zee\n";

        let channels = parse_m3u(input);
        assert_eq!(channels[0].name, "Zee Cinema");
        assert_eq!(channels[0].logo, "http://l/z.png");
        assert_eq!(channels[0].group, DEFAULT_GROUP);
    }
}
