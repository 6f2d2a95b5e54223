//! core/osu.rs
//! `.osu` definition file parsing.
//!
//! Only the `[Metadata]` section matters to us: the rest of the file
//! (timing points, hit objects, difficulty settings) is gameplay data this
//! app never touches.
//!
//! The parser is deliberately lenient. Definition files are user-authored
//! text; a formatting quirk degrades the result to a partial or empty map,
//! it never aborts the pipeline.

use std::collections::HashMap;

/// Line scan state. Exactly two states, and one terminal exit: once a
/// foreign `[...]` header is seen while in the section, scanning stops for
/// good. A second `[Metadata]` header later in the file is not re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Searching,
    InSection,
}

/// Extract the `[Metadata]` section of a definition file as a flat
/// key -> value map.
///
/// - line endings may be `\n` or `\r\n`
/// - blank lines and `//` comment lines are skipped
/// - a `Key: Value` line splits on the *first* colon; later colons stay in
///   the value; key and value are trimmed
/// - a line with no colon (or an empty key) is silently ignored
/// - a duplicate key overwrites the earlier value (last wins)
/// - no `[Metadata]` header anywhere yields an empty map, not an error
pub fn parse_metadata(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut scan = Scan::Searching;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        match scan {
            Scan::Searching => {
                if line.starts_with("[Metadata]") {
                    scan = Scan::InSection;
                }
            }
            Scan::InSection => {
                if line.starts_with('[') {
                    break;
                }
                if let Some((key, value)) = line.split_once(':') {
                    let key = key.trim();
                    if !key.is_empty() {
                        map.insert(key.to_string(), value.trim().to_string());
                    }
                }
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_artist_and_title() {
        let text = "[General]\r\nAudioFilename: audio.mp3\r\n\r\n[Metadata]\r\nTitle:  Freedom Dive \r\nArtist: xi\r\n";
        let map = parse_metadata(text);

        assert_eq!(map.get("Title").map(String::as_str), Some("Freedom Dive"));
        assert_eq!(map.get("Artist").map(String::as_str), Some("xi"));
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "[Metadata]\nArtist: a\nTitle: t\nSource: s\n";
        assert_eq!(parse_metadata(text), parse_metadata(text));
    }

    #[test]
    fn capture_stops_at_next_section_header() {
        let text = "[Metadata]\nSource: Kekkai Sensen\n\n[Difficulty]\nHPDrainRate: 5\nOverallDifficulty: 8\n";
        let map = parse_metadata(text);

        assert_eq!(map.get("Source").map(String::as_str), Some("Kekkai Sensen"));
        assert_eq!(map.get("HPDrainRate"), None);
        assert_eq!(map.get("OverallDifficulty"), None);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn second_metadata_header_is_not_reentered() {
        let text = "[Metadata]\nArtist: first\n[Events]\n[Metadata]\nTitle: late\n";
        let map = parse_metadata(text);

        assert_eq!(map.get("Artist").map(String::as_str), Some("first"));
        assert_eq!(map.get("Title"), None);
    }

    #[test]
    fn duplicate_key_last_wins() {
        let text = "[Metadata]\nTitle: First\nArtist: a\nTitle: Second\n";
        let map = parse_metadata(text);

        assert_eq!(map.get("Title").map(String::as_str), Some("Second"));
    }

    #[test]
    fn no_metadata_section_yields_empty_map() {
        let text = "osu file format v14\n\n[General]\nAudioFilename: audio.mp3\n[HitObjects]\n256,192,1000,1,0\n";
        assert!(parse_metadata(text).is_empty());
    }

    #[test]
    fn comments_blanks_and_colonless_lines_are_ignored() {
        let text = "[Metadata]\n// a comment\n\nnot a pair\n: no key\nTitle: ok\n";
        let map = parse_metadata(text);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Title").map(String::as_str), Some("ok"));
    }

    #[test]
    fn value_keeps_colons_after_the_first() {
        let text = "[Metadata]\nTitle: Re:Zero: OP\n";
        let map = parse_metadata(text);

        assert_eq!(map.get("Title").map(String::as_str), Some("Re:Zero: OP"));
    }

    #[test]
    fn empty_input_yields_empty_map() {
        assert!(parse_metadata("").is_empty());
    }
}
