//! Plain-text formatting for edge evidence, node labels and hover text.

use std::fmt::Write;

use crate::stats::{Metric, NodeStats};

/// Marker appended to any truncated string.
pub const ELISION_MARKER: &str = "[...]";

/// Default characters kept per evidence line.
pub const EVIDENCE_WIDTH: usize = 50;

/// Default characters of evidence shown on hover.
pub const HOVER_TEXT_LIMIT: usize = 500;

/// First `limit` characters of `s`, and whether anything was cut.
fn truncate_chars(s: &str, limit: usize) -> (&str, bool) {
    match s.char_indices().nth(limit) {
        Some((byte_idx, _)) => (&s[..byte_idx], true),
        None => (s, false),
    }
}

/// One line per evidence string, each cut to `width` characters with an
/// elision marker when longer.
pub fn format_evidence_text<S: AsRef<str>>(texts: &[S], width: usize) -> String {
    let mut out = String::new();
    for (i, text) in texts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let (head, truncated) = truncate_chars(text.as_ref(), width);
        out.push_str(head);
        if truncated {
            out.push_str(ELISION_MARKER);
        }
    }
    out
}

/// Display label for a character identifier: `kohlhaas_wife` → `KOHLHAAS WIFE`.
pub fn format_node_label(character: &str) -> String {
    character.to_uppercase().replace('_', " ")
}

/// Label line followed by one `METRIC = value` line per stats column.
pub fn format_hover_stats(character: &str, stats: &NodeStats) -> String {
    let mut out = format_node_label(character);
    for metric in Metric::all() {
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n{} = {}",
            metric.name().to_uppercase(),
            stats.display_value(*metric)
        );
    }
    out
}

/// Cap hover text at `limit` characters, marking the cut on its own line.
pub fn truncate_hover_text(text: &str, limit: usize) -> String {
    match truncate_chars(text, limit) {
        (head, true) => format!("{head}\n{ELISION_MARKER}"),
        (whole, false) => whole.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_lines_are_truncated_individually() {
        let long = "x".repeat(60);
        let text = format_evidence_text(&["short", long.as_str()], 50);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "short");
        assert_eq!(lines[1], format!("{}[...]", "x".repeat(50)));
    }

    #[test]
    fn exactly_width_is_not_elided() {
        let exact = "y".repeat(50);
        assert_eq!(format_evidence_text(&[exact.as_str()], 50), exact);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let umlauts = "ä".repeat(55);
        let text = format_evidence_text(&[umlauts.as_str()], 50);
        assert_eq!(text.chars().count(), 50 + ELISION_MARKER.len());
    }

    #[test]
    fn empty_evidence_is_empty_string() {
        let none: [&str; 0] = [];
        assert!(format_evidence_text(&none, 50).is_empty());
    }

    #[test]
    fn node_label_uppercases_and_spaces() {
        assert_eq!(format_node_label("der_junker"), "DER JUNKER");
    }

    #[test]
    fn hover_stats_lists_every_metric() {
        let stats = NodeStats {
            degree: 2,
            ..Default::default()
        };
        let hover = format_hover_stats("lisbeth", &stats);
        assert!(hover.starts_with("LISBETH\n"));
        assert!(hover.contains("DEGREE = 2"));
        assert_eq!(hover.lines().count(), 1 + Metric::all().len());
    }

    #[test]
    fn hover_text_is_capped() {
        let text = "z".repeat(600);
        let capped = truncate_hover_text(&text, 500);
        assert!(capped.ends_with("\n[...]"));
        assert_eq!(truncate_hover_text("brief", 500), "brief");
    }
}
