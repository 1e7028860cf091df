//! Deck data model: the parser's output and the layout engine's input.

use serde::{Deserialize, Serialize};

/// One study card: a front term and a back definition.
///
/// Invariant: `term` is non-empty after trimming; `definition` may be empty
/// only when the config's `allow_blank_definition` permitted it at parse
/// time. Entries are immutable once created — a review step edits by
/// replacing an entry at its position, not by mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Front-of-card text.
    pub term: String,
    /// Back-of-card text. May be empty when blanks are allowed.
    pub definition: String,
    /// Optional extra line shown below the footer on this card only
    /// (set by a review step, never by the parser).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

impl CardEntry {
    /// Create an entry with no subtext.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            subtext: None,
        }
    }

    /// Attach a per-card subtext line.
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }
}

/// A continuation-pattern line that had no preceding entry to attach to.
///
/// Collected as a diagnostic, never raised as an error: the caller can show
/// a warning without losing the entries that did parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanLine {
    /// 1-based physical line number in the raw input.
    pub line: usize,
    /// The line's whitespace-normalised text.
    pub text: String,
}

/// Successful parse result: ordered entries plus non-fatal diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDeck {
    /// Entries in first-occurrence input order.
    pub entries: Vec<CardEntry>,
    /// Lines that could not be attached anywhere.
    pub orphans: Vec<OrphanLine>,
    /// Count of non-blank input lines examined.
    pub lines_seen: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtext_round_trips_through_json() {
        let e = CardEntry::new("abate", "to become less intense").with_subtext("ch. 4");
        let json = serde_json::to_string(&e).unwrap();
        let back: CardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn subtext_omitted_from_json_when_none() {
        let e = CardEntry::new("abate", "to become less intense");
        let json = serde_json::to_string(&e).unwrap();
        assert!(!json.contains("subtext"), "got: {json}");
    }
}
