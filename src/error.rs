//! Error types for the flashdeck library.
//!
//! The parser distinguishes two levels of failure:
//!
//! * [`ParseError`] — **Recoverable, whole-input**: the text as a whole could
//!   not yield a deck (nothing supplied, or nothing matched). Returned as
//!   `Err(ParseError)` from [`crate::parse`] so a caller can re-prompt for
//!   input. Never fatal to the process.
//!
//! * Per-line problems are **not errors at all**. A malformed line degrades to
//!   continuation-or-orphan handling and surfaces as an
//!   [`crate::deck::OrphanLine`] diagnostic inside the successful result, so
//!   callers can show warnings without losing the entries that did parse.
//!
//! Layout never fails: any entry sequence (including empty) produces a valid,
//! possibly empty, page sequence, so there is no layout error type.

use thiserror::Error;

/// All errors returned by the flashdeck library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The raw text contained no non-blank lines.
    #[error("No usable text supplied: input is empty or all-whitespace.\nPaste a list, one term per line.")]
    EmptyInput,

    /// Text was present, but no line matched a recognised term/definition
    /// pattern and blank definitions are disallowed by the config.
    #[error(
        "No term/definition pairs found in {lines} non-blank line(s).\n\
         Expected separators like 'term - definition' or 'term: definition'."
    )]
    NoEntriesFound { lines: usize },

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_display() {
        let msg = ParseError::EmptyInput.to_string();
        assert!(msg.contains("empty"), "got: {msg}");
    }

    #[test]
    fn no_entries_display_includes_line_count() {
        let e = ParseError::NoEntriesFound { lines: 7 };
        let msg = e.to_string();
        assert!(msg.contains('7'), "got: {msg}");
        assert!(msg.contains("term - definition"), "got: {msg}");
    }

    #[test]
    fn invalid_config_display() {
        let e = ParseError::InvalidConfig("offset must be finite".into());
        assert!(e.to_string().contains("offset must be finite"));
    }
}
