//! Parser: raw line-oriented text → ordered [`CardEntry`] list.
//!
//! ## Why a single forward pass?
//!
//! Pasted lists, OCR output, and PDF extractions all share one failure shape:
//! a logical entry spans several physical lines because something wrapped it.
//! The "last successful entry" is an explicit accumulator threaded through
//! one forward pass, so continuation lines attach in O(lines) with no global
//! state.
//!
//! Per-line failures never abort the parse. A line that matches no delimiter
//! pattern is a continuation of the open entry in its block, or — with no
//! open entry — an orphan recorded in [`ParsedDeck::orphans`]. Blank lines
//! close the current block.

mod pattern;

use crate::config::DeckConfig;
use crate::deck::{CardEntry, OrphanLine, ParsedDeck};
use crate::error::ParseError;
use pattern::{normalize_ws, split_term_def, strip_list_marker};
use tracing::{debug, trace};

/// Parse raw text into an ordered deck of term/definition entries.
///
/// # Arguments
/// * `raw_text` — UTF-8 text as extracted by the caller (paste, OCR, PDF)
/// * `config`   — parse options; only `allow_blank_definition` applies here
///
/// # Returns
/// `Ok(ParsedDeck)` with entries in first-occurrence order plus orphan-line
/// diagnostics. Malformed lines degrade, they never fail the call.
///
/// # Errors
/// * [`ParseError::EmptyInput`] — no non-blank lines in `raw_text`
/// * [`ParseError::NoEntriesFound`] — text present but nothing matched, and
///   blank definitions are disallowed
pub fn parse(raw_text: &str, config: &DeckConfig) -> Result<ParsedDeck, ParseError> {
    let text = raw_text.replace("\r\n", "\n").replace('\r', "\n");

    let mut entries: Vec<CardEntry> = Vec::new();
    let mut orphans: Vec<OrphanLine> = Vec::new();
    let mut lines_seen = 0usize;
    // Index of the entry still accepting continuation lines in this block.
    let mut open: Option<usize> = None;

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            // Block boundary: nothing may attach across a blank line.
            open = None;
            continue;
        }
        lines_seen += 1;

        let stripped = strip_list_marker(line);
        match split_term_def(stripped) {
            Some(m) if !m.definition.is_empty() || config.allow_blank_definition => {
                trace!(line = idx + 1, delimiter = ?m.delimiter, term = %m.term, "new entry");
                entries.push(CardEntry::new(m.term, m.definition));
                open = Some(entries.len() - 1);
            }
            // No pattern matched, or the match had a blank definition and
            // blanks are disallowed: continuation-or-orphan handling.
            _ => {
                let tail = normalize_ws(stripped);
                match open {
                    Some(i) => {
                        trace!(line = idx + 1, entry = i, "continuation line");
                        let def = &mut entries[i].definition;
                        if def.is_empty() {
                            *def = tail;
                        } else {
                            def.push(' ');
                            def.push_str(&tail);
                        }
                    }
                    None => {
                        trace!(line = idx + 1, "orphan line");
                        orphans.push(OrphanLine {
                            line: idx + 1,
                            text: tail,
                        });
                    }
                }
            }
        }
    }

    if lines_seen == 0 {
        return Err(ParseError::EmptyInput);
    }
    if entries.is_empty() && !config.allow_blank_definition {
        return Err(ParseError::NoEntriesFound { lines: lines_seen });
    }

    debug!(
        entries = entries.len(),
        orphans = orphans.len(),
        lines = lines_seen,
        "parse complete"
    );
    Ok(ParsedDeck {
        entries,
        orphans,
        lines_seen,
    })
}

/// Build entries from already-tabular rows (spreadsheet paste, review grid).
///
/// Applies the same trimming and blank-definition rules as [`parse`]. Rows
/// that are blank on both sides are skipped silently; rows with a definition
/// but no term, or a blank definition when blanks are disallowed, are dropped
/// with a warning — the term invariant is non-negotiable.
///
/// # Errors
/// * [`ParseError::EmptyInput`] — every row was blank on both sides
/// * [`ParseError::NoEntriesFound`] — rows present but none usable, and blank
///   definitions are disallowed
pub fn entries_from_rows<I, S>(rows: I, config: &DeckConfig) -> Result<Vec<CardEntry>, ParseError>
where
    I: IntoIterator<Item = (S, S)>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();
    let mut rows_seen = 0usize;

    for (row, (term, definition)) in rows.into_iter().enumerate() {
        let term = normalize_ws(term.as_ref());
        let definition = normalize_ws(definition.as_ref());
        if term.is_empty() && definition.is_empty() {
            continue;
        }
        rows_seen += 1;

        if term.is_empty() {
            tracing::warn!(row = row + 1, "row has a definition but no term; dropped");
            continue;
        }
        if definition.is_empty() && !config.allow_blank_definition {
            tracing::warn!(row = row + 1, term = %term, "row has no definition; dropped");
            continue;
        }
        entries.push(CardEntry::new(term, definition));
    }

    if rows_seen == 0 {
        return Err(ParseError::EmptyInput);
    }
    if entries.is_empty() && !config.allow_blank_definition {
        return Err(ParseError::NoEntriesFound { lines: rows_seen });
    }
    Ok(entries)
}
