//! Line-level delimiter patterns, tried in fixed priority order.
//!
//! Each pattern is an explicit matcher evaluated in a documented order, so
//! no pattern falsely captures a line meant for another:
//!
//! 1. Leading list marker (`1.`, `2)`, `-`, `•`, `*`) — a prefix strip, not a
//!    separator; applied before the matchers below.
//! 2. Dash family (`-`, `–`, `—`) with at least one space on each side, so
//!    hyphenated words never split.
//! 3. First colon that is not part of `::` and not digit-flanked (clock
//!    times and URL-ish text stay intact).
//! 4. Vocabulary style: a parenthesized part-of-speech tag right after the
//!    term (`abate (v.) to become less intense`); the tag is discarded.
//!
//! Dash before colon is a deliberate policy for ambiguous lines like
//! `"term: sub - detail"`; the dash wins and the colon stays in the term.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading list marker: `12.`, `3)`, or a bullet, each followed by a space.
static RE_LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:\d+[.)]\s+|[-*•]\s+)").unwrap());

/// Spaced dash-family separator; non-greedy term means first occurrence wins.
static RE_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<term>.+?)\s+[-\u{2013}\u{2014}]\s+(?P<def>.+)$").unwrap());

/// Part-of-speech tag: a short letter run with optional trailing dot,
/// parenthesized immediately after the term.
static RE_POS_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<term>[^()]+?)\s*\(\s*(?P<tag>[A-Za-z]{1,6}\.?)\s*\)\s+(?P<def>.+)$").unwrap()
});

static RE_WS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Which delimiter pattern split a line (surfaced in trace logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    Dash,
    Colon,
    PosTag,
}

/// A successful term/definition split, whitespace already normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineMatch {
    pub term: String,
    pub definition: String,
    pub delimiter: Delimiter,
}

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn normalize_ws(text: &str) -> String {
    RE_WS_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Strip one leading list marker, if present.
pub(crate) fn strip_list_marker(line: &str) -> &str {
    match RE_LIST_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Try the separator patterns in priority order; first match wins.
///
/// Returns `None` when no pattern applies — the caller treats such lines as
/// continuations. Only the colon pattern may yield an empty definition
/// (a line ending in a bare colon); dash and POS-tag require text after the
/// separator.
pub(crate) fn split_term_def(line: &str) -> Option<LineMatch> {
    if let Some(caps) = RE_DASH.captures(line) {
        let term = normalize_ws(&caps["term"]);
        if !term.is_empty() {
            return Some(LineMatch {
                term,
                definition: normalize_ws(&caps["def"]),
                delimiter: Delimiter::Dash,
            });
        }
    }

    if let Some((term, def)) = split_at_colon(line) {
        return Some(LineMatch {
            term,
            definition: def,
            delimiter: Delimiter::Colon,
        });
    }

    if let Some(caps) = RE_POS_TAG.captures(line) {
        let term = normalize_ws(&caps["term"]);
        if !term.is_empty() {
            return Some(LineMatch {
                term,
                definition: normalize_ws(&caps["def"]),
                delimiter: Delimiter::PosTag,
            });
        }
    }

    None
}

/// Find the first separator-eligible colon and split there.
///
/// A colon is skipped when it touches another colon (`::`, URL schemes) or
/// sits between two digits (clock times like `10:30`). The first eligible
/// colon wins; if its left side is empty the line does not match.
fn split_at_colon(line: &str) -> Option<(String, String)> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    for (k, &(i, c)) in chars.iter().enumerate() {
        if c != ':' {
            continue;
        }
        let prev = k.checked_sub(1).map(|j| chars[j].1);
        let next = chars.get(k + 1).map(|&(_, n)| n);
        if prev == Some(':') || next == Some(':') {
            continue;
        }
        if prev.is_some_and(|p| p.is_ascii_digit()) && next.is_some_and(|n| n.is_ascii_digit()) {
            continue;
        }
        let term = normalize_ws(&line[..i]);
        if term.is_empty() {
            return None;
        }
        let def = normalize_ws(&line[i + 1..]);
        return Some((term, def));
    }
    None
}
