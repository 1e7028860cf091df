//! # flashdeck
//!
//! Turn messy term/definition lists into print-ready 8-up flash-card sheets.
//!
//! ## Why this crate?
//!
//! Study-card lists arrive in every shape imaginable — numbered homework
//! sheets, bulleted notes, two-column spreadsheet pastes, noisy OCR output of
//! a photographed vocabulary page. The hard part is not drawing cards, it is
//! turning that heterogeneous, line-oriented text into clean `(term,
//! definition)` pairs and then placing N pairs onto duplex US-Letter sheets so
//! that each card's back lands exactly behind its front after the paper flips.
//!
//! ## Pipeline Overview
//!
//! ```text
//! raw text / rows
//!  │
//!  ├─ 1. Parse    delimiter patterns, continuation lines, orphan diagnostics
//!  ├─ 2. Review   (external) human edits the CardEntry list
//!  ├─ 3. Layout   ceil(N/8) sheets, duplex mirroring, back-page offsets
//!  └─ 4. Render   (external) Page geometry → PDF / print document
//! ```
//!
//! Upload handling, OCR, spreadsheet reading, and rendering to a concrete
//! document format are external collaborators: this crate consumes extracted
//! UTF-8 text (or pre-split rows) and produces the geometric/content model of
//! each page, nothing more.
//!
//! ## Quick Start
//!
//! ```rust
//! use flashdeck::{parse, layout, DeckConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DeckConfig::default();
//!     let deck = parse("1. abate - to become less intense", &config)?;
//!     let pages = layout(&deck.entries, &config);
//!     assert_eq!(pages.len(), 2); // one front, one long-edge back
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `flashdeck` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! flashdeck = { version = "0.3", default-features = false }
//! ```
//!
//! Both [`parse`] and [`layout`] are pure, synchronous functions: no I/O, no
//! shared state, bounded time in their input size. Concurrent calls with
//! different inputs need no synchronisation.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod deck;
pub mod error;
pub mod layout;
pub mod parse;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{DeckConfig, DeckConfigBuilder, DuplexMode};
pub use deck::{CardEntry, OrphanLine, ParsedDeck};
pub use error::ParseError;
pub use layout::{
    layout, CardSlot, Page, PrintOffset, PrintPoint, Side, CARDS_PER_SHEET, GRID_COLS, GRID_ROWS,
};
pub use parse::{entries_from_rows, parse};
