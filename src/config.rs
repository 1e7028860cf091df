//! Configuration types for parsing and layout.
//!
//! All behaviour is controlled through one immutable [`DeckConfig`], built via
//! its [`DeckConfigBuilder`]. Keeping every knob in one struct makes it
//! trivial to pass the same snapshot to [`crate::parse`] and
//! [`crate::layout`], serialise it for logging, and diff two runs to
//! understand why their decks differ.
//!
//! # Design choice: builder over constructor
//! A nine-field constructor breaks on every new field; the builder lets
//! callers set only what they care about and rely on documented defaults.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Points per millimetre (print units are PostScript points, 1/72 inch).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Configuration snapshot for one parse/layout run.
///
/// Built via [`DeckConfig::builder()`] or [`DeckConfig::default()`]. Read-only
/// for the duration of a call; both components take it by shared reference and
/// never mutate it.
///
/// # Example
/// ```rust
/// use flashdeck::{DeckConfig, DuplexMode};
///
/// let config = DeckConfig::builder()
///     .duplex_mode(DuplexMode::LongEdge)
///     .subject("Biology")
///     .lesson("Unit 3")
///     .back_offset_mm(0.5, -1.0)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// How the printer flips the paper. Default: [`DuplexMode::LongEdge`].
    pub duplex_mode: DuplexMode,

    /// Swap each row's columns on back pages so a card's back lands behind its
    /// front after a long-edge flip. Default: `true`.
    ///
    /// Only consulted for [`DuplexMode::LongEdge`]; short-edge flips already
    /// align columns and simplex has no backs.
    pub mirrored_backs: bool,

    /// Horizontal correction applied to every back-page slot, in points.
    /// Default: 0. Compensates for printer duplex-path drift.
    pub back_offset_x: f32,

    /// Vertical correction applied to every back-page slot, in points.
    /// Default: 0.
    pub back_offset_y: f32,

    /// Emit the four sheet-corner alignment points on every page.
    /// Default: `false`.
    pub corner_markers: bool,

    /// Footer template; `{subject}`, `{lesson}`, and `{index}` are
    /// substituted. Default: `"{subject} • {lesson}"`.
    ///
    /// No footer is rendered when the template is empty or when both
    /// `subject` and `lesson` are empty.
    pub footer_template: String,

    /// Value for the `{subject}` placeholder. Default: empty.
    pub subject: String,

    /// Value for the `{lesson}` placeholder. Default: empty.
    pub lesson: String,

    /// Keep entries whose definition is empty (e.g. a line ending in a bare
    /// colon), and return `Ok` with an empty deck instead of
    /// [`ParseError::NoEntriesFound`]. Default: `false`.
    pub allow_blank_definition: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            duplex_mode: DuplexMode::LongEdge,
            mirrored_backs: true,
            back_offset_x: 0.0,
            back_offset_y: 0.0,
            corner_markers: false,
            footer_template: "{subject} • {lesson}".to_string(),
            subject: String::new(),
            lesson: String::new(),
            allow_blank_definition: false,
        }
    }
}

impl DeckConfig {
    /// Create a new builder for `DeckConfig`.
    pub fn builder() -> DeckConfigBuilder {
        DeckConfigBuilder {
            config: Self::default(),
        }
    }

    /// Render the footer for the card with the given deck-wide index
    /// (0-based; `{index}` substitutes the 1-based number).
    ///
    /// Returns `None` when the template is empty or both `subject` and
    /// `lesson` are empty. With the default template the result is identical
    /// for every slot of the deck.
    pub fn footer_for(&self, card_index: usize) -> Option<String> {
        if self.footer_template.is_empty() {
            return None;
        }
        if self.subject.is_empty() && self.lesson.is_empty() {
            return None;
        }
        let text = self
            .footer_template
            .replace("{subject}", &self.subject)
            .replace("{lesson}", &self.lesson)
            .replace("{index}", &(card_index + 1).to_string())
            .trim()
            .to_string();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Builder for [`DeckConfig`].
#[derive(Debug)]
pub struct DeckConfigBuilder {
    config: DeckConfig,
}

impl DeckConfigBuilder {
    pub fn duplex_mode(mut self, mode: DuplexMode) -> Self {
        self.config.duplex_mode = mode;
        self
    }

    pub fn mirrored_backs(mut self, v: bool) -> Self {
        self.config.mirrored_backs = v;
        self
    }

    /// Back-page offset in points.
    pub fn back_offset(mut self, x: f32, y: f32) -> Self {
        self.config.back_offset_x = x;
        self.config.back_offset_y = y;
        self
    }

    /// Back-page offset in millimetres, the unit printers drift in.
    pub fn back_offset_mm(mut self, x_mm: f32, y_mm: f32) -> Self {
        self.config.back_offset_x = x_mm * PT_PER_MM;
        self.config.back_offset_y = y_mm * PT_PER_MM;
        self
    }

    pub fn corner_markers(mut self, v: bool) -> Self {
        self.config.corner_markers = v;
        self
    }

    pub fn footer_template(mut self, template: impl Into<String>) -> Self {
        self.config.footer_template = template.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.config.subject = subject.into();
        self
    }

    pub fn lesson(mut self, lesson: impl Into<String>) -> Self {
        self.config.lesson = lesson.into();
        self
    }

    pub fn allow_blank_definition(mut self, v: bool) -> Self {
        self.config.allow_blank_definition = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<DeckConfig, ParseError> {
        let c = &self.config;
        if !c.back_offset_x.is_finite() || !c.back_offset_y.is_finite() {
            return Err(ParseError::InvalidConfig(format!(
                "Back-page offsets must be finite, got ({}, {})",
                c.back_offset_x, c.back_offset_y
            )));
        }
        // A whole-sheet offset means the operator typed mm into a pt field
        // (or vice versa); reject rather than produce unprintable geometry.
        if c.back_offset_x.abs() > 72.0 || c.back_offset_y.abs() > 72.0 {
            return Err(ParseError::InvalidConfig(format!(
                "Back-page offset exceeds one inch ({}, {} pt); duplex drift corrections are a few mm at most",
                c.back_offset_x, c.back_offset_y
            )));
        }
        Ok(self.config)
    }
}

// ── Enums ────────────────────────────────────────────────────────────────

/// How the printer turns the paper for the second side.
///
/// The flip axis decides whether back-page columns must be mirrored for a
/// card's back to land behind its front:
///
/// | Mode | Flip axis | Back columns |
/// |------|-----------|--------------|
/// | `Simplex`   | none (one-sided) | no back pages |
/// | `ShortEdge` | top edge         | already aligned |
/// | `LongEdge`  | left edge (default) | swapped per row |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplexMode {
    /// One-sided printing; fronts only.
    Simplex,
    /// Flip over the short edge; back slot *i* is front slot *i*.
    ShortEdge,
    /// Flip over the long edge (default); columns swap per row when
    /// `mirrored_backs` is set.
    #[default]
    LongEdge,
}
