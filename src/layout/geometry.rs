//! Sheet geometry: the fixed 2×4 US-Letter grid in print units.
//!
//! Print units are PostScript points (1/72 inch) with the origin at the
//! bottom-left of the sheet, the convention of every page-description
//! renderer this feeds. The grid is a constant of the card size, not a
//! configuration knob: 8 cards on 8.5×11 in is what the physical cutter and
//! the printable margins dictate.

use serde::{Deserialize, Serialize};

/// Cards per physical sheet (2 columns × 4 rows).
pub const CARDS_PER_SHEET: usize = 8;
/// Columns in the card grid.
pub const GRID_COLS: usize = 2;
/// Rows in the card grid.
pub const GRID_ROWS: usize = 4;

/// US Letter width in points.
pub const SHEET_WIDTH_PT: f32 = 612.0;
/// US Letter height in points.
pub const SHEET_HEIGHT_PT: f32 = 792.0;
/// Card width: half the sheet.
pub const CARD_WIDTH_PT: f32 = SHEET_WIDTH_PT / GRID_COLS as f32;
/// Card height: a quarter of the sheet.
pub const CARD_HEIGHT_PT: f32 = SHEET_HEIGHT_PT / GRID_ROWS as f32;

/// Corner-marker inset from each sheet edge.
const CORNER_INSET_PT: f32 = 8.0;

/// A point on the sheet, bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintPoint {
    pub x: f32,
    pub y: f32,
}

/// A uniform (x, y) translation in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintOffset {
    pub x: f32,
    pub y: f32,
}

impl PrintOffset {
    /// The zero offset used on all front pages.
    pub const ZERO: PrintOffset = PrintOffset { x: 0.0, y: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Bottom-left corner of the card at grid position `0..CARDS_PER_SHEET`,
/// row-major: 0 is top-left, 1 top-right, 2 the next row's left, and so on.
pub(crate) fn slot_origin(position: usize, offset: PrintOffset) -> PrintPoint {
    debug_assert!(position < CARDS_PER_SHEET);
    let col = position % GRID_COLS;
    let row = position / GRID_COLS;
    PrintPoint {
        x: col as f32 * CARD_WIDTH_PT + offset.x,
        y: SHEET_HEIGHT_PT - (row + 1) as f32 * CARD_HEIGHT_PT + offset.y,
    }
}

/// The grid position in the same row, opposite column.
///
/// A long-edge flip reflects the sheet about its vertical centre line, so the
/// back of the card at row *r*, column *c* must print at row *r*, column
/// *(1 − c)* to land behind its front.
pub(crate) fn mirrored_position(position: usize) -> usize {
    let col = position % GRID_COLS;
    let row = position / GRID_COLS;
    row * GRID_COLS + (GRID_COLS - 1 - col)
}

/// The four sheet-corner alignment points, identical on every page.
pub(crate) fn corner_positions() -> [PrintPoint; 4] {
    let (w, h) = (SHEET_WIDTH_PT, SHEET_HEIGHT_PT);
    let inset = CORNER_INSET_PT;
    [
        PrintPoint { x: inset, y: inset },
        PrintPoint { x: w - inset, y: inset },
        PrintPoint { x: inset, y: h - inset },
        PrintPoint { x: w - inset, y: h - inset },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_the_sheet_exactly() {
        assert_eq!(GRID_COLS * GRID_ROWS, CARDS_PER_SHEET);
        assert_eq!(CARD_WIDTH_PT * GRID_COLS as f32, SHEET_WIDTH_PT);
        assert_eq!(CARD_HEIGHT_PT * GRID_ROWS as f32, SHEET_HEIGHT_PT);
    }

    #[test]
    fn slot_zero_is_top_left() {
        let p = slot_origin(0, PrintOffset::ZERO);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, SHEET_HEIGHT_PT - CARD_HEIGHT_PT);
    }

    #[test]
    fn slot_seven_is_bottom_right() {
        let p = slot_origin(7, PrintOffset::ZERO);
        assert_eq!(p.x, CARD_WIDTH_PT);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn offsets_translate_uniformly() {
        let off = PrintOffset { x: 3.0, y: -2.0 };
        for pos in 0..CARDS_PER_SHEET {
            let base = slot_origin(pos, PrintOffset::ZERO);
            let shifted = slot_origin(pos, off);
            assert_eq!(shifted.x, base.x + 3.0);
            assert_eq!(shifted.y, base.y - 2.0);
        }
    }

    #[test]
    fn mirroring_swaps_columns_within_rows() {
        assert_eq!(mirrored_position(0), 1);
        assert_eq!(mirrored_position(1), 0);
        assert_eq!(mirrored_position(6), 7);
        assert_eq!(mirrored_position(7), 6);
    }

    #[test]
    fn mirroring_is_an_involution() {
        for pos in 0..CARDS_PER_SHEET {
            assert_eq!(mirrored_position(mirrored_position(pos)), pos);
        }
    }

    #[test]
    fn corner_markers_sit_inside_the_sheet() {
        for p in corner_positions() {
            assert!(p.x > 0.0 && p.x < SHEET_WIDTH_PT);
            assert!(p.y > 0.0 && p.y < SHEET_HEIGHT_PT);
        }
    }
}
