//! Layout engine: ordered entries → paginated front/back [`Page`]s.
//!
//! ## Why fronts and backs are separate pages
//!
//! A duplex printer receives a flat page stream and flips the paper itself,
//! so the engine must emit the back of each sheet as its own page with card
//! positions already rearranged for the flip axis. Getting this wrong is the
//! classic flash-card failure: every back lands behind the wrong front. The
//! three [`crate::config::DuplexMode`]s and the `mirrored_backs` flag cover
//! the flip geometries a desktop printer can produce, and the back-page
//! offset absorbs the duplex-path drift cheap printers add on the second
//! side.
//!
//! Layout is total: any entry slice (including empty) yields a valid page
//! sequence, and the same input always yields the same output.

mod geometry;

pub use geometry::{
    PrintOffset, PrintPoint, CARDS_PER_SHEET, CARD_HEIGHT_PT, CARD_WIDTH_PT, GRID_COLS, GRID_ROWS,
    SHEET_HEIGHT_PT, SHEET_WIDTH_PT,
};

use crate::config::{DeckConfig, DuplexMode};
use crate::deck::CardEntry;
use geometry::{corner_positions, mirrored_position, slot_origin};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which physical side of the sheet a page prints on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
}

/// One card position on a page.
///
/// Empty slots (`entry: None`) still occupy their grid position so the
/// printed sheet keeps its alignment; the renderer draws nothing for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSlot {
    /// Grid position 0–7, row-major (0 top-left).
    pub position: usize,
    /// Bottom-left corner in points, back-page offset already applied.
    pub origin: PrintPoint,
    /// The entry rendered here, or `None` on an under-filled sheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<CardEntry>,
    /// Footer text for this slot, if the deck renders footers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

/// One printable page: exactly [`CARDS_PER_SHEET`] slots plus alignment aids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Position in the emitted page stream (0-based).
    pub index: usize,
    /// Physical sheet this page belongs to (0-based).
    pub sheet: usize,
    /// Front or back of the sheet.
    pub side: Side,
    /// The 8 card slots in grid order.
    pub slots: Vec<CardSlot>,
    /// Uniform slot translation; zero for fronts and for simplex decks.
    pub back_offset: PrintOffset,
    /// Sheet-corner alignment points; empty unless enabled in config.
    pub corner_markers: Vec<PrintPoint>,
}

/// Lay out entries onto paginated 8-up front/back pages.
///
/// For N entries: `ceil(N/8)` sheets, each emitting a front page followed by
/// its back page (omitted for [`DuplexMode::Simplex`]). Zero entries yield
/// zero pages — not an error; layout never fails.
pub fn layout(entries: &[CardEntry], config: &DeckConfig) -> Vec<Page> {
    let sheets = entries.len().div_ceil(CARDS_PER_SHEET);
    let duplex = config.duplex_mode != DuplexMode::Simplex;
    // Column mirroring only corrects a long-edge flip.
    let mirrored = config.duplex_mode == DuplexMode::LongEdge && config.mirrored_backs;
    let back_offset = PrintOffset {
        x: config.back_offset_x,
        y: config.back_offset_y,
    };
    let markers: Vec<PrintPoint> = if config.corner_markers {
        corner_positions().to_vec()
    } else {
        Vec::new()
    };

    let mut pages = Vec::with_capacity(if duplex { sheets * 2 } else { sheets });
    for sheet in 0..sheets {
        let front_slots = (0..CARDS_PER_SHEET)
            .map(|pos| make_slot(entries, config, sheet, pos, pos, PrintOffset::ZERO))
            .collect();
        pages.push(Page {
            index: pages.len(),
            sheet,
            side: Side::Front,
            slots: front_slots,
            back_offset: PrintOffset::ZERO,
            corner_markers: markers.clone(),
        });

        if duplex {
            let back_slots = (0..CARDS_PER_SHEET)
                .map(|pos| {
                    // The entry printed at this physical back position is the
                    // one whose front sits behind it after the flip.
                    let source = if mirrored { mirrored_position(pos) } else { pos };
                    make_slot(entries, config, sheet, pos, source, back_offset)
                })
                .collect();
            pages.push(Page {
                index: pages.len(),
                sheet,
                side: Side::Back,
                slots: back_slots,
                back_offset,
                corner_markers: markers.clone(),
            });
        }
    }

    debug!(
        entries = entries.len(),
        sheets,
        pages = pages.len(),
        duplex_mode = ?config.duplex_mode,
        mirrored,
        "layout complete"
    );
    pages
}

/// Build the slot at physical `position` holding the entry from front-grid
/// `source` (they differ only on mirrored back pages).
fn make_slot(
    entries: &[CardEntry],
    config: &DeckConfig,
    sheet: usize,
    position: usize,
    source: usize,
    offset: PrintOffset,
) -> CardSlot {
    let entry_index = sheet * CARDS_PER_SHEET + source;
    let entry = entries.get(entry_index).cloned();
    let footer = entry
        .is_some()
        .then(|| config.footer_for(entry_index))
        .flatten();
    CardSlot {
        position,
        origin: slot_origin(position, offset),
        entry,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<CardEntry> {
        (0..n)
            .map(|i| CardEntry::new(format!("term{i}"), format!("def{i}")))
            .collect()
    }

    fn term_at(page: &Page, pos: usize) -> Option<&str> {
        page.slots[pos].entry.as_ref().map(|e| e.term.as_str())
    }

    // ── Page counts ──────────────────────────────────────────────────────

    #[test]
    fn zero_entries_zero_pages() {
        assert!(layout(&[], &DeckConfig::default()).is_empty());
    }

    #[test]
    fn page_counts_follow_ceil_n_over_8() {
        let config = DeckConfig::default(); // long-edge duplex
        for (n, sheets) in [(1, 1), (8, 1), (9, 2), (10, 2), (16, 2), (17, 3)] {
            let pages = layout(&entries(n), &config);
            assert_eq!(pages.len(), sheets * 2, "n = {n}");
            let fronts = pages.iter().filter(|p| p.side == Side::Front).count();
            assert_eq!(fronts, sheets, "n = {n}");
        }
    }

    #[test]
    fn simplex_emits_fronts_only() {
        let config = DeckConfig::builder()
            .duplex_mode(DuplexMode::Simplex)
            .build()
            .unwrap();
        let pages = layout(&entries(10), &config);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.side == Side::Front));
    }

    #[test]
    fn every_page_has_eight_slots() {
        let pages = layout(&entries(3), &DeckConfig::default());
        for page in &pages {
            assert_eq!(page.slots.len(), CARDS_PER_SHEET);
            for (pos, slot) in page.slots.iter().enumerate() {
                assert_eq!(slot.position, pos);
            }
        }
    }

    #[test]
    fn pages_come_in_front_back_pairs() {
        let pages = layout(&entries(10), &DeckConfig::default());
        assert_eq!(pages.len(), 4);
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.index, i);
            assert_eq!(page.sheet, i / 2);
            let want = if i % 2 == 0 { Side::Front } else { Side::Back };
            assert_eq!(page.side, want);
        }
    }

    // ── Slot filling ─────────────────────────────────────────────────────

    #[test]
    fn front_slots_fill_in_row_major_order() {
        let pages = layout(&entries(10), &DeckConfig::default());
        let front2 = &pages[2];
        assert_eq!(front2.side, Side::Front);
        assert_eq!(term_at(front2, 0), Some("term8"));
        assert_eq!(term_at(front2, 1), Some("term9"));
        // 10 entries, second sheet: 2 filled, 6 empty.
        let filled = front2.slots.iter().filter(|s| s.entry.is_some()).count();
        assert_eq!(filled, 2);
    }

    #[test]
    fn empty_front_slot_means_empty_back_slot() {
        let pages = layout(&entries(9), &DeckConfig::default());
        let back2 = &pages[3];
        assert_eq!(back2.side, Side::Back);
        // Entry 8 fronts at slot 0; mirrored it backs at slot 1.
        assert_eq!(term_at(back2, 1), Some("term8"));
        let filled = back2.slots.iter().filter(|s| s.entry.is_some()).count();
        assert_eq!(filled, 1);
    }

    // ── Duplex mirroring ─────────────────────────────────────────────────

    #[test]
    fn long_edge_backs_swap_columns_per_row() {
        let pages = layout(&entries(8), &DeckConfig::default());
        let (front, back) = (&pages[0], &pages[1]);
        for row in 0..GRID_ROWS {
            let left = row * GRID_COLS;
            let right = left + 1;
            assert_eq!(term_at(back, left), term_at(front, right), "row {row}");
            assert_eq!(term_at(back, right), term_at(front, left), "row {row}");
        }
    }

    #[test]
    fn short_edge_backs_keep_positions() {
        let config = DeckConfig::builder()
            .duplex_mode(DuplexMode::ShortEdge)
            .build()
            .unwrap();
        let pages = layout(&entries(8), &config);
        let (front, back) = (&pages[0], &pages[1]);
        for pos in 0..CARDS_PER_SHEET {
            assert_eq!(term_at(back, pos), term_at(front, pos));
        }
    }

    #[test]
    fn long_edge_without_mirroring_keeps_positions() {
        let config = DeckConfig::builder().mirrored_backs(false).build().unwrap();
        let pages = layout(&entries(8), &config);
        let (front, back) = (&pages[0], &pages[1]);
        for pos in 0..CARDS_PER_SHEET {
            assert_eq!(term_at(back, pos), term_at(front, pos));
        }
    }

    // ── Offsets and markers ──────────────────────────────────────────────

    #[test]
    fn back_offset_applies_to_back_pages_only() {
        let config = DeckConfig::builder().back_offset(3.0, -2.0).build().unwrap();
        let pages = layout(&entries(8), &config);
        let (front, back) = (&pages[0], &pages[1]);
        assert!(front.back_offset.is_zero());
        assert_eq!(back.back_offset, PrintOffset { x: 3.0, y: -2.0 });
        for pos in 0..CARDS_PER_SHEET {
            assert_eq!(back.slots[pos].origin.x, front.slots[pos].origin.x + 3.0);
            assert_eq!(back.slots[pos].origin.y, front.slots[pos].origin.y - 2.0);
        }
    }

    #[test]
    fn corner_markers_identical_on_every_page() {
        let config = DeckConfig::builder().corner_markers(true).build().unwrap();
        let pages = layout(&entries(9), &config);
        for page in &pages {
            assert_eq!(page.corner_markers.len(), 4);
            assert_eq!(page.corner_markers, pages[0].corner_markers);
        }
    }

    #[test]
    fn corner_markers_absent_by_default() {
        let pages = layout(&entries(1), &DeckConfig::default());
        assert!(pages.iter().all(|p| p.corner_markers.is_empty()));
    }

    // ── Footers ──────────────────────────────────────────────────────────

    #[test]
    fn footer_rendered_on_filled_slots_only() {
        let config = DeckConfig::builder()
            .subject("Biology")
            .lesson("Unit 3")
            .build()
            .unwrap();
        let pages = layout(&entries(3), &config);
        for slot in &pages[0].slots {
            if slot.entry.is_some() {
                assert_eq!(slot.footer.as_deref(), Some("Biology • Unit 3"));
            } else {
                assert_eq!(slot.footer, None);
            }
        }
    }

    #[test]
    fn footer_index_follows_the_entry_across_the_flip() {
        let config = DeckConfig::builder()
            .footer_template("card {index}")
            .subject("Math")
            .build()
            .unwrap();
        let pages = layout(&entries(2), &config);
        let back = &pages[1];
        // Entry 0 backs at slot 1 after mirroring and keeps its own number.
        assert_eq!(back.slots[1].footer.as_deref(), Some("card 1"));
        assert_eq!(back.slots[0].footer.as_deref(), Some("card 2"));
    }

    // ── Purity ───────────────────────────────────────────────────────────

    #[test]
    fn layout_is_idempotent() {
        let config = DeckConfig::builder()
            .subject("Bio")
            .corner_markers(true)
            .back_offset(1.0, 1.0)
            .build()
            .unwrap();
        let deck = entries(11);
        assert_eq!(layout(&deck, &config), layout(&deck, &config));
    }

    #[test]
    fn pages_serialise_to_json() {
        let pages = layout(&entries(1), &DeckConfig::default());
        let json = serde_json::to_string(&pages).unwrap();
        let back: Vec<Page> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pages);
    }
}
