// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

/// Default Layout Builder
///
/// Converts an ordered list of link shapes into an initial non-overlapping
/// arrangement by greedy left-to-right, top-to-bottom row fill. Runs once at
/// template-initialization time; the caller zips the returned indices back
/// onto its richer per-link metadata.

use crate::lbgt_types::{GridDims, GridPos, GridSize};

/// Width of a wide link tile in grid units
pub const WIDE_WIDTH: i32 = 3;

/// Width of a regular link tile in grid units
pub const NARROW_WIDTH: i32 = 2;

/// Minimal layout-relevant shape of a link entry
#[derive(Debug, Clone, Copy)]
pub struct LinkShape {
    pub wide: bool,
}

/// One placement produced by the builder; `index` refers back to the input
#[derive(Debug, Clone)]
pub struct DefaultSlot {
    pub index: usize,
    pub pos: GridPos,
    pub size: GridSize,
}

/// Greedy row fill. Each entry is one row tall and 2 or 3 columns wide; the
/// cursor wraps to the next row when an entry no longer fits. Entries past
/// the last row are dropped (the canvas is full), never an error.
pub fn build_default_layout(entries: &[LinkShape], dims: &GridDims) -> Vec<DefaultSlot> {
    let mut slots = Vec::with_capacity(entries.len());
    let mut col = 0;
    let mut row = 0;

    for (index, entry) in entries.iter().enumerate() {
        let width = if entry.wide { WIDE_WIDTH } else { NARROW_WIDTH };

        if col + width > dims.cols {
            col = 0;
            row += 1;
        }
        if row >= dims.rows {
            println!(
                "LAYOUT: WARNING canvas full, dropping {} trailing entries",
                entries.len() - index
            );
            break;
        }

        slots.push(DefaultSlot {
            index,
            pos: GridPos { x: col, y: row },
            size: GridSize { width, height: 1 },
        });
        col += width;
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lbgo_overlap::overlaps;

    fn shapes(flags: &[bool]) -> Vec<LinkShape> {
        flags.iter().map(|&wide| LinkShape { wide }).collect()
    }

    #[test]
    fn test_row_fill_and_wrap() {
        // Three narrow entries fill row 0 exactly (2+2+2 = 6); the wide one
        // wraps to row 1.
        let slots = build_default_layout(&shapes(&[false, false, false, true]), &GridDims::default());
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0].pos, GridPos { x: 0, y: 0 });
        assert_eq!(slots[1].pos, GridPos { x: 2, y: 0 });
        assert_eq!(slots[2].pos, GridPos { x: 4, y: 0 });
        assert_eq!(slots[3].pos, GridPos { x: 0, y: 1 });
        assert_eq!(slots[3].size, GridSize { width: 3, height: 1 });
    }

    #[test]
    fn test_wide_wraps_midrow() {
        // wide(3) + narrow(2) leaves one column; the next wide entry wraps.
        let slots = build_default_layout(&shapes(&[true, false, true]), &GridDims::default());
        assert_eq!(slots[0].pos, GridPos { x: 0, y: 0 });
        assert_eq!(slots[1].pos, GridPos { x: 3, y: 0 });
        assert_eq!(slots[2].pos, GridPos { x: 0, y: 1 });
    }

    #[test]
    fn test_placements_never_overlap() {
        let flags: Vec<bool> = (0..12).map(|i| i % 3 == 0).collect();
        let dims = GridDims::default();
        let slots = build_default_layout(&shapes(&flags), &dims);
        for (i, a) in slots.iter().enumerate() {
            assert!(dims.contains(a.pos, a.size));
            for b in &slots[i + 1..] {
                assert!(!overlaps(a.pos, a.size, b.pos, b.size));
            }
        }
    }

    #[test]
    fn test_overflow_truncated() {
        // Two narrow entries per row on a 5-wide canvas; 2 rows hold 4.
        let dims = GridDims { cols: 5, rows: 2 };
        let slots = build_default_layout(&shapes(&[false; 7]), &dims);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[3].pos, GridPos { x: 2, y: 1 });
    }

    #[test]
    fn test_indices_follow_input_order() {
        let slots = build_default_layout(&shapes(&[true, true, false]), &GridDims::default());
        let indices: Vec<usize> = slots.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
