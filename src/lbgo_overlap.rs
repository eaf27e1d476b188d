// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

/// Overlap Detector
///
/// Half-open axis-aligned rectangle intersection over grid-unit boxes.
/// Every other part of the engine builds on this test. Boxes that merely
/// share an edge do not overlap.

use crate::lbgt_types::{GridPos, GridSize, PlacedItem};

/// Half-open AABB intersection test in grid units
pub fn overlaps(a_pos: GridPos, a_size: GridSize, b_pos: GridPos, b_size: GridSize) -> bool {
    let x_overlap = a_pos.x < b_pos.x + b_size.width && a_pos.x + a_size.width > b_pos.x;
    let y_overlap = a_pos.y < b_pos.y + b_size.height && a_pos.y + a_size.height > b_pos.y;
    x_overlap && y_overlap
}

/// Items overlapping the given box, optionally excluding one id
pub fn find_overlapping<'a>(
    pos: GridPos,
    size: GridSize,
    items: &'a [PlacedItem],
    exclude_id: Option<u32>,
) -> Vec<&'a PlacedItem> {
    items
        .iter()
        .filter(|item| Some(item.id) != exclude_id)
        .filter(|item| overlaps(pos, size, item.pos, item.size))
        .collect()
}
