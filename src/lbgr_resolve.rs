// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

/// Collision Resolver
///
/// Given a moved item's target cell and the full canvas state, computes a
/// consistent placement for every item that would otherwise overlap:
/// single-cell pushes in priority order, a positional swap as fallback, and
/// atomic failure when no arrangement exists. The caller applies the
/// returned map in full or not at all; items absent from the map are
/// unchanged.

use std::collections::HashMap;

use crate::lbgo_overlap::overlaps;
use crate::lbgt_types::{GridDims, GridPos, GridSize, PlacedItem};

// ============================================================================
// SECTION 1: Public entry point
// ============================================================================

/// Resolve a move of `moving_id` to `target`.
///
/// Returns the map of changed positions (always including the mover), or
/// `None` when no collision-free arrangement exists. `target` is expected to
/// be clamped to the canvas already; every push and swap attempted here is
/// bounds-checked individually.
pub fn resolve(
    moving_id: u32,
    target: GridPos,
    items: &[PlacedItem],
    dims: &GridDims,
) -> Option<HashMap<u32, GridPos>> {
    let mover = match items.iter().find(|i| i.id == moving_id) {
        Some(m) => m,
        None => {
            eprintln!("RESOLVE: ERROR unknown item id {}", moving_id);
            return None;
        }
    };
    let original = mover.pos;

    let mut placed: HashMap<u32, GridPos> = HashMap::new();
    placed.insert(moving_id, target);

    // Items displaced by the mover's new box. Only the mover has moved at
    // this point, so current positions are the caller-supplied ones.
    let blocked: Vec<&PlacedItem> = items
        .iter()
        .filter(|i| i.id != moving_id)
        .filter(|i| overlaps(target, mover.size, i.pos, i.size))
        .collect();

    // Fast path: free move
    if blocked.is_empty() {
        return Some(placed);
    }

    for item in blocked {
        if try_push(item, target, items, dims, &mut placed) {
            continue;
        }
        if try_swap(item, original, moving_id, items, dims, &mut placed) {
            continue;
        }
        return None;
    }

    // Validation pass: the push/swap chain keeps positions consistent, so a
    // remaining overlap means an internal inconsistency (e.g. a
    // size-mismatched swap), never partial output.
    for (i, a) in items.iter().enumerate() {
        let a_pos = recorded_pos(a, &placed);
        for b in &items[i + 1..] {
            let b_pos = recorded_pos(b, &placed);
            if overlaps(a_pos, a.size, b_pos, b.size) {
                eprintln!(
                    "RESOLVE: WARNING post-move overlap between {} and {}, discarding arrangement",
                    a.id, b.id
                );
                return None;
            }
        }
    }

    Some(placed)
}

// ============================================================================
// SECTION 2: Push resolution
// ============================================================================

/// Direction that moves a displaced item out from under the mover's corner
fn away(delta: i32) -> i32 {
    if delta > 0 { -1 } else { 1 }
}

/// Ordered single-cell push candidates for an item displaced by `target`.
///
/// Primary axis is whichever has the larger absolute delta (x only on a
/// strict win, so ties favor y); secondary direction comes from the other
/// axis's sign, repeating the primary direction when that delta is zero.
/// Order: primary orthogonal, primary+secondary diagonal, secondary
/// orthogonal, reversed-primary+secondary diagonal.
fn push_candidates(target: GridPos, item_pos: GridPos) -> [(i32, i32); 4] {
    let dx = target.x - item_pos.x;
    let dy = target.y - item_pos.y;

    if dx.abs() > dy.abs() {
        let p = away(dx);
        let s = if dy == 0 { p } else { away(dy) };
        [(p, 0), (p, s), (0, s), (-p, s)]
    } else {
        let p = away(dy);
        let s = if dx == 0 { p } else { away(dx) };
        [(0, p), (s, p), (s, 0), (s, -p)]
    }
}

/// Try each push candidate in order; record the first legal one
fn try_push(
    item: &PlacedItem,
    target: GridPos,
    items: &[PlacedItem],
    dims: &GridDims,
    placed: &mut HashMap<u32, GridPos>,
) -> bool {
    for (dx, dy) in push_candidates(target, item.pos) {
        let candidate = GridPos { x: item.pos.x + dx, y: item.pos.y + dy };
        if !dims.contains(candidate, item.size) {
            continue;
        }
        if is_free(candidate, item.size, &[item.id], items, placed) {
            placed.insert(item.id, candidate);
            return true;
        }
    }
    false
}

// ============================================================================
// SECTION 3: Swap fallback
// ============================================================================

/// Let the displaced item take the mover's pre-drag position.
///
/// The mover is excluded from the legality scan: in the same-size trade the
/// two boxes cannot collide, and a size-mismatched trade is rejected by the
/// validation pass.
fn try_swap(
    item: &PlacedItem,
    mover_original: GridPos,
    moving_id: u32,
    items: &[PlacedItem],
    dims: &GridDims,
    placed: &mut HashMap<u32, GridPos>,
) -> bool {
    if !dims.contains(mover_original, item.size) {
        return false;
    }
    if is_free(mover_original, item.size, &[item.id, moving_id], items, placed) {
        placed.insert(item.id, mover_original);
        return true;
    }
    false
}

// ============================================================================
// SECTION 4: Shared bookkeeping
// ============================================================================

fn recorded_pos(item: &PlacedItem, placed: &HashMap<u32, GridPos>) -> GridPos {
    placed.get(&item.id).copied().unwrap_or(item.pos)
}

/// True when the box clears every item (at its currently recorded position)
/// whose id is not in `exclude`
fn is_free(
    pos: GridPos,
    size: GridSize,
    exclude: &[u32],
    items: &[PlacedItem],
    placed: &HashMap<u32, GridPos>,
) -> bool {
    items
        .iter()
        .filter(|other| !exclude.contains(&other.id))
        .all(|other| !overlaps(pos, size, recorded_pos(other, placed), other.size))
}

// ============================================================================
// SECTION 5: Tests
// ============================================================================
