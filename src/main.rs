// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

// Grid engine modules
mod lbgt_types;
mod lbgu_units;
mod lbgo_overlap;
mod lbgr_resolve;
mod lbgd_default;

// Configuration module
mod lbgx_canvas;

use lazy_static::lazy_static;

use lbgd_default::{build_default_layout, LinkShape};
use lbgo_overlap::find_overlapping;
use lbgr_resolve::resolve;
use lbgt_types::{GridDims, PixelPoint, PlacedItem};
use lbgu_units::{clamp_to_bounds, grid_span_to_pixel, grid_to_pixel, pixel_to_grid};
use lbgx_canvas::CanvasManager;

// Global canvas configuration (loaded once at startup)
lazy_static! {
    static ref CANVAS: CanvasManager = CanvasManager::load_from_file();
}

/// Render the occupancy grid to stderr, one character per cell
fn print_grid(items: &[PlacedItem], dims: &GridDims) {
    for row in 0..dims.rows {
        let mut line = String::new();
        for col in 0..dims.cols {
            let cell = items.iter().find(|item| {
                col >= item.pos.x
                    && col < item.pos.x + item.size.width
                    && row >= item.pos.y
                    && row < item.pos.y + item.size.height
            });
            match cell {
                Some(item) => line.push_str(&format!("{:2}", item.id)),
                None => line.push_str(" ."),
            }
        }
        eprintln!("  {}", line);
    }
}

/// Apply a resolver result map to the live item set, in full
fn apply(items: &mut [PlacedItem], placed: &std::collections::HashMap<u32, lbgt_types::GridPos>) {
    for item in items.iter_mut() {
        if let Some(&pos) = placed.get(&item.id) {
            item.pos = pos;
        }
    }
}

fn main() {
    let dims = *CANVAS.dims();
    let metrics = *CANVAS.metrics();
    let icons = CANVAS.icon_table();

    // Build the initial arrangement from the configured link list
    let shapes: Vec<LinkShape> = CANVAS
        .links()
        .iter()
        .map(|link| LinkShape { wide: link.wide })
        .collect();
    let slots = build_default_layout(&shapes, &dims);

    eprintln!("LINKBOARD: {} of {} links placed on {}x{} canvas",
        slots.len(), shapes.len(), dims.cols, dims.rows);

    let mut items: Vec<PlacedItem> = slots
        .iter()
        .map(|slot| PlacedItem {
            id: slot.index as u32 + 1,
            pos: slot.pos,
            size: slot.size,
        })
        .collect();

    for slot in &slots {
        let name = &CANVAS.links()[slot.index].name;
        let icon = icons.get(name).map(String::as_str).unwrap_or("-");
        let px = grid_to_pixel(slot.pos, &metrics);
        let extent = grid_span_to_pixel(slot.size, &metrics);
        eprintln!("LINKBOARD:   {:<10} [{}] grid=({},{}) pixel=({:.0},{:.0}) {:.0}x{:.0}",
            name, icon, slot.pos.x, slot.pos.y, px.x, px.y, extent.width, extent.height);
    }

    // Sanity check on the initial arrangement
    for item in &items {
        let hits = find_overlapping(item.pos, item.size, &items, Some(item.id));
        if !hits.is_empty() {
            eprintln!("LINKBOARD: WARNING initial layout overlap at item {}", item.id);
        }
    }

    eprintln!("LINKBOARD: initial layout");
    print_grid(&items, &dims);

    // Replay a scripted drag sequence. Each drag-end arrives as a pixel
    // point, is converted to a candidate cell, clamped, and resolved; the
    // returned map is applied atomically or the move is reported as failed.
    let drags = [
        (1u32, PixelPoint { x: 290.0, y: 10.0 }),
        (5, PixelPoint { x: 0.0, y: 0.0 }),
        (2, PixelPoint { x: 380.0, y: 470.0 }),
    ];

    for (id, drop_point) in drags {
        let size = match items.iter().find(|item| item.id == id) {
            Some(item) => item.size,
            None => continue,
        };
        let target = clamp_to_bounds(pixel_to_grid(drop_point, &metrics), size, &dims);

        match resolve(id, target, &items, &dims) {
            Some(placed) => {
                apply(&mut items, &placed);
                eprintln!("LINKBOARD: moved item {} to ({},{}), {} item(s) rearranged",
                    id, target.x, target.y, placed.len());
            }
            None => {
                println!("LINKBOARD: not enough space for item {} at ({},{})",
                    id, target.x, target.y);
            }
        }
        print_grid(&items, &dims);
    }
}
