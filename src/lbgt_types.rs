// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

/// Canvas Runtime Types
///
/// This module contains the runtime type definitions shared by the grid
/// engine: integer grid-unit geometry operated on by the overlap detector
/// and collision resolver, and the pixel-space metrics consumed by the
/// coordinate converter.

// ============================================================================
// Grid dimension defaults
// ============================================================================

/// Default canvas width in grid units
pub const DEFAULT_COLS: i32 = 6;

/// Default canvas height in grid units
pub const DEFAULT_ROWS: i32 = 6;

// ============================================================================
// Grid-unit geometry
// ============================================================================

/// Top-left corner of an item's bounding box, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// Extent of an item in grid units (each axis >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: i32,
    pub height: i32,
}

/// The minimal shape the collision algorithm operates on.
/// Richer link data (name, icon, URL) stays with the caller.
#[derive(Debug, Clone)]
pub struct PlacedItem {
    pub id: u32,
    pub pos: GridPos,
    pub size: GridSize,
}

/// Canvas dimensions in grid units, supplied as configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub cols: i32,
    pub rows: i32,
}

impl Default for GridDims {
    fn default() -> Self {
        Self { cols: DEFAULT_COLS, rows: DEFAULT_ROWS }
    }
}

impl GridDims {
    /// True when the box at `pos` with `size` lies fully on the canvas
    pub fn contains(&self, pos: GridPos, size: GridSize) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x + size.width <= self.cols
            && pos.y + size.height <= self.rows
    }
}

// ============================================================================
// Pixel-space metrics (rendering side of the converter)
// ============================================================================

/// Cell rendering metrics in pixels; cell width and height may differ
#[derive(Debug, Clone, Copy)]
pub struct CellMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
    pub gap: f64,
    pub padding: f64,
}

/// Pixel coordinate of a grid position's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel extent of a grid-unit span
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelExtent {
    pub width: f64,
    pub height: f64,
}
