// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Scale Invariant

/// Grid Coordinate Converter
///
/// Pure functions mapping between integer grid units and pixel space for
/// rendering and hit-testing. Out-of-range inputs are clamped or rounded,
/// never rejected, so a drag in progress is never interrupted by a
/// validation error.

use crate::lbgt_types::{CellMetrics, GridDims, GridPos, GridSize, PixelExtent, PixelPoint};

/// Pixel position of a grid cell's top-left corner:
/// `padding + coord * (cell + gap)` on each axis independently
pub fn grid_to_pixel(pos: GridPos, metrics: &CellMetrics) -> PixelPoint {
    PixelPoint {
        x: metrics.padding + pos.x as f64 * (metrics.cell_width + metrics.gap),
        y: metrics.padding + pos.y as f64 * (metrics.cell_height + metrics.gap),
    }
}

/// Pixel extent of a grid-unit span: `units * cell + (units - 1) * gap`.
/// Interior gaps are part of the span; the trailing gap is not.
pub fn grid_span_to_pixel(size: GridSize, metrics: &CellMetrics) -> PixelExtent {
    PixelExtent {
        width: size.width as f64 * metrics.cell_width
            + (size.width - 1) as f64 * metrics.gap,
        height: size.height as f64 * metrics.cell_height
            + (size.height - 1) as f64 * metrics.gap,
    }
}

/// Inverse of `grid_to_pixel`, rounding to the nearest grid unit
pub fn pixel_to_grid(point: PixelPoint, metrics: &CellMetrics) -> GridPos {
    GridPos {
        x: ((point.x - metrics.padding) / (metrics.cell_width + metrics.gap)).round() as i32,
        y: ((point.y - metrics.padding) / (metrics.cell_height + metrics.gap)).round() as i32,
    }
}

/// Clamp a position so the box at `pos` with `size` lies on the canvas.
/// Requires `size` itself to fit the canvas.
pub fn clamp_to_bounds(pos: GridPos, size: GridSize, dims: &GridDims) -> GridPos {
    GridPos {
        x: pos.x.min(dims.cols - size.width).max(0),
        y: pos.y.min(dims.rows - size.height).max(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> CellMetrics {
        CellMetrics { cell_width: 84.0, cell_height: 60.0, gap: 8.0, padding: 12.0 }
    }

    #[test]
    fn test_grid_to_pixel_origin() {
        let p = grid_to_pixel(GridPos { x: 0, y: 0 }, &metrics());
        assert_eq!(p, PixelPoint { x: 12.0, y: 12.0 });
    }

    #[test]
    fn test_grid_to_pixel_axes_independent() {
        let p = grid_to_pixel(GridPos { x: 2, y: 3 }, &metrics());
        assert_eq!(p.x, 12.0 + 2.0 * 92.0);
        assert_eq!(p.y, 12.0 + 3.0 * 68.0);
    }

    #[test]
    fn test_span_excludes_trailing_gap() {
        let e = grid_span_to_pixel(GridSize { width: 3, height: 1 }, &metrics());
        assert_eq!(e.width, 3.0 * 84.0 + 2.0 * 8.0);
        assert_eq!(e.height, 60.0);
    }

    #[test]
    fn test_pixel_round_trip() {
        let dims = GridDims::default();
        let size = GridSize { width: 1, height: 1 };
        for x in 0..dims.cols {
            for y in 0..dims.rows {
                let pos = GridPos { x, y };
                let back = pixel_to_grid(grid_to_pixel(pos, &metrics()), &metrics());
                assert_eq!(back, clamp_to_bounds(pos, size, &dims));
            }
        }
    }

    #[test]
    fn test_pixel_to_grid_rounds_to_nearest() {
        // 40px into a 92px pitch rounds to cell 0; 50px rounds to cell 1
        let m = metrics();
        let near = pixel_to_grid(PixelPoint { x: 12.0 + 40.0, y: 12.0 }, &m);
        let far = pixel_to_grid(PixelPoint { x: 12.0 + 50.0, y: 12.0 }, &m);
        assert_eq!(near.x, 0);
        assert_eq!(far.x, 1);
    }

    #[test]
    fn test_clamp_negative_and_overflow() {
        let dims = GridDims::default();
        let size = GridSize { width: 2, height: 1 };
        let low = clamp_to_bounds(GridPos { x: -3, y: -1 }, size, &dims);
        assert_eq!(low, GridPos { x: 0, y: 0 });
        let high = clamp_to_bounds(GridPos { x: 9, y: 9 }, size, &dims);
        assert_eq!(high, GridPos { x: 4, y: 5 });
    }
}
