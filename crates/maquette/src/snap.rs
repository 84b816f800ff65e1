//! Grid snap correction for canvas drag-and-drop.
//!
//! While a widget is dragged on the authoring canvas, its position is
//! pulled onto the nearest grid line when the top-left corner comes within
//! the snap distance of one. Positions are corrected relative to the
//! hovered screen, then applied back in absolute space.

use geom::{Expanse, Rect};

/// A zoom-aware snapping grid.
#[derive(Debug, Clone)]
pub struct SnapGrid {
    cell: Expanse,
    snap_distance: u32,
    zoom: f64,
}

impl SnapGrid {
    /// A grid with the given cell size, the default 10px snap distance and
    /// no zoom.
    pub fn new(cell: Expanse) -> Self {
        Self {
            cell,
            snap_distance: 10,
            zoom: 1.0,
        }
    }

    /// Override the snap distance.
    pub fn with_snap_distance(mut self, distance: u32) -> Self {
        self.snap_distance = distance;
        self
    }

    /// Apply a canvas zoom factor. The grid cell scales with the zoom.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// The effective cell size under the current zoom.
    fn zoomed_cell(&self) -> Expanse {
        Expanse::new(
            (self.cell.w as f64 * self.zoom).round() as u32,
            (self.cell.h as f64 * self.zoom).round() as u32,
        )
    }

    /// Correct a dragged position. Only the top-left corner snaps; the
    /// position is evaluated relative to the screen that contains it.
    /// Positions outside the screen pass through unchanged.
    pub fn correct(&self, pos: Rect, screen: Rect) -> Rect {
        let cell = self.zoomed_cell();
        if cell.w == 0 || cell.h == 0 || !screen.contains_point(pos.tl) {
            return pos;
        }
        let rel = pos.tl.x - screen.tl.x;
        let mut out = pos;
        out.tl.x = snap_axis(pos.tl.x, rel % cell.w, cell.w, self.snap_distance);
        let rel = pos.tl.y - screen.tl.y;
        out.tl.y = snap_axis(pos.tl.y, rel % cell.h, cell.h, self.snap_distance);
        out
    }

    /// Map a zoomed canvas length back to model space. Rounds up; rounding
    /// down makes dragged widgets shrink by a pixel per correction.
    pub fn unzoomed(&self, v: u32) -> u32 {
        (v as f64 / self.zoom).ceil() as u32
    }
}

/// Snap one coordinate onto the grid when its distance past the previous
/// line (or short of the next) is within the snap distance.
fn snap_axis(abs: u32, offset: u32, cell: u32, distance: u32) -> u32 {
    if offset < distance {
        abs.saturating_sub(offset)
    } else if offset > cell - distance {
        abs + (cell - offset)
    } else {
        abs
    }
}
