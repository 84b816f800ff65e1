use super::{Point, Rect};

/// An `Expanse` is a rectangle that has a width and height but no location.
/// This is useful when we want to deal with `Rect`s abstractly, or when we
/// want to mandate that the location of a `Rect` is (0, 0).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Expanse {
    pub w: u32,
    pub h: u32,
}

impl Default for Expanse {
    /// Constructs a zero-valued size.
    fn default() -> Self {
        Self { w: 0, h: 0 }
    }
}

impl Expanse {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// Return a `Rect` with the same dimensions as the `Expanse`, but a
    /// location at (0, 0).
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::default(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this size can completely enclose the target size in both
    /// dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// The per-axis factors that map this expanse onto `target`. A zero
    /// dimension maps with factor 1.0.
    pub fn factors(&self, target: &Self) -> (f64, f64) {
        let fx = if self.w == 0 {
            1.0
        } else {
            target.w as f64 / self.w as f64
        };
        let fy = if self.h == 0 {
            1.0
        } else {
            target.h as f64 / self.h as f64
        };
        (fx, fy)
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
