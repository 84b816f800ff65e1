use super::{Error, Expanse, Point, Result};

/// A rectangle in absolute pixel space.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// Given a point that falls within this rectangle, rebase the point to
    /// be relative to our origin. If the point falls outside the rect, an
    /// error is returned.
    pub fn rebase(&self, pt: Point) -> Result<Point> {
        if !self.contains_point(pt) {
            return Err(Error::Geometry("co-ords outside rectangle".into()));
        }
        Ok(Point {
            x: pt.x - self.tl.x,
            y: pt.y - self.tl.y,
        })
    }

    /// Does this rectangle contain the point?
    pub fn contains_point(&self, p: Point) -> bool {
        if p.x < self.tl.x || p.x >= self.tl.x + self.w {
            false
        } else {
            !(p.y < self.tl.y || p.y >= self.tl.y + self.h)
        }
    }

    /// Does this rectangle completely enclose the other?
    pub fn contains_rect(&self, other: Self) -> bool {
        self.contains_point(other.tl)
            && self.contains_point(Point {
                x: other.tl.x + other.w.saturating_sub(1),
                y: other.tl.y + other.h.saturating_sub(1),
            })
    }

    /// A safe function for shifting the rectangle by a signed offset, which
    /// won't under- or overflow.
    pub fn shift(&self, x: i32, y: i32) -> Self {
        Self {
            tl: self.tl.shift(x, y),
            w: self.w,
            h: self.h,
        }
    }

    /// Scale position and extent by independent horizontal and vertical
    /// factors, rounding to the nearest pixel.
    pub fn scale(&self, fx: f64, fy: f64) -> Self {
        Self {
            tl: self.tl.scale(fx, fy),
            w: (self.w as f64 * fx).round() as u32,
            h: (self.h as f64 * fy).round() as u32,
        }
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse {
            w: self.w,
            h: self.h,
        }
    }
}
