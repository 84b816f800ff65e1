//! The box layout engine.
//!
//! A single recursive, depth-first pass assigns absolute geometry to every
//! widget given the available width and each container's flow direction.
//!
//! Accounting rules (one consistent set for both flow modes):
//!
//! - A container reserves `2 × gap.w` of usable width before dividing it
//!   among children. Child x positions start at the container's own x; the
//!   reserved width trails as unused space.
//! - A container contributes `gap.h` of vertical padding exactly once
//!   above and once below its content, in both flow modes.
//! - Row flow divides the inner width evenly with floor division; the
//!   rounding remainder is left after the last child, never redistributed.
//! - The screen root applies no inset of its own and keeps its fixed
//!   viewport extent.
//!
//! The pass is idempotent: re-running it over an already laid-out tree
//! with the same width changes nothing.

use geom::{Expanse, Point};

use crate::{
    error::Result,
    kind::WidgetKind,
    measure::{FontSpec, TextMeasurer},
    widget::{Flow, Widget},
};

/// Recursive geometry assignment over a widget tree.
pub struct LayoutEngine<'a> {
    measurer: &'a dyn TextMeasurer,
    gap: Expanse,
    remove_containers: bool,
}

impl<'a> LayoutEngine<'a> {
    /// Construct an engine with the default 16px gaps.
    pub fn new(measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            measurer,
            gap: Expanse::new(16, 16),
            remove_containers: false,
        }
    }

    /// Override the horizontal/vertical gap.
    pub fn with_gap(mut self, gap: Expanse) -> Self {
        self.gap = gap;
        self
    }

    /// Suppress container insets entirely.
    pub fn with_remove_containers(mut self, remove: bool) -> Self {
        self.remove_containers = remove;
        self
    }

    /// Lay out the whole tree under a screen root. The root's frame is
    /// fixed; children are packed into it.
    pub fn run(&self, screen: &mut Widget) -> Result<()> {
        self.layout(screen)?;
        Ok(())
    }

    /// Lay out `node`'s subtree. The caller must have assigned the node's
    /// x, y and width; this computes the node's height (for containers)
    /// and every descendant's geometry. Returns the packing offset
    /// immediately following the node's content.
    pub fn layout(&self, node: &mut Widget) -> Result<Point> {
        let inset = self.insets(node);
        let origin = Point::new(node.x, node.y + inset.h);
        if node.children.is_empty() {
            if node.is_container() && node.kind != WidgetKind::Screen {
                node.h = 2 * inset.h;
            }
            return Ok(origin);
        }

        let inner_w = node.w.saturating_sub(2 * inset.w);
        let count = node.children.len() as u32;

        let (cursor, content_h) = match node.flow() {
            Flow::Row => {
                let child_w = inner_w.saturating_sub((count - 1) * self.gap.w) / count;
                let mut x = origin.x;
                let mut tallest = 0;
                for child in &mut node.children {
                    child.x = x;
                    child.y = origin.y;
                    child.w = child_w;
                    self.size_leaf(child)?;
                    self.layout(child)?;
                    tallest = tallest.max(child.h);
                    x += child_w + self.gap.w;
                }
                (Point::new(x, origin.y), tallest)
            }
            Flow::Column => {
                let mut y = origin.y;
                let mut total = 0;
                for child in &mut node.children {
                    child.x = origin.x;
                    child.y = y;
                    child.w = inner_w;
                    self.size_leaf(child)?;
                    self.layout(child)?;
                    y += child.h + self.gap.h;
                    total += child.h;
                }
                (
                    Point::new(origin.x, y),
                    total + (count - 1) * self.gap.h,
                )
            }
        };

        if node.is_container() && node.kind != WidgetKind::Screen {
            node.h = content_h + 2 * inset.h;
        }
        Ok(cursor)
    }

    /// Content-driven leaf heights: labels are measured at their assigned
    /// width with their resolved font; every other leaf keeps the height
    /// it already carries.
    fn size_leaf(&self, child: &mut Widget) -> Result<()> {
        if child.kind == WidgetKind::Label && child.children.is_empty() {
            if let Some(text) = child.props.label.as_deref() {
                let font = FontSpec::from_sheet(&child.style);
                child.h = self.measurer.measure_height(text, child.w, &font)?;
            }
        }
        Ok(())
    }

    /// Containers reserve the gap as an inset on each side; the screen
    /// root and non-containers reserve nothing, and `remove_containers`
    /// suppresses insets everywhere.
    fn insets(&self, node: &Widget) -> Expanse {
        if self.remove_containers || node.kind == WidgetKind::Screen || !node.is_container() {
            Expanse::default()
        } else {
            self.gap
        }
    }
}
