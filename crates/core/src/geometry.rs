//! Axis-aligned rectangles and the two layout predicates.
//!
//! [`collides`] and [`out_of_bounds`] are the only geometric tests used to
//! accept or reject a sheet layout. The shelf packer's output satisfies
//! them by construction; the layout editor evaluates them after every drag
//! and rotate, so both gestures accept exactly the same layouts.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with its origin at the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the point lies inside or on the edge of the rectangle.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.max_x() && py >= self.y && py <= self.max_y()
    }

    /// Returns the same rectangle with width and height swapped, keeping
    /// the origin.
    pub fn transposed(&self) -> Self {
        Self::new(self.x, self.y, self.height, self.width)
    }

    /// Returns the rectangle moved so that it lies within
    /// `[0, sheet_width] x [0, sheet_height]` where possible.
    ///
    /// When the rectangle is larger than the sheet along an axis, that
    /// coordinate is pinned to 0 and the result stays out of bounds; callers
    /// detect that with [`out_of_bounds`].
    ///
    /// A rectangle already in bounds is returned unchanged.
    pub fn clamped(&self, sheet_width: f64, sheet_height: f64) -> Self {
        Self::new(
            clamp_axis(self.x, self.width, sheet_width),
            clamp_axis(self.y, self.height, sheet_height),
            self.width,
            self.height,
        )
    }
}

fn clamp_axis(pos: f64, size: f64, extent: f64) -> f64 {
    if pos + size > extent {
        (extent - size).max(0.0)
    } else {
        pos.max(0.0)
    }
}

/// AABB overlap test on open intervals: rectangles that only share an edge
/// do not collide.
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.x < b.max_x() && a.max_x() > b.x && a.y < b.max_y() && a.max_y() > b.y
}

/// Returns true if any part of the rectangle lies outside the sheet.
pub fn out_of_bounds(rect: &Rect, sheet_width: f64, sheet_height: f64) -> bool {
    rect.x < 0.0 || rect.y < 0.0 || rect.max_x() > sheet_width || rect.max_y() > sheet_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let right = Rect::new(100.0, 0.0, 50.0, 50.0);
        let above = Rect::new(0.0, 100.0, 50.0, 50.0);
        let corner = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(!collides(&a, &right));
        assert!(!collides(&a, &above));
        assert!(!collides(&a, &corner));
    }

    #[test]
    fn test_overlap_collides_symmetrically() {
        let a = Rect::new(160.0, 0.0, 100.0, 100.0);
        let b = Rect::new(150.0, 0.0, 50.0, 50.0);
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));

        let inner = Rect::new(10.0, 10.0, 5.0, 5.0);
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(collides(&inner, &outer));
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(!out_of_bounds(&Rect::new(0.0, 0.0, 200.0, 200.0), 200.0, 200.0));
        assert!(out_of_bounds(&Rect::new(-0.1, 0.0, 10.0, 10.0), 200.0, 200.0));
        assert!(out_of_bounds(&Rect::new(0.0, 195.0, 10.0, 10.0), 200.0, 200.0));
        assert!(out_of_bounds(&Rect::new(191.0, 0.0, 10.0, 10.0), 200.0, 200.0));
    }

    #[test]
    fn test_clamped() {
        let r = Rect::new(160.0, -20.0, 100.0, 100.0).clamped(200.0, 200.0);
        assert_eq!((r.x, r.y), (100.0, 0.0));

        let inside = Rect::new(30.0, 40.0, 10.0, 10.0);
        assert_eq!(inside.clamped(200.0, 200.0), inside);
    }

    #[test]
    fn test_clamped_oversized_stays_out_of_bounds() {
        let tall = Rect::new(50.0, 50.0, 20.0, 300.0).clamped(200.0, 200.0);
        assert_eq!(tall.y, 0.0);
        assert!(out_of_bounds(&tall, 200.0, 200.0));
    }

    #[test]
    fn test_contains_point_closed() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains_point(10.0, 10.0));
        assert!(r.contains_point(30.0, 30.0));
        assert!(!r.contains_point(30.1, 15.0));
    }

    #[test]
    fn test_transposed() {
        let r = Rect::new(5.0, 6.0, 30.0, 10.0).transposed();
        assert_eq!(r, Rect::new(5.0, 6.0, 10.0, 30.0));
    }
}
