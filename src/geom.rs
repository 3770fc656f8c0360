//! Axis-aligned rectangle math
//!
//! Shared by the radial layout, the animator, and node hit testing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left position + size), y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Shrink the rect by `inset` on every edge. Collapses to a point at the
    /// center rather than inverting when the inset exceeds the half-size.
    pub fn reduced(&self, inset: f32) -> Self {
        let shrink = (inset * 2.0).min(self.size.x).min(self.size.y);
        Self {
            pos: self.pos + Vec2::splat(shrink / 2.0),
            size: self.size - Vec2::splat(shrink),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.x < self.pos.x + self.size.x
            && point.y >= self.pos.y
            && point.y < self.pos.y + self.size.y
    }

    /// Move the rect so it lies fully inside `[0, outer]` on both axes.
    /// A rect larger than `outer` pins to the origin.
    pub fn clamped_inside(&self, outer: Vec2) -> Self {
        let max_pos = (outer - self.size).max(Vec2::ZERO);
        Self {
            pos: self.pos.clamp(Vec2::ZERO, max_pos),
            size: self.size,
        }
    }

    /// Component-wise linear interpolation between two rects
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        Self {
            pos: a.pos.lerp(b.pos, t),
            size: a.size.lerp(b.size, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_roundtrip() {
        let r = Rect::centered(Vec2::new(50.0, 60.0), Vec2::new(20.0, 10.0));
        assert_eq!(r.pos, Vec2::new(40.0, 55.0));
        assert_eq!(r.center(), Vec2::new(50.0, 60.0));
    }

    #[test]
    fn test_reduced_keeps_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 100.0);
        let inner = r.reduced(10.0);
        assert_eq!(inner.center(), r.center());
        assert_eq!(inner.size, Vec2::splat(80.0));
    }

    #[test]
    fn test_reduced_never_inverts() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = r.reduced(20.0);
        assert_eq!(inner.size, Vec2::ZERO);
        assert_eq!(inner.center(), r.center());
    }

    #[test]
    fn test_contains_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(9.9, 9.9)));
        assert!(!r.contains(Vec2::new(10.0, 5.0)));
        assert!(!r.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_clamped_inside() {
        let outer = Vec2::new(620.0, 620.0);
        let r = Rect::new(600.0, -30.0, 80.0, 50.0);
        let clamped = r.clamped_inside(outer);
        assert_eq!(clamped.pos, Vec2::new(540.0, 0.0));
        assert_eq!(clamped.size, r.size);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 50.0, 20.0, 40.0);
        assert_eq!(Rect::lerp(a, b, 0.0), a);
        assert_eq!(Rect::lerp(a, b, 1.0), b);
        let mid = Rect::lerp(a, b, 0.5);
        assert_eq!(mid.pos, Vec2::new(50.0, 25.0));
        assert_eq!(mid.size, Vec2::new(15.0, 25.0));
    }
}
