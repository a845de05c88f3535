use core::ops::{Add, Sub};

/// 2D point or offset in normalized device coordinates.
///
/// NDC space: `[-1, 1]` on both axes, origin at the center, +Y up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Point on the axis-aligned ellipse around `self` with radii `(rx, ry)` at `angle` radians.
    #[inline]
    pub fn on_ellipse(self, angle: f32, rx: f32, ry: f32) -> Vec2 {
        Vec2::new(self.x + rx * angle.cos(), self.y + ry * angle.sin())
    }

    /// Point on the circle of radius `r` around `self` at `angle` radians.
    #[inline]
    pub fn on_circle(self, angle: f32, r: f32) -> Vec2 {
        self.on_ellipse(angle, r, r)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-6
    }

    #[test]
    fn on_ellipse_at_zero_is_exact() {
        let p = Vec2::new(-0.5, 0.5).on_ellipse(0.0, 0.25, 0.12);
        assert_eq!(p, Vec2::new(-0.25, 0.5));
    }

    #[test]
    fn on_ellipse_uses_ry_for_vertical_axis() {
        let p = Vec2::zero().on_ellipse(FRAC_PI_2, 0.2, 0.12);
        assert!(close(p, Vec2::new(0.0, 0.12)));
    }

    #[test]
    fn on_circle_half_turn() {
        let p = Vec2::new(1.0, 1.0).on_circle(PI, 0.5);
        assert!(close(p, Vec2::new(0.5, 1.0)));
    }

    #[test]
    fn nan_is_not_finite() {
        assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
        assert!(Vec2::new(0.0, -1.0).is_finite());
    }
}
