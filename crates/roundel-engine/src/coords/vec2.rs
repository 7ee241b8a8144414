use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in device pixels.
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

    /// Both components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// The smaller of the two components.
    #[inline]
    pub fn min_element(self) -> f32 {
        self.x.min(self.y)
    }

    /// The larger of the two components.
    #[inline]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
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

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_element() {
        let v = Vec2::new(200.0, 150.0);
        assert_eq!(v.min_element(), 150.0);
        assert_eq!(v.max_element(), 200.0);
    }

    #[test]
    fn splat_fills_both_axes() {
        assert_eq!(Vec2::splat(3.0), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(4.0, 6.0);
        assert_eq!(a + Vec2::splat(1.0), Vec2::new(5.0, 7.0));
        assert_eq!(a - Vec2::splat(1.0), Vec2::new(3.0, 5.0));
        assert_eq!(a * 0.5, Vec2::new(2.0, 3.0));
        assert_eq!(a / 2.0, Vec2::new(2.0, 3.0));
    }
}
