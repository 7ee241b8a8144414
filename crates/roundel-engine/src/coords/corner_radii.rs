use super::Vec2;

/// Per-corner radii for a rounded rectangle (device pixels).
///
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    /// Clamps every radius into `[0, min(w, h) / 2]` so adjacent arcs never overlap.
    #[must_use]
    pub fn clamped_to(self, size: Vec2) -> Self {
        let limit = (size.min_element() * 0.5).max(0.0);
        let c = |r: f32| if r.is_finite() { r.clamp(0.0, limit) } else { 0.0 };
        Self {
            top_left: c(self.top_left),
            top_right: c(self.top_right),
            bottom_right: c(self.bottom_right),
            bottom_left: c(self.bottom_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_to_half_short_side() {
        let radii = CornerRadii::all(90.0).clamped_to(Vec2::new(200.0, 150.0));
        assert_eq!(radii, CornerRadii::all(75.0));
    }

    #[test]
    fn clamp_drops_negative_and_nan() {
        let radii = CornerRadii::new(-4.0, f32::NAN, 8.0, 0.0).clamped_to(Vec2::splat(100.0));
        assert_eq!(radii, CornerRadii::new(0.0, 0.0, 8.0, 0.0));
        assert!(!radii.is_zero());
        assert!(CornerRadii::zero().is_zero());
    }
}
