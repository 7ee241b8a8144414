//! Density-independent lengths.

/// A length in density-independent pixels.
///
/// One dp is one device pixel at density `1.0`. Convert with
/// [`to_px`](Dp::to_px) using the display's density at conversion time.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    #[inline]
    pub const fn new(v: f32) -> Self {
        Self(v)
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    /// Device pixels at `density`. Non-finite results collapse to zero.
    #[inline]
    pub fn to_px(self, density: f32) -> f32 {
        let px = self.0 * density;
        if px.is_finite() { px } else { 0.0 }
    }
}

impl From<f32> for Dp {
    fn from(v: f32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_density() {
        assert_eq!(Dp(20.0).to_px(2.0), 40.0);
        assert_eq!(Dp(10.0).to_px(1.0), 10.0);
        assert_eq!(Dp(10.0).to_px(1.5), 15.0);
    }

    #[test]
    fn non_finite_collapses_to_zero() {
        assert_eq!(Dp(f32::INFINITY).to_px(2.0), 0.0);
        assert_eq!(Dp(1.0).to_px(f32::NAN), 0.0);
    }
}
