use super::Vec2;

/// 2D affine transform.
///
/// Maps a point as `(sx·x + kx·y + tx, ky·x + sy·y + ty)`. Composition with
/// [`then`](Self::then) reads left to right: `a.then(b)` applies `a` first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub ky: f32,
    pub kx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self { sx: 1.0, ky: 0.0, kx: 0.0, sy: 1.0, tx: 0.0, ty: 0.0 }
    }

    /// Uniform scale about the origin.
    #[inline]
    pub const fn scale(s: f32) -> Self {
        Self::from_scale(s, s)
    }

    #[inline]
    pub const fn from_scale(sx: f32, sy: f32) -> Self {
        Self { sx, ky: 0.0, kx: 0.0, sy, tx: 0.0, ty: 0.0 }
    }

    #[inline]
    pub const fn from_translate(offset: Vec2) -> Self {
        Self { sx: 1.0, ky: 0.0, kx: 0.0, sy: 1.0, tx: offset.x, ty: offset.y }
    }

    /// `self` followed by `next`.
    #[must_use]
    pub fn then(self, next: Transform) -> Self {
        Self {
            sx: next.sx * self.sx + next.kx * self.ky,
            kx: next.sx * self.kx + next.kx * self.sy,
            tx: next.sx * self.tx + next.kx * self.ty + next.tx,
            ky: next.ky * self.sx + next.sy * self.ky,
            sy: next.ky * self.kx + next.sy * self.sy,
            ty: next.ky * self.tx + next.sy * self.ty + next.ty,
        }
    }

    /// `self` followed by a translation.
    #[inline]
    #[must_use]
    pub fn then_translate(self, offset: Vec2) -> Self {
        self.then(Self::from_translate(offset))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        [self.sx, self.ky, self.kx, self.sy, self.tx, self.ty].iter().all(|v| v.is_finite())
    }
}
