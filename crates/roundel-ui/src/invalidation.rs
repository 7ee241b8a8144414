use core::ops::{BitOr, BitOrAssign};

/// Work a widget asks its host to schedule after a state change.
///
/// A layout request implies a repaint: the host re-measures, reports the new
/// size, then paints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invalidation {
    pub layout: bool,
    pub paint: bool,
}

impl Invalidation {
    pub const NONE: Self = Self { layout: false, paint: false };
    pub const PAINT: Self = Self { layout: false, paint: true };
    pub const LAYOUT: Self = Self { layout: true, paint: true };

    #[inline]
    pub fn is_none(self) -> bool {
        !self.layout && !self.paint
    }
}

impl BitOr for Invalidation {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self { layout: self.layout || rhs.layout, paint: self.paint || rhs.paint }
    }
}

impl BitOrAssign for Invalidation {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
