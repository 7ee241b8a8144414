use crate::coords::{CornerRadii, Rect};
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, paint: Paint) -> Self {
        Self { rect, radii, paint }
    }
}

impl DrawList {
    /// Records a filled rounded rectangle.
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, paint: Paint) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radii, paint)));
    }

    /// Records a solid rounded rectangle with uniform corner radius.
    #[inline]
    pub fn push_solid_rounded_rect(&mut self, z: ZIndex, rect: Rect, radius: f32, color: Color) {
        self.push_rounded_rect(z, rect, CornerRadii::all(radius), Paint::Solid(color));
    }
}
