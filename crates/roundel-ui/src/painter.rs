use roundel_engine::coords::{CornerRadii, Rect, Vec2};
use roundel_engine::paint::Paint;
use roundel_engine::scene::{DrawList, ZIndex};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. Every call records exactly one command;
/// z grows with each call so later calls draw on top.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    /// Display density for this frame (device pixels per dp).
    pub scale: f32,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, scale: f32) -> Self {
        Self { draw_list, scale, z: 0 }
    }

    /// Returns a [`LayoutCtx`] for re-measuring children during paint.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx {
        LayoutCtx::new(self.scale)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Filled axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint.into());
    }

    /// Filled rounded rectangle. Pass `radius = 0.0` for sharp corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius), paint.into());
    }

    /// Filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, paint.into());
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
