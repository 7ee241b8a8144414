use roundel_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::invalidation::Invalidation;
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The core trait every UI component implements.
///
/// The host drives a widget through three hooks, always on the UI thread:
///
/// 1. [`measure`](Widget::measure): propose a size for the given constraints;
/// 2. [`on_size_changed`](Widget::on_size_changed): learn the realized size;
/// 3. [`paint`](Widget::paint): record draw commands.
///
/// Widgets that change state outside those hooks report it through
/// [`take_invalidation`](Widget::take_invalidation).
///
/// ```rust,ignore
/// use roundel_ui::prelude::*;
///
/// pub struct Dot { color: Color, size: f32 }
///
/// impl Widget for Dot {
///     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         constraints.constrain(Vec2::splat(self.size))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_circle(rect.origin + rect.size * 0.5, rect.size.min_element() / 2.0, self.color);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: the parent may call `measure` several times.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Called after layout when the realized size differs from the previous one.
    ///
    /// `old` is `Vec2::zero()` on the first layout.
    fn on_size_changed(&mut self, _old: Vec2, _new: Vec2) {}

    /// Returns and clears pending layout/paint requests.
    fn take_invalidation(&mut self) -> Invalidation {
        Invalidation::NONE
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget. Use it where children of different types share a slot.
pub type Element = Box<dyn Widget>;

impl Widget for Box<dyn Widget> {
    #[inline]
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.as_ref().measure(constraints, ctx)
    }

    #[inline]
    fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.as_ref().paint(painter, rect)
    }

    #[inline]
    fn on_size_changed(&mut self, old: Vec2, new: Vec2) {
        self.as_mut().on_size_changed(old, new)
    }

    #[inline]
    fn take_invalidation(&mut self) -> Invalidation {
        self.as_mut().take_invalidation()
    }
}
