use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::paint::Paint;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::invalidation::Invalidation;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A single-child widget that applies padding and an optional rounded background.
///
/// The child is clipped to the padded content box, so nothing it draws can
/// bleed over the padding.
///
/// # Example
/// ```rust,ignore
/// Container::new(avatar)
///     .padding_all(12.0)
///     .background(Color::from_rgba8(24, 24, 32, 255))
///     .corner_radius(8.0)
/// ```
pub struct Container<C: Widget = Element> {
    child: C,
    padding: Edges,
    background: Option<Paint>,
    corner_radius: f32,
}

impl<C: Widget> Container<C> {
    pub fn new(child: C) -> Self {
        Self { child, padding: Edges::default(), background: None, corner_radius: 0.0 }
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = Some(paint.into());
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn child(&self) -> &C {
        &self.child
    }

    pub fn child_mut(&mut self) -> &mut C {
        &mut self.child
    }
}

impl<C: Widget> Widget for Container<C> {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child_size = self.child.measure(constraints.shrink(self.padding), ctx);
        constraints.constrain(child_size + self.padding.total())
    }

    fn on_size_changed(&mut self, old: Vec2, new: Vec2) {
        let inner = |s: Vec2| Vec2::new((s.x - self.padding.h()).max(0.0), (s.y - self.padding.v()).max(0.0));
        let (old, new) = (inner(old), inner(new));
        if old != new {
            self.child.on_size_changed(old, new);
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(background) = &self.background {
            if self.corner_radius > 0.0 {
                painter.fill_rounded_rect(rect, self.corner_radius, background.clone());
            } else {
                painter.fill_rect(rect, background.clone());
            }
        }

        let content = inset_rect(rect, self.padding);
        painter.push_clip(content);
        self.child.paint(painter, content);
        painter.pop_clip();
    }

    fn take_invalidation(&mut self) -> Invalidation {
        self.child.take_invalidation()
    }
}
