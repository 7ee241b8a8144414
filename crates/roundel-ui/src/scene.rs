use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::scene::DrawList;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

// ── FrameReport ───────────────────────────────────────────────────────────

/// What a call to [`UiScene::frame`] actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The root was re-measured.
    pub laid_out: bool,
    /// The draw list was rebuilt.
    pub painted: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Drives a retained widget tree through measure, size-change and paint.
///
/// Work is skipped when nothing asked for it: the root is only re-measured
/// when it requested layout or the viewport changed, and the draw list is
/// only rebuilt after a layout pass or a paint request. Between those, the
/// previous draw list stays valid and can be rendered again.
///
/// ```rust,ignore
/// let mut ui = UiScene::new(2.0);
/// let mut avatar = ShapedImage::new(ShapedImageConfig::default(), 2.0).with_image(source);
///
/// let report = ui.frame(&mut avatar, Vec2::new(200.0, 200.0));
/// if report.painted {
///     let pixels = renderer.render(&mut ui.draw_list, viewport)?;
/// }
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent painting [`frame`](Self::frame) call.
    pub draw_list: DrawList,
    scale: f32,
    viewport: Option<Vec2>,
    root_size: Vec2,
}

impl UiScene {
    /// `scale` is the display density (device pixels per dp).
    pub fn new(scale: f32) -> Self {
        Self { draw_list: DrawList::new(), scale, viewport: None, root_size: Vec2::zero() }
    }

    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx {
        LayoutCtx::new(self.scale)
    }

    /// Size realized by the root during the last layout pass.
    #[inline]
    pub fn root_size(&self) -> Vec2 {
        self.root_size
    }

    /// Runs whatever layout and paint work `root` needs for this frame.
    pub fn frame(&mut self, root: &mut dyn Widget, viewport: Vec2) -> FrameReport {
        let requested = root.take_invalidation();
        let mut report = FrameReport::default();

        if requested.layout || self.viewport != Some(viewport) {
            let ctx = self.layout_ctx();
            let size = root.measure(Constraints::loose(viewport), &ctx);
            if size != self.root_size || self.viewport.is_none() {
                log::debug!(
                    "root resized {}x{} -> {}x{}",
                    self.root_size.x, self.root_size.y, size.x, size.y
                );
                root.on_size_changed(self.root_size, size);
                self.root_size = size;
            }
            self.viewport = Some(viewport);
            report.laid_out = true;
        }

        // A size change above can itself queue more work; fold it into this frame.
        let follow_up = root.take_invalidation();

        if report.laid_out || requested.paint || !follow_up.is_none() {
            self.draw_list.clear();
            let mut painter = Painter::new(&mut self.draw_list, self.scale);
            root.paint(&mut painter, Rect::from_size(self.root_size));
            report.painted = true;
        }

        report
    }
}
