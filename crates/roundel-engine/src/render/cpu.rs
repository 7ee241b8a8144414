use anyhow::{Context, Result};
use tiny_skia::{FillRule, FilterQuality, Mask, Pattern, Pixmap, Shader, SpreadMode};

use crate::coords::{Rect, Transform, Viewport};
use crate::paint::{Color, ImageShader, Paint, TileMode};
use crate::raster::Raster;
use crate::scene::{DrawCmd, DrawItem, DrawList};

use super::path;

/// Rasterizes a [`DrawList`] on the CPU.
///
/// Supported paints:
/// - `Paint::Solid`
/// - `Paint::Image` (any affine transform, all tile modes)
///
/// Items are drawn back-to-front. Items with a zero-area clip rect or
/// degenerate geometry are skipped.
#[derive(Debug, Clone)]
pub struct CpuRenderer {
    anti_alias: bool,
    clear_color: Color,
    filter: FilterQuality,
}

impl Default for CpuRenderer {
    fn default() -> Self {
        Self { anti_alias: true, clear_color: Color::transparent(), filter: FilterQuality::Bilinear }
    }
}

impl CpuRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anti_alias(mut self, on: bool) -> Self {
        self.anti_alias = on;
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Nearest-neighbour sampling for image paints instead of bilinear.
    pub fn nearest_sampling(mut self, on: bool) -> Self {
        self.filter = if on { FilterQuality::Nearest } else { FilterQuality::Bilinear };
        self
    }

    /// Allocates a raster the size of `viewport` and renders `draw_list` into it.
    pub fn render(&self, draw_list: &mut DrawList, viewport: Viewport) -> Result<Raster> {
        let (w, h) = viewport
            .pixel_size()
            .with_context(|| format!("invalid viewport {}x{}", viewport.width, viewport.height))?;
        let mut pixmap = Pixmap::new(w, h).with_context(|| format!("cannot allocate {w}x{h} target"))?;
        self.render_into(draw_list, &mut pixmap);
        Ok(Raster::from_pixmap(pixmap))
    }

    /// Renders `draw_list` on top of `target` after clearing it.
    pub fn render_into(&self, draw_list: &mut DrawList, target: &mut Pixmap) {
        target.fill(to_sk_color(self.clear_color));

        let mut drawn = 0usize;
        for item in draw_list.iter_in_paint_order() {
            if self.draw_item(item, target) {
                drawn += 1;
            }
        }
        log::trace!("CpuRenderer: drew {drawn} items");
    }

    fn draw_item(&self, item: &DrawItem, target: &mut Pixmap) -> bool {
        let (geometry, paint) = match &item.cmd {
            DrawCmd::Rect(cmd) => (path::rect(cmd.rect), &cmd.paint),
            DrawCmd::RoundedRect(cmd) => (path::rounded_rect(cmd.rect, cmd.radii), &cmd.paint),
            DrawCmd::Circle(cmd) => (path::circle(cmd.center, cmd.radius), &cmd.paint),
        };
        let Some(geometry) = geometry else { return false };

        let mask = match item.clip_rect {
            None => None,
            Some(clip) => match self.clip_mask(clip, target) {
                Some(mask) => Some(mask),
                None => return false,
            },
        };

        let Some(shader) = self.shader(paint) else { return false };
        let sk_paint = tiny_skia::Paint { shader, anti_alias: self.anti_alias, ..Default::default() };

        target.fill_path(
            &geometry,
            &sk_paint,
            FillRule::Winding,
            tiny_skia::Transform::identity(),
            mask.as_ref(),
        );
        true
    }

    fn shader<'a>(&self, paint: &'a Paint) -> Option<Shader<'a>> {
        match paint {
            Paint::Solid(c) => Some(Shader::SolidColor(to_sk_color(*c))),
            Paint::Image(image) => self.pattern(image),
        }
    }

    fn pattern<'a>(&self, image: &'a ImageShader) -> Option<Shader<'a>> {
        if !image.transform.is_finite() {
            log::debug!("CpuRenderer: non-finite image transform; item skipped");
            return None;
        }
        Some(Pattern::new(
            image.raster.pixmap().as_ref(),
            spread_mode(image.tile_mode),
            self.filter,
            1.0,
            to_sk_transform(image.transform),
        ))
    }

    fn clip_mask(&self, clip: Rect, target: &Pixmap) -> Option<Mask> {
        let clip_path = path::rect(clip)?;
        let mut mask = Mask::new(target.width(), target.height())?;
        mask.fill_path(&clip_path, FillRule::Winding, false, tiny_skia::Transform::identity());
        Some(mask)
    }
}

fn spread_mode(mode: TileMode) -> SpreadMode {
    match mode {
        TileMode::Clamp => SpreadMode::Pad,
        TileMode::Repeat => SpreadMode::Repeat,
        TileMode::Mirror => SpreadMode::Reflect,
    }
}

fn to_sk_color(c: Color) -> tiny_skia::Color {
    let [r, g, b, a] = c.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn to_sk_transform(t: Transform) -> tiny_skia::Transform {
    tiny_skia::Transform::from_row(t.sx, t.ky, t.kx, t.sy, t.tx, t.ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Vec2};
    use crate::scene::ZIndex;

    fn rgba(raster: &Raster, x: u32, y: u32) -> [u8; 4] {
        raster.pixel(x, y).unwrap().to_rgba8()
    }

    #[test]
    fn solid_circle_leaves_corners_empty() {
        let mut list = DrawList::new();
        list.push_solid_circle(ZIndex(0), Vec2::splat(10.0), 10.0, Color::white());
        let out = CpuRenderer::new().render(&mut list, Viewport::new(20.0, 20.0)).unwrap();

        assert_eq!(rgba(&out, 10, 10), [255, 255, 255, 255]);
        assert_eq!(rgba(&out, 0, 0)[3], 0);
        assert_eq!(rgba(&out, 19, 19)[3], 0);
    }

    #[test]
    fn image_shader_clamps_past_the_edge() {
        // Left pixel red, right pixel green; drawn over a 10x10 area at 1:1.
        let raster = Raster::from_rgba8(2, 1, &[255, 0, 0, 255, 0, 255, 0, 255]).unwrap();
        let mut list = DrawList::new();
        list.push_rect(
            ZIndex(0),
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Paint::Image(ImageShader::new(raster)),
        );
        let out = CpuRenderer::new()
            .nearest_sampling(true)
            .render(&mut list, Viewport::new(10.0, 10.0))
            .unwrap();

        assert_eq!(rgba(&out, 0, 0), [255, 0, 0, 255]);
        assert_eq!(rgba(&out, 8, 0), [0, 255, 0, 255]);
        assert_eq!(rgba(&out, 8, 9), [0, 255, 0, 255]);
    }

    #[test]
    fn image_shader_scale_is_applied() {
        let raster = Raster::from_rgba8(2, 1, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        let shader = ImageShader::new(raster).with_transform(Transform::scale(4.0));
        let mut list = DrawList::new();
        list.push_rect(ZIndex(0), Rect::new(0.0, 0.0, 8.0, 4.0), Paint::Image(shader));
        let out = CpuRenderer::new()
            .nearest_sampling(true)
            .render(&mut list, Viewport::new(8.0, 4.0))
            .unwrap();

        assert_eq!(rgba(&out, 2, 2), [255, 0, 0, 255]);
        assert_eq!(rgba(&out, 6, 2), [0, 0, 255, 255]);
    }

    #[test]
    fn clip_rect_limits_fill() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 5.0, 10.0));
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        list.pop_clip();
        let out = CpuRenderer::new().render(&mut list, Viewport::new(10.0, 10.0)).unwrap();

        assert_eq!(rgba(&out, 2, 5)[3], 255);
        assert_eq!(rgba(&out, 7, 5)[3], 0);
    }

    #[test]
    fn zero_area_clip_skips_the_item() {
        let mut list = DrawList::new();
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.push_clip(Rect::new(20.0, 20.0, 5.0, 5.0));
        list.push_solid_rect(ZIndex(0), Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        list.pop_clip();
        list.pop_clip();

        let renderer = CpuRenderer::new();
        let mut target = Pixmap::new(10, 10).unwrap();
        let item = &list.items()[0];
        assert_eq!(item.clip_rect, Some(Rect::default()));
        assert!(renderer.clip_mask(Rect::default(), &target).is_none());
        assert!(!renderer.draw_item(item, &mut target));
        assert!(target.pixels().iter().all(|p| p.alpha() == 0));
    }

    #[test]
    fn repeat_tiling_wraps_the_raster() {
        let raster = Raster::from_rgba8(2, 1, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
        let shader = ImageShader::new(raster).with_tile_mode(TileMode::Repeat);
        let mut list = DrawList::new();
        list.push_rect(ZIndex(0), Rect::new(0.0, 0.0, 4.0, 1.0), Paint::Image(shader));
        let out = CpuRenderer::new()
            .nearest_sampling(true)
            .render(&mut list, Viewport::new(4.0, 1.0))
            .unwrap();

        assert_eq!(rgba(&out, 2, 0), [255, 0, 0, 255]);
        assert_eq!(rgba(&out, 3, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn rounded_corner_is_cut() {
        let mut list = DrawList::new();
        list.push_rounded_rect(
            ZIndex(0),
            Rect::new(0.0, 0.0, 40.0, 40.0),
            CornerRadii::all(16.0),
            Paint::Solid(Color::white()),
        );
        let out = CpuRenderer::new().render(&mut list, Viewport::new(40.0, 40.0)).unwrap();

        assert_eq!(rgba(&out, 1, 1)[3], 0);
        assert_eq!(rgba(&out, 20, 1)[3], 255);
        assert_eq!(rgba(&out, 20, 20)[3], 255);
    }

    #[test]
    fn clear_color_fills_background() {
        let mut list = DrawList::new();
        let out = CpuRenderer::new()
            .clear_color(Color::black())
            .render(&mut list, Viewport::new(4.0, 4.0))
            .unwrap();
        assert_eq!(rgba(&out, 3, 3), [0, 0, 0, 255]);
    }

    #[test]
    fn invalid_viewport_is_an_error() {
        let mut list = DrawList::new();
        assert!(CpuRenderer::new().render(&mut list, Viewport::new(0.0, 4.0)).is_err());
    }
}
