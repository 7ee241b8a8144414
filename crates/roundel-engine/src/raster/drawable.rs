use anyhow::Result;
use tiny_skia::{PixmapMut, PixmapPaint};

use crate::paint::Color;

use super::Raster;

/// Anything that can be drawn as an image: a decoded bitmap, a vector
/// document, a flat color.
///
/// Drawables are shared with widgets through `Rc` and only ever read.
pub trait Drawable {
    /// Natural size in device pixels.
    fn intrinsic_size(&self) -> (u32, u32);

    /// The backing raster when this drawable already is one.
    ///
    /// Returning `Some` lets callers sample the pixels directly instead of
    /// rendering into a fresh buffer.
    fn as_raster(&self) -> Option<&Raster> {
        None
    }

    /// Renders the drawable into `target`, which is sized to [`intrinsic_size`](Self::intrinsic_size).
    fn draw(&self, target: &mut PixmapMut<'_>) -> Result<()>;
}

/// A drawable backed by an already decoded raster.
#[derive(Debug, Clone)]
pub struct BitmapDrawable {
    raster: Raster,
}

impl BitmapDrawable {
    pub fn new(raster: Raster) -> Self {
        Self { raster }
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }
}

impl Drawable for BitmapDrawable {
    fn intrinsic_size(&self) -> (u32, u32) {
        (self.raster.width(), self.raster.height())
    }

    fn as_raster(&self) -> Option<&Raster> {
        Some(&self.raster)
    }

    fn draw(&self, target: &mut PixmapMut<'_>) -> Result<()> {
        target.draw_pixmap(
            0,
            0,
            self.raster.pixmap().as_ref(),
            &PixmapPaint::default(),
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// A flat color with a fixed intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDrawable {
    pub color: Color,
    pub width: u32,
    pub height: u32,
}

impl ColorDrawable {
    pub fn new(color: Color, width: u32, height: u32) -> Self {
        Self { color, width, height }
    }
}

impl Drawable for ColorDrawable {
    fn intrinsic_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&self, target: &mut PixmapMut<'_>) -> Result<()> {
        let [r, g, b, a] = self.color.to_rgba8();
        target.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        Ok(())
    }
}
