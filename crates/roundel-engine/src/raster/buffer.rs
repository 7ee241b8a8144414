use std::fmt;
use std::rc::Rc;

use anyhow::{Context, Result};
use tiny_skia::{ColorU8, IntSize, Pixmap};

use crate::coords::Vec2;
use crate::paint::Color;

/// Decoded pixel buffer: premultiplied RGBA8, row-major, top-left origin.
///
/// Cloning is cheap and shares the pixels. Equality is identity: two
/// rasters are equal only when they share the same buffer.
#[derive(Clone)]
pub struct Raster(Rc<Pixmap>);

impl Raster {
    /// Transparent raster of `width × height` pixels.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .with_context(|| format!("cannot allocate a {width}x{height} raster"))?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// Wraps an already rendered pixmap without copying.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self(Rc::new(pixmap))
    }

    /// Builds a raster from straight-alpha RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            rgba.len() == expected,
            "expected {expected} bytes for a {width}x{height} raster, got {}",
            rgba.len()
        );

        let size = IntSize::from_wh(width, height)
            .with_context(|| format!("invalid raster size {width}x{height}"))?;

        let mut data = Vec::with_capacity(expected);
        for px in rgba.chunks_exact(4) {
            let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let pixmap = Pixmap::from_vec(data, size).context("pixmap rejected pixel buffer")?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// Builds a raster from a decoded `image` buffer.
    pub fn from_image(img: &::image::RgbaImage) -> Result<Self> {
        Self::from_rgba8(img.width(), img.height(), img.as_raw())
    }

    /// Copies the pixels out as a straight-alpha `image` buffer.
    pub fn to_image(&self) -> ::image::RgbaImage {
        let mut out = ::image::RgbaImage::new(self.width(), self.height());
        for (dst, src) in out.pixels_mut().zip(self.0.pixels()) {
            let c = src.demultiply();
            *dst = ::image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.0
    }

    /// Pixel at `(x, y)` as a straight-alpha color. `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.0.pixel(x, y)?.demultiply();
        Some(Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// `true` when both handles share the same pixel buffer.
    #[inline]
    pub fn ptr_eq(a: &Raster, b: &Raster) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        Raster::ptr_eq(self, other)
    }
}

impl fmt::Debug for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
