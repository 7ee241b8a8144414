//! Raster images and the sources they are produced from.
//!
//! A [`Raster`] is the only thing the renderer can sample. Every other
//! image source implements [`Drawable`] and is converted with [`rasterize`].

mod drawable;
mod buffer;
mod svg;

pub use drawable::{BitmapDrawable, ColorDrawable, Drawable};
pub use buffer::Raster;
pub use svg::SvgDrawable;

use anyhow::{Context, Result};
use tiny_skia::Pixmap;

/// Converts `source` into a raster.
///
/// Bitmap-backed drawables hand out their own raster (shared, not copied).
/// Anything else is rendered once into a new buffer sized to its
/// intrinsic dimensions.
pub fn rasterize(source: &dyn Drawable) -> Result<Raster> {
    if let Some(raster) = source.as_raster() {
        return Ok(raster.clone());
    }

    let (w, h) = source.intrinsic_size();
    let mut pixmap = Pixmap::new(w, h)
        .with_context(|| format!("drawable has unusable intrinsic size {w}x{h}"))?;
    source.draw(&mut pixmap.as_mut()).context("drawable failed to render")?;

    log::trace!("rasterized drawable at {w}x{h}");
    Ok(Raster::from_pixmap(pixmap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn bitmap_is_reused_without_copy() {
        let raster = Raster::new(8, 4).unwrap();
        let drawable = BitmapDrawable::new(raster.clone());
        let out = rasterize(&drawable).unwrap();
        assert!(Raster::ptr_eq(&out, &raster));
    }

    #[test]
    fn color_drawable_gets_fresh_buffer() {
        let drawable = ColorDrawable::new(Color::from_rgba8(0, 0, 255, 255), 6, 3);
        let out = rasterize(&drawable).unwrap();
        assert_eq!((out.width(), out.height()), (6, 3));
        assert_eq!(out.pixel(5, 2).unwrap().to_rgba8(), [0, 0, 255, 255]);
    }

    #[test]
    fn zero_intrinsic_size_fails() {
        let drawable = ColorDrawable::new(Color::white(), 0, 0);
        assert!(rasterize(&drawable).is_err());
    }
}
