use anyhow::{Context, Result};
use resvg::usvg;
use tiny_skia::PixmapMut;

use super::Drawable;

/// A vector document rendered through `resvg`.
///
/// The intrinsic size is the document's `width`/`height`, rounded up to
/// whole pixels.
pub struct SvgDrawable {
    tree: usvg::Tree,
}

impl SvgDrawable {
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())
            .context("failed to parse svg document")?;
        Ok(Self { tree })
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_data(text.as_bytes())
    }
}

impl Drawable for SvgDrawable {
    fn intrinsic_size(&self) -> (u32, u32) {
        let size = self.tree.size();
        (size.width().ceil() as u32, size.height().ceil() as u32)
    }

    fn draw(&self, target: &mut PixmapMut<'_>) -> Result<()> {
        resvg::render(&self.tree, tiny_skia::Transform::identity(), target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::rasterize;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10">
        <rect x="0" y="0" width="20" height="10" fill="#00ff00"/>
    </svg>"##;

    #[test]
    fn intrinsic_size_comes_from_document() {
        let svg = SvgDrawable::from_text(SQUARE).unwrap();
        assert_eq!(svg.intrinsic_size(), (20, 10));
    }

    #[test]
    fn rasterizes_at_intrinsic_size() {
        let svg = SvgDrawable::from_text(SQUARE).unwrap();
        let raster = rasterize(&svg).unwrap();
        assert_eq!((raster.width(), raster.height()), (20, 10));
        assert_eq!(raster.pixel(10, 5).unwrap().to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(SvgDrawable::from_text("<svg").is_err());
    }
}
