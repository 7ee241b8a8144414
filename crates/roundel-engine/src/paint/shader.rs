use crate::coords::{Transform, Vec2};
use crate::raster::Raster;

/// How an image shader samples outside the raster's bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TileMode {
    /// Extend the edge pixels outward.
    #[default]
    Clamp,
    /// Repeat the raster.
    Repeat,
    /// Mirror-repeat the raster.
    Mirror,
}

/// Fill rule that samples a raster instead of a flat color.
///
/// `transform` maps raster pixel space into the draw list's device space.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageShader {
    pub raster: Raster,
    pub tile_mode: TileMode,
    pub transform: Transform,
}

impl ImageShader {
    /// Clamp-tiled shader with an identity transform.
    pub fn new(raster: Raster) -> Self {
        Self { raster, tile_mode: TileMode::Clamp, transform: Transform::identity() }
    }

    #[must_use]
    pub fn with_tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Raster dimensions after the shader's scale is applied.
    ///
    /// Only meaningful for scale + translate transforms.
    pub fn scaled_size(&self) -> Vec2 {
        Vec2::new(
            self.raster.width() as f32 * self.transform.sx,
            self.raster.height() as f32 * self.transform.sy,
        )
    }
}
