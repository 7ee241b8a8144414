//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, image)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod shader;

pub use color::Color;
pub use shader::{ImageShader, TileMode};

/// Paint source for filling geometry.
///
/// Extend by adding variants while keeping the enum stable for renderer dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Image(ImageShader),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<ImageShader> for Paint {
    fn from(shader: ImageShader) -> Self {
        Paint::Image(shader)
    }
}
