//! Coordinate and geometry types shared across the renderer and UI.
//!
//! Canonical CPU space:
//! - Device pixels (density is applied by the UI layer before geometry is built)
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod rect;
mod transform;
mod vec2;
mod viewport;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
