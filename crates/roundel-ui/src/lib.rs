//! Roundel UI: a retained widget layer on top of `roundel-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use roundel_ui::prelude::*;
//!
//! let density = 2.0;
//! let mut ui = UiScene::new(density);
//! let config = ShapedImageConfig::from_props([("shape_type", "1"), ("corner_radius", "20dp")]);
//! let mut avatar = ShapedImage::new(config, density)
//!     .with_image(Rc::new(BitmapDrawable::new(raster)));
//!
//! // Each frame:
//! if ui.frame(&mut avatar, viewport).painted {
//!     let pixels = CpuRenderer::new().render(&mut ui.draw_list, Viewport::new(w, h))?;
//! }
//! ```

pub mod constraints;
pub mod invalidation;
pub mod painter;
pub mod scene;
pub mod units;
pub mod widget;
pub mod widgets;

/// Everything you need to build and extend UI.
pub mod prelude {
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::invalidation::Invalidation;
    pub use crate::painter::Painter;
    pub use crate::scene::{FrameReport, UiScene};
    pub use crate::units::Dp;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        container::Container,
        shaped_image::{Geometry, ShapeKind, ShapedImage, ShapedImageConfig},
    };

    // Re-export the engine primitives everyone needs.
    pub use roundel_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
    pub use roundel_engine::paint::{Color, ImageShader, Paint, TileMode};
    pub use roundel_engine::raster::{BitmapDrawable, ColorDrawable, Drawable, Raster, SvgDrawable};
    pub use roundel_engine::render::CpuRenderer;
}
