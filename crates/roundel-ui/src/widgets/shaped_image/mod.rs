//! An image clipped to a circle or a rounded rectangle.
//!
//! The image is scaled uniformly until it covers the outline, centered, and
//! sampled with clamp tiling so the edge never shows a seam.

mod cache;
mod config;
mod geometry;

pub use config::{ShapeKind, ShapedImageConfig};
pub use geometry::{circle_cover_scale, rect_cover_scale, Geometry};

use std::cell::RefCell;
use std::rc::Rc;

use roundel_engine::coords::{Rect, Vec2};
use roundel_engine::paint::{ImageShader, Paint, TileMode};
use roundel_engine::raster::{rasterize, Drawable};

use crate::constraints::{Constraints, LayoutCtx};
use crate::invalidation::Invalidation;
use crate::painter::Painter;
use crate::units::Dp;
use crate::widget::Widget;

use self::cache::ShaderCache;

/// Displays a [`Drawable`] clipped to a [`ShapeKind`].
///
/// In circle mode the widget always measures square. In rounded-rect mode
/// it takes whatever size layout gives it and rounds the corners by the
/// configured radius.
///
/// # Example
/// ```rust,ignore
/// let avatar = ShapedImage::new(ShapedImageConfig::default(), ui.layout_ctx().scale)
///     .with_image(Rc::new(BitmapDrawable::new(raster)))
///     .with_preferred_size(Vec2::splat(96.0));
/// ```
pub struct ShapedImage {
    shape: ShapeKind,
    corner_radius_px: f32,
    density: f32,
    image: Option<Rc<dyn Drawable>>,
    preferred_size: Option<Vec2>,
    size: Option<Vec2>,
    invalidation: Invalidation,
    shader_cache: RefCell<ShaderCache>,
}

impl ShapedImage {
    /// `density` converts the configured dp radius to device pixels.
    pub fn new(config: ShapedImageConfig, density: f32) -> Self {
        Self {
            shape: config.shape,
            corner_radius_px: config.corner_radius.to_px(density),
            density,
            image: None,
            preferred_size: None,
            size: None,
            invalidation: Invalidation::NONE,
            shader_cache: RefCell::new(ShaderCache::default()),
        }
    }

    pub fn with_image(mut self, image: Rc<dyn Drawable>) -> Self {
        self.set_image(Some(image));
        self
    }

    /// Size to request instead of the image's intrinsic size.
    pub fn with_preferred_size(mut self, size: Vec2) -> Self {
        self.preferred_size = Some(size);
        self
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    #[inline]
    pub fn corner_radius_px(&self) -> f32 {
        self.corner_radius_px
    }

    #[inline]
    pub fn image(&self) -> Option<&Rc<dyn Drawable>> {
        self.image.as_ref()
    }

    /// Outline for the last realized size. `None` before the first layout.
    pub fn geometry(&self) -> Option<Geometry> {
        self.size.map(|size| Geometry::resolve(self.shape, size, self.corner_radius_px))
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Sets the corner radius. Only a changed pixel value requests a repaint.
    pub fn set_corner_radius(&mut self, radius: impl Into<Dp>) {
        let px = radius.into().to_px(self.density);
        if px == self.corner_radius_px {
            return;
        }
        self.corner_radius_px = px;
        self.shader_cache.get_mut().clear();
        self.invalidation |= Invalidation::PAINT;
    }

    /// Sets the shape from its raw attribute value; see [`ShapeKind::from_raw`].
    ///
    /// Any raw value different from the current one requests a re-layout,
    /// even when it normalizes back to the same shape.
    pub fn set_shape_type(&mut self, raw: i32) {
        if raw == self.shape.raw() {
            return;
        }
        let shape = ShapeKind::from_raw(raw);
        if shape.raw() != raw {
            log::debug!("ShapedImage: shape type {raw} is not a shape, using {shape:?}");
        }
        self.shape = shape;
        self.shader_cache.get_mut().clear();
        self.invalidation |= Invalidation::LAYOUT;
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.set_shape_type(shape.raw());
    }

    /// Replaces the image source. The widget only reads from it.
    pub fn set_image(&mut self, image: Option<Rc<dyn Drawable>>) {
        let same = match (&self.image, &image) {
            (Some(a), Some(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
            (None, None) => true,
            _ => false,
        };
        if same {
            return;
        }
        self.image = image;
        self.shader_cache.get_mut().clear();
        // Intrinsic size may differ, so measure again.
        self.invalidation |= Invalidation::LAYOUT;
    }

    /// Number of times the shader has been (re)built. Useful to observe caching.
    pub fn shader_builds(&self) -> u32 {
        self.shader_cache.borrow().builds()
    }

    // ── shader ────────────────────────────────────────────────────────────

    /// Shader in widget-local space, from the cache when nothing changed.
    fn shader(&self, source: &Rc<dyn Drawable>, geometry: Geometry) -> Option<ImageShader> {
        self.shader_cache
            .borrow_mut()
            .get_or_build(source, geometry, self.shape, || build_shader(source.as_ref(), geometry))
    }
}

fn build_shader(source: &dyn Drawable, geometry: Geometry) -> Option<ImageShader> {
    let raster = match rasterize(source) {
        Ok(raster) => raster,
        Err(e) => {
            log::debug!("ShapedImage: image source not drawable: {e:#}");
            return None;
        }
    };

    let transform = geometry.cover_transform(raster.size())?;
    log::trace!(
        "ShapedImage: built shader for {}x{} raster, scale {}",
        raster.width(), raster.height(), transform.sx
    );
    Some(ImageShader::new(raster).with_tile_mode(TileMode::Clamp).with_transform(transform))
}

impl Widget for ShapedImage {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        let natural = self.preferred_size.unwrap_or_else(|| match &self.image {
            Some(image) => {
                let (w, h) = image.intrinsic_size();
                Vec2::new(w as f32, h as f32)
            }
            None => Vec2::zero(),
        });
        let base = constraints.constrain(natural);

        match self.shape {
            ShapeKind::Circle => Vec2::splat(base.min_element()),
            ShapeKind::RoundedRect => base,
        }
    }

    fn on_size_changed(&mut self, _old: Vec2, new: Vec2) {
        self.size = Some(new);
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(source) = &self.image else { return };

        let size = self.size.unwrap_or(rect.size);
        let geometry = Geometry::resolve(self.shape, size, self.corner_radius_px);
        if geometry.is_empty() {
            return;
        }

        let Some(shader) = self.shader(source, geometry) else { return };
        let origin = rect.origin;
        let shader = ImageShader { transform: shader.transform.then_translate(origin), ..shader };

        match geometry {
            Geometry::Circle { radius } => {
                painter.fill_circle(origin + Vec2::splat(radius), radius, Paint::Image(shader));
            }
            Geometry::RoundedRect { bounds, corner_radius } => {
                painter.fill_rounded_rect(bounds.translate(origin), corner_radius, Paint::Image(shader));
            }
        }
    }

    fn take_invalidation(&mut self) -> Invalidation {
        std::mem::take(&mut self.invalidation)
    }
}
