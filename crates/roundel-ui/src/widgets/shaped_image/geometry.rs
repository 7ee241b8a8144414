use roundel_engine::coords::{Rect, Transform, Vec2};

use super::ShapeKind;

/// Resolved outline in widget-local device pixels (origin at the widget's top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { radius: f32 },
    RoundedRect { bounds: Rect, corner_radius: f32 },
}

impl Geometry {
    /// Outline for a widget of `size`. Circles take the largest square that fits.
    pub fn resolve(shape: ShapeKind, size: Vec2, corner_radius: f32) -> Self {
        match shape {
            ShapeKind::Circle => Geometry::Circle { radius: size.min_element().max(0.0) / 2.0 },
            ShapeKind::RoundedRect => Geometry::RoundedRect { bounds: Rect::from_size(size), corner_radius },
        }
    }

    /// Extent the image has to cover.
    pub fn extent(self) -> Vec2 {
        match self {
            Geometry::Circle { radius } => Vec2::splat(radius * 2.0),
            Geometry::RoundedRect { bounds, .. } => bounds.size,
        }
    }

    pub fn is_empty(self) -> bool {
        let extent = self.extent();
        !(extent.x > 0.0 && extent.y > 0.0)
    }

    /// Uniform scale that makes a raster of `raster` size cover this outline.
    pub fn cover_scale(self, raster: Vec2) -> Option<f32> {
        let scale = match self {
            Geometry::Circle { radius } => circle_cover_scale(radius * 2.0, raster),
            Geometry::RoundedRect { bounds, .. } => rect_cover_scale(bounds.size, raster),
        };
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }

    /// Raster-to-widget transform: uniform cover scale, centered on the outline.
    ///
    /// Both shapes center the scaled raster, so overflow is cropped evenly
    /// from opposite edges. A rounded rect crops left/right or top/bottom
    /// symmetrically rather than anchoring the raster at the top-left corner.
    pub fn cover_transform(self, raster: Vec2) -> Option<Transform> {
        let scale = self.cover_scale(raster)?;
        let overflow = self.extent() - raster * scale;
        Some(Transform::scale(scale).then_translate(overflow * 0.5))
    }
}

/// `side / min(raster_w, raster_h)`: the shorter raster axis spans the diameter.
#[inline]
pub fn circle_cover_scale(side: f32, raster: Vec2) -> f32 {
    side / raster.min_element()
}

/// `max(w / raster_w, h / raster_h)`: the scaled raster covers both axes.
#[inline]
pub fn rect_cover_scale(size: Vec2, raster: Vec2) -> f32 {
    (size.x / raster.x).max(size.y / raster.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_geometry_uses_short_side() {
        let g = Geometry::resolve(ShapeKind::Circle, Vec2::new(200.0, 150.0), 40.0);
        assert_eq!(g, Geometry::Circle { radius: 75.0 });
        assert_eq!(g.extent(), Vec2::splat(150.0));
    }

    #[test]
    fn rounded_geometry_spans_whole_widget() {
        let g = Geometry::resolve(ShapeKind::RoundedRect, Vec2::new(200.0, 150.0), 40.0);
        assert_eq!(
            g,
            Geometry::RoundedRect { bounds: Rect::new(0.0, 0.0, 200.0, 150.0), corner_radius: 40.0 }
        );
    }

    #[test]
    fn circle_scale_ignores_long_raster_axis() {
        for long in [120.0, 400.0, 5000.0] {
            let scale = circle_cover_scale(150.0, Vec2::new(long, 100.0));
            assert_eq!(scale, 1.5);
            let scale = circle_cover_scale(150.0, Vec2::new(100.0, long));
            assert_eq!(scale, 1.5);
        }
    }

    #[test]
    fn rect_scale_covers_both_axes() {
        let cases = [
            (Vec2::new(200.0, 150.0), Vec2::new(100.0, 100.0)),
            (Vec2::new(200.0, 150.0), Vec2::new(1000.0, 300.0)),
            (Vec2::new(30.0, 300.0), Vec2::new(64.0, 48.0)),
            (Vec2::new(7.0, 3.0), Vec2::new(640.0, 480.0)),
        ];
        for (size, raster) in cases {
            let scale = rect_cover_scale(size, raster);
            assert_eq!(scale, (size.x / raster.x).max(size.y / raster.y));
            assert!(raster.x * scale >= size.x - 1e-3);
            assert!(raster.y * scale >= size.y - 1e-3);
        }
    }

    #[test]
    fn rect_scale_does_not_truncate_when_raster_is_larger() {
        let scale = rect_cover_scale(Vec2::new(50.0, 40.0), Vec2::new(200.0, 100.0));
        assert_eq!(scale, 0.4);
    }

    #[test]
    fn cover_transform_centers_overflow() {
        let g = Geometry::resolve(ShapeKind::RoundedRect, Vec2::new(200.0, 150.0), 0.0);
        let t = g.cover_transform(Vec2::new(100.0, 100.0)).unwrap();
        assert_eq!((t.sx, t.sy), (2.0, 2.0));
        assert_eq!((t.tx, t.ty), (0.0, -25.0));

        let g = Geometry::resolve(ShapeKind::Circle, Vec2::splat(100.0), 0.0);
        let t = g.cover_transform(Vec2::new(200.0, 100.0)).unwrap();
        assert_eq!(t.sx, 1.0);
        assert_eq!((t.tx, t.ty), (-50.0, 0.0));
    }

    #[test]
    fn empty_geometry_has_no_scale() {
        let g = Geometry::resolve(ShapeKind::Circle, Vec2::zero(), 0.0);
        assert!(g.is_empty());
        assert!(g.cover_scale(Vec2::new(10.0, 10.0)).is_none());
        let g = Geometry::resolve(ShapeKind::RoundedRect, Vec2::new(10.0, 10.0), 0.0);
        assert!(g.cover_scale(Vec2::zero()).is_none());
    }
}
