use tiny_skia::{Path, PathBuilder};

use crate::coords::{CornerRadii, Rect, Vec2};

/// Control-point distance for a cubic approximation of a quarter circle.
const KAPPA: f32 = 0.552_284_8;

pub(super) fn rect(r: Rect) -> Option<Path> {
    let r = r.normalized();
    if r.is_empty() || !r.is_finite() {
        return None;
    }
    tiny_skia::Rect::from_xywh(r.origin.x, r.origin.y, r.size.x, r.size.y)
        .map(PathBuilder::from_rect)
}

pub(super) fn circle(center: Vec2, radius: f32) -> Option<Path> {
    if radius.is_nan() || radius <= 0.0 || !center.is_finite() {
        return None;
    }
    PathBuilder::from_circle(center.x, center.y, radius)
}

pub(super) fn rounded_rect(r: Rect, radii: CornerRadii) -> Option<Path> {
    let r = r.normalized();
    let radii = radii.clamped_to(r.size);
    if radii.is_zero() {
        return rect(r);
    }

    let (x0, y0) = (r.origin.x, r.origin.y);
    let Vec2 { x: x1, y: y1 } = r.max();
    let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } = radii;

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + tl, y0);
    pb.line_to(x1 - tr, y0);
    pb.cubic_to(x1 - tr * (1.0 - KAPPA), y0, x1, y0 + tr * (1.0 - KAPPA), x1, y0 + tr);
    pb.line_to(x1, y1 - br);
    pb.cubic_to(x1, y1 - br * (1.0 - KAPPA), x1 - br * (1.0 - KAPPA), y1, x1 - br, y1);
    pb.line_to(x0 + bl, y1);
    pb.cubic_to(x0 + bl * (1.0 - KAPPA), y1, x0, y1 - bl * (1.0 - KAPPA), x0, y1 - bl);
    pb.line_to(x0, y0 + tl);
    pb.cubic_to(x0, y0 + tl * (1.0 - KAPPA), x0 + tl * (1.0 - KAPPA), y0, x0 + tl, y0);
    pb.close();
    pb.finish()
}
