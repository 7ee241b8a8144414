//! Per-shape draw payloads and their `DrawList` push helpers.

pub mod circle;
pub mod rect;
pub mod rounded_rect;
