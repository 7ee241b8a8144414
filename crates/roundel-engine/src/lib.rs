//! Roundel engine crate.
//!
//! Owns the renderer-agnostic pieces the UI layer builds on: geometry,
//! paint sources, the recorded draw stream, image sources and the CPU
//! rasterizer that turns a draw stream into pixels.

pub mod logging;
pub mod coords;
pub mod paint;
pub mod raster;
pub mod render;
pub mod scene;

// Drawables render into tiny-skia pixmaps; re-exported so implementors
// use the same version the engine links.
pub use tiny_skia;
