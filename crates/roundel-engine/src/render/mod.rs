//! CPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and rasterize them with
//! tiny-skia. Geometry arrives in device pixels (top-left origin, +Y down)
//! and is drawn 1:1 into the target raster.

mod cpu;
mod path;

pub use cpu::CpuRenderer;
