use std::rc::Rc;

use roundel_engine::paint::ImageShader;
use roundel_engine::raster::Drawable;

use super::{Geometry, ShapeKind};

/// What a cached shader was built from.
#[derive(Debug, Clone, PartialEq)]
struct ShaderKey {
    /// Address of the image source; identity, not content.
    source: *const (),
    geometry: Geometry,
    shape: ShapeKind,
}

impl ShaderKey {
    fn new(source: &Rc<dyn Drawable>, geometry: Geometry, shape: ShapeKind) -> Self {
        Self { source: Rc::as_ptr(source) as *const (), geometry, shape }
    }
}

/// Single-entry cache for the widget's shader.
///
/// Holds the source alive alongside the key so a freed and reallocated
/// drawable can never alias a stale entry.
#[derive(Default)]
pub(super) struct ShaderCache {
    entry: Option<(ShaderKey, Rc<dyn Drawable>, ImageShader)>,
    builds: u32,
}

impl ShaderCache {
    /// Returns the cached shader for this key, building it with `build` on a miss.
    pub(super) fn get_or_build(
        &mut self,
        source: &Rc<dyn Drawable>,
        geometry: Geometry,
        shape: ShapeKind,
        build: impl FnOnce() -> Option<ImageShader>,
    ) -> Option<ImageShader> {
        let key = ShaderKey::new(source, geometry, shape);
        if let Some((cached_key, _, shader)) = &self.entry {
            if *cached_key == key {
                return Some(shader.clone());
            }
        }

        self.entry = None;
        let shader = build()?;
        self.builds += 1;
        self.entry = Some((key, Rc::clone(source), shader.clone()));
        Some(shader)
    }

    pub(super) fn clear(&mut self) {
        self.entry = None;
    }

    /// Number of shaders built since creation.
    pub(super) fn builds(&self) -> u32 {
        self.builds
    }
}
