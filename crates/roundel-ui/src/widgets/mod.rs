//! Built-in widgets.

pub mod container;
pub mod shaped_image;
