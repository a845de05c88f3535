//! facet engine crate.
//!
//! Owns the platform + GPU runtime used to put `facet-geom` meshes on screen:
//! one window, one wgpu surface, and a mesh renderer that uploads each mesh
//! once and redraws it every frame.

pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod window;
