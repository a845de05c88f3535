//! GPU rendering subsystem.
//!
//! Convention:
//! - mesh positions are already in NDC; the vertex shader passes them through
//! - vertex colors are passed through to the fragment shader unchanged
//!
//! The mesh renderer owns every GPU buffer it creates; callers hold
//! [`MeshHandle`]s into its arena.

mod ctx;
mod error;
mod mesh;
mod shader;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::BuildError;
pub use mesh::{MeshHandle, MeshPipelineConfig, MeshRenderer};
pub use shader::build_shader;
