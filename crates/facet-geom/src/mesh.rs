use bytemuck::{Pod, Zeroable};

use crate::color::Rgb;
use crate::error::{GeomError, Result};
use crate::vec2::Vec2;

/// Interleaved vertex as uploaded to the GPU.
///
/// Layout (20 bytes):
///
///  offset  0  position  [f32; 2]   loc 0
///  offset  8  color     [f32; 3]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec2, color: Rgb) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::from(self.color)
    }
}

/// Vertex buffer plus triangle-list index buffer.
///
/// Invariants:
/// - every index is `< vertices.len()`
/// - `indices.len()` is a multiple of 3
///
/// Meshes are immutable once generated; the renderer uploads them once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh from caller-supplied buffers, checking the invariants.
    pub fn from_parts(vertices: Vec<Vertex>, indices: Vec<u32>) -> Result<Self> {
        let mesh = Self { vertices, indices };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Generators construct buffers that satisfy the invariants by construction.
    pub(crate) fn from_raw(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        let mesh = Self { vertices, indices };
        debug_assert!(mesh.validate().is_ok(), "generator produced an invalid mesh");
        mesh
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index triples in buffer order.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn validate(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(GeomError::IncompleteTriangle { index_count: self.indices.len() });
        }
        let vertex_count = self.vertices.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(GeomError::IndexOutOfBounds { index, vertex_count });
        }
        Ok(())
    }
}
