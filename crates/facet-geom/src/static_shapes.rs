//! Literal meshes (triangle, square) and the layered-square generator.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::check;
use crate::color::Rgb;
use crate::error::{GeomError, Result};
use crate::mesh::{Mesh, Vertex};
use crate::vec2::Vec2;

/// Two triangles covering a quad whose corners are listed in ring order.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [0.0, 0.7], color: [1.0, 0.0, 0.0] },
    Vertex { position: [-0.15, 0.3], color: [0.0, 1.0, 0.0] },
    Vertex { position: [0.15, 0.3], color: [0.0, 0.0, 1.0] },
];

pub const SQUARE_VERTICES: [Vertex; 4] = [
    Vertex { position: [-0.5, -0.5], color: [0.0, 0.0, 1.0] },
    Vertex { position: [0.5, -0.5], color: [0.0, 0.0, 1.0] },
    Vertex { position: [0.5, 0.5], color: [0.0, 0.0, 1.0] },
    Vertex { position: [-0.5, 0.5], color: [0.0, 0.0, 1.0] },
];

/// Red/green/blue triangle above the origin.
pub fn triangle() -> Mesh {
    Mesh::from_raw(TRIANGLE_VERTICES.to_vec(), vec![0, 1, 2])
}

/// Solid blue square centered on the origin.
pub fn square() -> Mesh {
    Mesh::from_raw(SQUARE_VERTICES.to_vec(), QUAD_INDICES.to_vec())
}

/// Generates `layer_count` concentric squares, outermost first.
///
/// Layer `l` has circumradius `base_size - l * size_step`, corners at
/// `π/4 + k·π/2`, and is white for even `l`, black for odd `l`. Every layer
/// uses [`QUAD_INDICES`]. Drawing the meshes in order gives alternating rings.
pub fn generate_nested_squares(
    center: Vec2,
    base_size: f32,
    layer_count: u32,
    size_step: f32,
) -> Result<Vec<Mesh>> {
    let center = check::point("center", center)?;
    let base_size = check::finite("base_size", base_size)?;
    let size_step = check::finite("size_step", size_step)?;
    if base_size <= 0.0 {
        return Err(GeomError::invalid("base_size", format!("must be positive, got {base_size}")));
    }

    let layers = (0..layer_count)
        .map(|layer| {
            let size = base_size - layer as f32 * size_step;
            if size <= 0.0 {
                return Err(GeomError::invalid(
                    "size_step",
                    format!("layer {layer} would have non-positive size {size}"),
                ));
            }

            let color = if layer % 2 == 0 { Rgb::WHITE } else { Rgb::BLACK };
            let vertices = (0..4)
                .map(|k| {
                    let angle = FRAC_PI_4 + k as f32 * FRAC_PI_2;
                    Vertex::new(center.on_circle(angle, size), color)
                })
                .collect();

            Ok(Mesh::from_raw(vertices, QUAD_INDICES.to_vec()))
        })
        .collect::<Result<Vec<_>>>()?;

    log::trace!("nested squares: {} layers", layers.len());
    Ok(layers)
}
