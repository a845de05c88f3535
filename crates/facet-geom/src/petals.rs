use std::f32::consts::{PI, TAU};

use crate::check;
use crate::color::Rgb;
use crate::error::Result;
use crate::mesh::{Mesh, Vertex};
use crate::vec2::Vec2;

/// Brightness of a petal's center vertex relative to its tip and side.
const PETAL_CENTER_DIM: f32 = 0.7;

/// Generates a flower: `petal_count` independent triangles around `center`.
///
/// Petal `p` points along `a = p * 2π / petal_count` and is colored by
/// [`Rgb::from_phase`]`(a)`. Its three vertices are:
/// - the center, dimmed to 70%
/// - the tip at `center + petal_length * (cos a, sin a)`
/// - the side at `center + petal_width * (cos, sin)(a + π / petal_count)`
///
/// Petals share no vertices; indices are `(3p, 3p + 1, 3p + 2)`.
pub fn generate_petals(
    center: Vec2,
    petal_length: f32,
    petal_width: f32,
    petal_count: u32,
) -> Result<Mesh> {
    let center = check::point("center", center)?;
    let petal_length = check::non_negative("petal_length", petal_length)?;
    let petal_width = check::non_negative("petal_width", petal_width)?;
    let petal_count = check::count_at_least("petal_count", petal_count, 1)?;

    let half_step = PI / petal_count as f32;
    let mut vertices = Vec::with_capacity(3 * petal_count as usize);
    let mut indices = Vec::with_capacity(3 * petal_count as usize);

    for p in 0..petal_count {
        let angle = p as f32 * TAU / petal_count as f32;
        let color = Rgb::from_phase(angle);

        let base = vertices.len() as u32;
        vertices.push(Vertex::new(center, color.scale(PETAL_CENTER_DIM)));
        vertices.push(Vertex::new(center.on_circle(angle, petal_length), color));
        vertices.push(Vertex::new(center.on_circle(angle + half_step, petal_width), color));
        indices.extend([base, base + 1, base + 2]);
    }

    log::trace!("flower: {} petals, {} vertices", petal_count, vertices.len());
    Ok(Mesh::from_raw(vertices, indices))
}
