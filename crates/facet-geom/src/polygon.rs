use crate::check;
use crate::color::Gradient;
use crate::error::Result;
use crate::fan::generate_fan;
use crate::mesh::Mesh;
use crate::vec2::Vec2;

/// Generates a regular polygon (hexagon, octagon, ...) as a triangle fan.
///
/// Same topology as [`generate_fan`] with `segments = sides`: the first rim
/// vertex sits at angle 0 and is duplicated as rim vertex `sides`, giving
/// `sides + 2` vertices and `sides` triangles. The hub takes `gradient.hub`;
/// rim vertex `i` takes `gradient.at(i / sides)`.
pub fn generate_polygon(center: Vec2, radius: f32, sides: u32, gradient: &Gradient) -> Result<Mesh> {
    let sides = check::count_at_least("sides", sides, 3)?;
    let radius = check::non_negative("radius", radius)?;
    generate_fan(center, radius, radius, sides, |s| gradient.sample(s, sides))
}
