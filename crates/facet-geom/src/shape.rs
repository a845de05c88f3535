use std::fmt;

use crate::color::{FanColor, Gradient};
use crate::error::Result;
use crate::fan::{generate_fan, generate_star};
use crate::mesh::Mesh;
use crate::petals::generate_petals;
use crate::polygon::generate_polygon;
use crate::static_shapes::{generate_nested_squares, square, triangle};
use crate::vec2::Vec2;

/// Parameters for every shape the generators know how to build.
///
/// Construction is free; validation happens in [`ShapeParams::meshes`].
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeParams {
    /// Ellipse, or circle when both radii match.
    Fan {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        segments: u32,
        color: FanColor,
    },
    Star {
        center: Vec2,
        outer_radius: f32,
        inner_radius: f32,
        points: u32,
        color: FanColor,
    },
    /// Regular polygon (hexagon, octagon, ...).
    Polygon {
        center: Vec2,
        radius: f32,
        sides: u32,
        gradient: Gradient,
    },
    /// Flower made of independent petal triangles.
    Petals {
        center: Vec2,
        petal_length: f32,
        petal_width: f32,
        petal_count: u32,
    },
    Triangle,
    Square,
    /// Concentric alternating squares; the only variant producing several meshes.
    NestedSquares {
        center: Vec2,
        base_size: f32,
        layer_count: u32,
        size_step: f32,
    },
}

impl ShapeParams {
    /// Generates the meshes for this shape in draw order.
    ///
    /// Every variant except [`ShapeParams::NestedSquares`] yields exactly one mesh.
    pub fn meshes(&self) -> Result<Vec<Mesh>> {
        let mesh = match *self {
            ShapeParams::Fan { center, radius_x, radius_y, segments, color } => {
                generate_fan(center, radius_x, radius_y, segments, |s| color.sample(s, segments))?
            }
            ShapeParams::Star { center, outer_radius, inner_radius, points, color } => {
                generate_star(center, outer_radius, inner_radius, points, |s| {
                    color.sample(s, points.saturating_mul(2))
                })?
            }
            ShapeParams::Polygon { center, radius, sides, gradient } => {
                generate_polygon(center, radius, sides, &gradient)?
            }
            ShapeParams::Petals { center, petal_length, petal_width, petal_count } => {
                generate_petals(center, petal_length, petal_width, petal_count)?
            }
            ShapeParams::Triangle => triangle(),
            ShapeParams::Square => square(),
            ShapeParams::NestedSquares { center, base_size, layer_count, size_step } => {
                return generate_nested_squares(center, base_size, layer_count, size_step);
            }
        };
        Ok(vec![mesh])
    }
}

/// Names a drawable shape within a scene.
///
/// Used as the key that owns the uploaded GPU buffers for that shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ShapeId {
    Triangle,
    Square,
    Ellipse,
    Circle,
    NestedSquares,
    Star,
    Hexagon,
    Octagon,
    Flower,
}

impl ShapeId {
    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Triangle => "triangle",
            ShapeId::Square => "square",
            ShapeId::Ellipse => "ellipse",
            ShapeId::Circle => "circle",
            ShapeId::NestedSquares => "nested squares",
            ShapeId::Star => "star",
            ShapeId::Hexagon => "hexagon",
            ShapeId::Octagon => "octagon",
            ShapeId::Flower => "flower",
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::error::GeomError;

    #[test]
    fn single_mesh_variants() {
        let shapes = [
            ShapeParams::Fan {
                center: Vec2::new(-0.5, 0.5),
                radius_x: 0.2,
                radius_y: 0.12,
                segments: 30,
                color: FanColor::Solid(Rgb::RED),
            },
            ShapeParams::Star {
                center: Vec2::new(0.0, 0.6),
                outer_radius: 0.25,
                inner_radius: 0.1,
                points: 5,
                color: FanColor::Solid(Rgb::RED),
            },
            ShapeParams::Polygon {
                center: Vec2::zero(),
                radius: 0.2,
                sides: 6,
                gradient: Gradient::new(Rgb::BLACK, Rgb::RED, Rgb::BLUE),
            },
            ShapeParams::Petals {
                center: Vec2::new(0.0, -0.4),
                petal_length: 0.15,
                petal_width: 0.05,
                petal_count: 8,
            },
            ShapeParams::Triangle,
            ShapeParams::Square,
        ];
        let expected_vertices = [32, 12, 8, 24, 3, 4];

        for (shape, expected) in shapes.iter().zip(expected_vertices) {
            let meshes = shape.meshes().unwrap();
            assert_eq!(meshes.len(), 1, "{shape:?}");
            assert_eq!(meshes[0].vertex_count(), expected, "{shape:?}");
        }
    }

    #[test]
    fn nested_squares_yield_one_mesh_per_layer() {
        let shape = ShapeParams::NestedSquares {
            center: Vec2::new(0.0, -0.25),
            base_size: 0.4,
            layer_count: 6,
            size_step: 0.06,
        };
        assert_eq!(shape.meshes().unwrap().len(), 6);
    }

    #[test]
    fn star_colors_by_parity() {
        let shape = ShapeParams::Star {
            center: Vec2::zero(),
            outer_radius: 0.25,
            inner_radius: 0.1,
            points: 5,
            color: FanColor::Alternating {
                hub: Rgb::new(1.0, 1.0, 0.2),
                even: Rgb::new(1.0, 0.6, 0.0),
                odd: Rgb::new(1.0, 1.0, 0.0),
            },
        };
        let mesh = &shape.meshes().unwrap()[0];
        let v = mesh.vertices();
        assert_eq!(v[0].rgb(), Rgb::new(1.0, 1.0, 0.2));
        assert_eq!(v[1].rgb(), Rgb::new(1.0, 0.6, 0.0));
        assert_eq!(v[2].rgb(), Rgb::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn invalid_params_surface_from_meshes() {
        let shape = ShapeParams::Polygon {
            center: Vec2::zero(),
            radius: 0.2,
            sides: 1,
            gradient: Gradient::new(Rgb::BLACK, Rgb::RED, Rgb::BLUE),
        };
        assert!(matches!(shape.meshes(), Err(GeomError::InvalidParameter { name: "sides", .. })));
    }

    #[test]
    fn shape_ids_have_distinct_names() {
        let ids = [
            ShapeId::Triangle,
            ShapeId::Square,
            ShapeId::Ellipse,
            ShapeId::Circle,
            ShapeId::NestedSquares,
            ShapeId::Star,
            ShapeId::Hexagon,
            ShapeId::Octagon,
            ShapeId::Flower,
        ];
        let mut names: Vec<_> = ids.iter().map(|id| id.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ids.len());
    }
}
