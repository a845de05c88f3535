//! Preset scenes: fixed shape lists with their literal parameters.

use facet_geom::{FanColor, GeomError, Gradient, Mesh, Rgb, ShapeId, ShapeParams, Vec2};

/// Selectable preset.
#[derive(clap::ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum SceneKind {
    /// Single RGB triangle
    Triangle,
    /// Single blue square
    Square,
    /// Ellipse, triangle, wave-colored circle and nested squares
    Basic,
    /// Star, hexagon, octagon and flower
    Creative,
}

/// A window's worth of shapes, drawn in declaration order over `clear`.
#[derive(Debug, Clone)]
pub struct Scene {
    pub title: &'static str,
    pub clear: Rgb,
    pub shapes: Vec<(ShapeId, ShapeParams)>,
}

/// Generated geometry for one shape.
#[derive(Debug)]
pub struct BuiltShape {
    pub id: ShapeId,
    pub meshes: Vec<Mesh>,
}

impl Scene {
    pub fn preset(kind: SceneKind) -> Self {
        match kind {
            SceneKind::Triangle => Self::triangle(),
            SceneKind::Square => Self::square(),
            SceneKind::Basic => Self::basic(),
            SceneKind::Creative => Self::creative(),
        }
    }

    /// Generates and validates every shape's meshes.
    pub fn build(&self) -> Result<Vec<BuiltShape>, GeomError> {
        self.shapes
            .iter()
            .map(|(id, params)| {
                let meshes = params.meshes()?;
                for mesh in &meshes {
                    mesh.validate()?;
                }
                log::trace!("built {id}: {} mesh(es)", meshes.len());
                Ok(BuiltShape { id: *id, meshes })
            })
            .collect()
    }

    fn triangle() -> Self {
        Self {
            title: "Triangle",
            clear: Rgb::BLACK,
            shapes: vec![(ShapeId::Triangle, ShapeParams::Triangle)],
        }
    }

    fn square() -> Self {
        Self {
            title: "Square",
            clear: Rgb::BLACK,
            shapes: vec![(ShapeId::Square, ShapeParams::Square)],
        }
    }

    fn basic() -> Self {
        let dark_red = Rgb::new(0.5, 0.0, 0.0);
        Self {
            title: "Task 2 Part 1",
            clear: Rgb::BLACK,
            shapes: vec![
                (
                    ShapeId::Ellipse,
                    ShapeParams::Fan {
                        center: Vec2::new(-0.5, 0.5),
                        radius_x: 0.2,
                        radius_y: 0.12,
                        segments: 30,
                        color: FanColor::Solid(Rgb::RED),
                    },
                ),
                (ShapeId::Triangle, ShapeParams::Triangle),
                (
                    ShapeId::Circle,
                    ShapeParams::Fan {
                        center: Vec2::new(0.5, 0.5),
                        radius_x: 0.18,
                        radius_y: 0.18,
                        segments: 30,
                        color: FanColor::Wave {
                            hub: dark_red,
                            base: dark_red,
                            amplitude: dark_red,
                        },
                    },
                ),
                (
                    ShapeId::NestedSquares,
                    ShapeParams::NestedSquares {
                        center: Vec2::new(0.0, -0.25),
                        base_size: 0.4,
                        layer_count: 6,
                        size_step: 0.06,
                    },
                ),
            ],
        }
    }

    fn creative() -> Self {
        Self {
            title: "Task 2 Part 2",
            clear: Rgb::new(0.05, 0.05, 0.2),
            shapes: vec![
                (
                    ShapeId::Star,
                    ShapeParams::Star {
                        center: Vec2::new(0.0, 0.6),
                        outer_radius: 0.25,
                        inner_radius: 0.1,
                        points: 5,
                        color: FanColor::Alternating {
                            hub: Rgb::new(1.0, 1.0, 0.2),
                            even: Rgb::new(1.0, 0.6, 0.0),
                            odd: Rgb::new(1.0, 1.0, 0.0),
                        },
                    },
                ),
                (
                    ShapeId::Hexagon,
                    ShapeParams::Polygon {
                        center: Vec2::new(-0.5, 0.0),
                        radius: 0.2,
                        sides: 6,
                        gradient: Gradient::new(
                            Rgb::new(0.5, 0.0, 0.8),
                            Rgb::new(0.5, 0.1, 0.8),
                            Rgb::new(0.9, 0.4, 0.6),
                        ),
                    },
                ),
                (
                    ShapeId::Octagon,
                    ShapeParams::Polygon {
                        center: Vec2::new(0.5, 0.0),
                        radius: 0.18,
                        sides: 8,
                        gradient: Gradient::new(
                            Rgb::new(0.0, 0.8, 1.0),
                            Rgb::new(0.0, 0.8, 1.0),
                            Rgb::new(0.0, 0.3, 1.0),
                        ),
                    },
                ),
                (
                    ShapeId::Flower,
                    ShapeParams::Petals {
                        center: Vec2::new(0.0, -0.4),
                        petal_length: 0.15,
                        petal_width: 0.05,
                        petal_count: 8,
                    },
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SceneKind; 4] = [
        SceneKind::Triangle,
        SceneKind::Square,
        SceneKind::Basic,
        SceneKind::Creative,
    ];

    #[test]
    fn every_preset_builds() {
        for kind in ALL {
            let scene = Scene::preset(kind);
            let built = scene.build().unwrap();
            assert_eq!(built.len(), scene.shapes.len());
            for shape in &built {
                assert!(!shape.meshes.is_empty(), "{} has no meshes", shape.id);
                for mesh in &shape.meshes {
                    assert!(mesh.vertices().iter().all(|v| v.rgb().is_normalized()));
                }
            }
        }
    }

    #[test]
    fn basic_scene_layout() {
        let built = Scene::preset(SceneKind::Basic).build().unwrap();
        let ids: Vec<_> = built.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            [ShapeId::Ellipse, ShapeId::Triangle, ShapeId::Circle, ShapeId::NestedSquares]
        );

        // 30-segment fans: hub + 31 rim vertices.
        assert_eq!(built[0].meshes[0].vertex_count(), 32);
        assert_eq!(built[0].meshes[0].index_count(), 90);
        assert_eq!(built[3].meshes.len(), 6);
    }

    #[test]
    fn creative_scene_layout() {
        let scene = Scene::preset(SceneKind::Creative);
        assert_eq!(scene.clear, Rgb::new(0.05, 0.05, 0.2));

        let built = scene.build().unwrap();
        let star = &built[0].meshes[0];
        assert_eq!(star.vertex_count(), 12);
        assert_eq!(built[1].meshes[0].triangle_count(), 6);
        assert_eq!(built[2].meshes[0].triangle_count(), 8);
        assert_eq!(built[3].meshes[0].vertex_count(), 24);
    }

    #[test]
    fn single_shape_presets() {
        let triangle = Scene::preset(SceneKind::Triangle);
        assert_eq!(triangle.clear, Rgb::BLACK);
        assert_eq!(triangle.shapes, [(ShapeId::Triangle, ShapeParams::Triangle)]);

        let square = Scene::preset(SceneKind::Square).build().unwrap();
        assert_eq!(square[0].meshes[0].index_count(), 6);
    }
}
