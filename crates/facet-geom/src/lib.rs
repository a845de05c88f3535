//! Parametric 2D shape generation.
//!
//! Every generator is a pure function from shape parameters to a [`Mesh`]
//! (vertex buffer + triangle-list index buffer) in normalized device
//! coordinates. Nothing here touches the GPU; the engine crate uploads the
//! resulting meshes as-is.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`vec2`] | `Vec2` point/offset type |
//! | [`color`] | `Rgb`, `Gradient`, `FanColor` |
//! | [`mesh`] | `Vertex`, `Mesh` |
//! | [`fan`] | `generate_fan`, `generate_star` |
//! | [`polygon`] | `generate_polygon` |
//! | [`petals`] | `generate_petals` |
//! | [`static_shapes`] | `triangle`, `square`, `generate_nested_squares` |
//! | [`shape`] | `ShapeParams`, `ShapeId` |
//! | [`error`] | `GeomError` |
//!
//! # Quick start
//!
//! ```rust
//! use facet_geom::{generate_polygon, Gradient, Rgb, Vec2};
//!
//! let gradient = Gradient::new(Rgb::WHITE, Rgb::RED, Rgb::BLUE);
//! let hexagon = generate_polygon(Vec2::zero(), 1.0, 6, &gradient).unwrap();
//! assert_eq!(hexagon.vertex_count(), 8);
//! assert_eq!(hexagon.triangle_count(), 6);
//! ```

mod check;

pub mod color;
pub mod error;
pub mod fan;
pub mod mesh;
pub mod petals;
pub mod polygon;
pub mod shape;
pub mod static_shapes;
pub mod vec2;

pub use color::{FanColor, Gradient, Rgb};
pub use error::{GeomError, Result};
pub use fan::{fan_indices, generate_fan, generate_star, RimSample};
pub use mesh::{Mesh, Vertex};
pub use petals::generate_petals;
pub use polygon::generate_polygon;
pub use shape::{ShapeId, ShapeParams};
pub use static_shapes::{generate_nested_squares, square, triangle, QUAD_INDICES};
pub use vec2::Vec2;
