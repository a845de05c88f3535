//! Fan-topology generators: ellipse, circle, star.
//!
//! Vertex layout shared by every fan:
//! - index 0: hub (center) vertex
//! - index `1 + i` for `i in 0..=segments`: rim vertex `i`
//!
//! Rim vertex `segments` sits on rim vertex 0 (the ring is closed by a
//! duplicate), but the index buffer never references it: the closing
//! triangle wraps back to rim vertex 0, i.e. buffer index 1.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::check;
use crate::color::Rgb;
use crate::error::{GeomError, Result};
use crate::mesh::{Mesh, Vertex};
use crate::vec2::Vec2;

/// Per-rim-vertex input to a fan color function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RimSample {
    /// Rim index in `0..=segments`.
    pub index: u32,
    /// Angle of the rim vertex in radians, unwrapped: the closing rim vertex
    /// reports one full turn past rim vertex 0.
    pub angle: f32,
}

/// Generates an ellipse (or circle when `radius_x == radius_y`) as a triangle fan.
///
/// `color_fn` receives `None` for the hub vertex and `Some(RimSample)` for each
/// rim vertex. Produces `segments + 2` vertices and `segments` triangles.
pub fn generate_fan<F>(
    center: Vec2,
    radius_x: f32,
    radius_y: f32,
    segments: u32,
    color_fn: F,
) -> Result<Mesh>
where
    F: Fn(Option<RimSample>) -> Rgb,
{
    let center = check::point("center", center)?;
    let radius_x = check::non_negative("radius_x", radius_x)?;
    let radius_y = check::non_negative("radius_y", radius_y)?;
    let segments = check::count_at_least("segments", segments, 1)?;

    let step = TAU / segments as f32;
    let mesh = build_fan(center, segments, &color_fn, |i| {
        // Position from the wrapped index so the closing vertex lands exactly on rim 0.
        let wrapped = (i % segments) as f32 * step;
        (center.on_ellipse(wrapped, radius_x, radius_y), i as f32 * step)
    });

    log::trace!(
        "fan: {} segments, {} vertices, {} indices",
        segments,
        mesh.vertex_count(),
        mesh.index_count()
    );
    Ok(mesh)
}

/// Generates a star with `points` tips as a triangle fan.
///
/// The rim alternates between `outer_radius` (even rim index, a tip) and
/// `inner_radius` (odd rim index, a valley), starting at the top (`-π/2`) and
/// stepping by `π / points`. Produces `2 * points + 2` vertices and
/// `2 * points` triangles.
pub fn generate_star<F>(
    center: Vec2,
    outer_radius: f32,
    inner_radius: f32,
    points: u32,
    color_fn: F,
) -> Result<Mesh>
where
    F: Fn(Option<RimSample>) -> Rgb,
{
    let center = check::point("center", center)?;
    let outer_radius = check::non_negative("outer_radius", outer_radius)?;
    let inner_radius = check::non_negative("inner_radius", inner_radius)?;
    let points = check::count_at_least("points", points, 1)?;

    let segments = points
        .checked_mul(2)
        .ok_or_else(|| GeomError::invalid("points", format!("{points} points overflow the rim")))?;
    let step = PI / points as f32;
    let mesh = build_fan(center, segments, &color_fn, |i| {
        let wrapped = -FRAC_PI_2 + (i % segments) as f32 * step;
        let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
        (center.on_circle(wrapped, radius), -FRAC_PI_2 + i as f32 * step)
    });

    log::trace!("star: {} points, {} vertices", points, mesh.vertex_count());
    Ok(mesh)
}

/// Triangle-fan index buffer: triangle `i` is `(0, i, i % segments + 1)` for `i in 1..=segments`.
pub fn fan_indices(segments: u32) -> Vec<u32> {
    (1..=segments).flat_map(|i| [0, i, i % segments + 1]).collect()
}

fn build_fan<F, R>(center: Vec2, segments: u32, color_fn: &F, rim: R) -> Mesh
where
    F: Fn(Option<RimSample>) -> Rgb,
    // Returns the rim position and the angle reported to `color_fn`.
    R: Fn(u32) -> (Vec2, f32),
{
    let mut vertices = Vec::with_capacity(segments as usize + 2);
    vertices.push(Vertex::new(center, color_fn(None)));

    for index in 0..=segments {
        let (position, angle) = rim(index);
        vertices.push(Vertex::new(position, color_fn(Some(RimSample { index, angle }))));
    }

    Mesh::from_raw(vertices, fan_indices(segments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn red(_: Option<RimSample>) -> Rgb {
        Rgb::RED
    }

    #[test]
    fn fan_counts() {
        for segments in [1, 3, 6, 30, 64] {
            let mesh = generate_fan(Vec2::zero(), 0.5, 0.25, segments, red).unwrap();
            assert_eq!(mesh.vertex_count(), segments as usize + 2);
            assert_eq!(mesh.index_count(), 3 * segments as usize);
            assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));
        }
    }

    #[test]
    fn fan_closes_on_first_rim_vertex() {
        let mesh = generate_fan(Vec2::new(-0.5, 0.5), 0.2, 0.12, 30, red).unwrap();
        let last = mesh.triangles().last().unwrap();
        assert_eq!(last, [0, 30, 1]);
    }

    #[test]
    fn fan_index_pattern() {
        assert_eq!(fan_indices(3), vec![0, 1, 2, 0, 2, 3, 0, 3, 1]);
    }

    #[test]
    fn hub_is_center_and_rim_starts_at_angle_zero() {
        let center = Vec2::new(0.5, 0.5);
        let mesh = generate_fan(center, 0.25, 0.125, 30, red).unwrap();
        let v = mesh.vertices();
        assert_eq!(v[0].pos(), center);
        assert_eq!(v[1].pos(), Vec2::new(0.75, 0.5));
        assert_eq!(v[1].pos(), v[31].pos());
    }

    #[test]
    fn color_fn_sees_hub_then_rim_in_order() {
        let mesh = generate_fan(Vec2::zero(), 1.0, 1.0, 4, |s| match s {
            None => Rgb::BLACK,
            Some(s) => Rgb::gray(s.index as f32 / 4.0),
        })
        .unwrap();
        let grays: Vec<f32> = mesh.vertices().iter().map(|v| v.color[0]).collect();
        assert_eq!(grays, vec![0.0, 0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn fan_rejects_zero_segments() {
        let err = generate_fan(Vec2::zero(), 1.0, 1.0, 0, red).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "segments", .. }));
    }

    #[test]
    fn fan_rejects_bad_radius() {
        assert!(generate_fan(Vec2::zero(), -1.0, 1.0, 8, red).is_err());
        assert!(generate_fan(Vec2::zero(), 1.0, f32::NAN, 8, red).is_err());
        assert!(generate_fan(Vec2::new(f32::INFINITY, 0.0), 1.0, 1.0, 8, red).is_err());
    }

    #[test]
    fn star_counts_and_closure() {
        let mesh = generate_star(Vec2::new(0.0, 0.6), 0.25, 0.1, 5, red).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 10);
        assert_eq!(mesh.triangles().last().unwrap(), [0, 10, 1]);
    }

    #[test]
    fn star_starts_at_top_and_alternates_radius() {
        let center = Vec2::new(0.0, 0.6);
        let mesh = generate_star(center, 0.25, 0.1, 5, red).unwrap();
        let rim = &mesh.vertices()[1..];

        let top = rim[0].pos();
        assert!(top.x.abs() < 1e-6);
        assert!((top.y - (0.6 - 0.25)).abs() < 1e-6);

        for (i, v) in rim.iter().enumerate() {
            let expected = if i % 2 == 0 { 0.25 } else { 0.1 };
            assert!(((v.pos() - center).length() - expected).abs() < 1e-5, "rim {i}");
        }
        assert_eq!(rim[0].pos(), rim[10].pos());
    }

    #[test]
    fn star_rejects_zero_points() {
        let err = generate_star(Vec2::zero(), 0.25, 0.1, 0, red).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "points", .. }));
    }

    #[test]
    fn star_rejects_point_count_that_overflows_rim() {
        let err = generate_star(Vec2::zero(), 0.25, 0.1, 1 << 31, red).unwrap_err();
        assert!(matches!(err, GeomError::InvalidParameter { name: "points", .. }));
        assert!(generate_star(Vec2::zero(), 0.25, 0.1, u32::MAX, red).is_err());
    }

    #[test]
    fn closing_rim_sample_reports_full_turn() {
        let samples = RefCell::new(Vec::new());
        let mesh = generate_fan(Vec2::zero(), 1.0, 1.0, 6, |s| {
            samples.borrow_mut().extend(s);
            Rgb::RED
        })
        .unwrap();

        let samples = samples.into_inner();
        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0].angle, 0.0);
        let last = samples[6];
        assert_eq!(last.index, 6);
        assert_eq!(last.angle, 6.0 * (TAU / 6.0));
        assert!((last.angle - TAU).abs() < 1e-6);
        // Position still closes exactly.
        assert_eq!(mesh.vertices()[1].pos(), mesh.vertices()[7].pos());
    }

    #[test]
    fn closing_star_sample_reports_full_turn() {
        let samples = RefCell::new(Vec::new());
        generate_star(Vec2::zero(), 0.25, 0.1, 5, |s| {
            samples.borrow_mut().extend(s);
            Rgb::RED
        })
        .unwrap();

        let last = samples.into_inner()[10];
        assert_eq!(last.index, 10);
        assert!((last.angle - (-FRAC_PI_2 + TAU)).abs() < 1e-5);
    }
}
