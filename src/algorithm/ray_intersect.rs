//! Ray/triangle-mesh intersection.

use glam::DVec3;

use crate::shape::VectorTriangles;

/// A ray/mesh hit: parameter along the ray and the intersection point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayIntersection {
    pub t: f64,
    pub point: DVec3,
}

const DEGENERATE_EPS: f64 = 1e-12;

/// Möller–Trumbore intersection of a single triangle. Returns the ray
/// parameter for hits strictly in front of the origin.
pub fn ray_triangle_intersect(
    org: DVec3,
    dir: DVec3,
    v0: DVec3,
    v1: DVec3,
    v2: DVec3,
) -> Option<f64> {
    let e1 = v1 - v0;
    let e2 = v2 - v0;
    let pvec = dir.cross(e2);
    let det = e1.dot(pvec);
    if det.abs() < DEGENERATE_EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let tvec = org - v0;
    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let qvec = tvec.cross(e1);
    let v = dir.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(qvec) * inv_det;
    (t > 0.0).then_some(t)
}

/// Nearest intersection of a ray with the mesh.
///
/// Every triangle is tested and the minimum positive parameter wins; ties keep
/// the first minimum found. Intersections behind the origin are ignored, and
/// triangles with out-of-range indices are skipped.
pub fn triangles_ray_intersect(
    org: DVec3,
    dir: DVec3,
    mesh: &VectorTriangles,
) -> Option<RayIntersection> {
    let mut best: Option<f64> = None;
    for which in 0..mesh.tris.len() {
        let Some([v0, v1, v2]) = mesh.triangle(which) else {
            continue;
        };
        if let Some(t) = ray_triangle_intersect(org, dir, v0, v1, v2) {
            if best.map_or(true, |b| t < b) {
                best = Some(t);
            }
        }
    }
    best.map(|t| RayIntersection {
        t,
        point: org + dir * t,
    })
}
