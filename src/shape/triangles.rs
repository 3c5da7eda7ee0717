//! Triangle mesh features.

use geo::{coord, Coord};
use glam::DVec3;

use super::VectorRing;
use crate::algorithm::point_in_polygon::point_in_triangle;
use crate::mbr::GeoMbr;

/// One triangle as indices into the shared vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub pts: [u32; 3],
}

/// A collection of triangles forming a mesh: a shared vertex buffer plus index
/// triples. Every index is expected to be a valid position in the buffer;
/// accessors range-check and skip triangles that are not.
#[derive(Debug, Clone, Default)]
pub struct VectorTriangles {
    pub pts: Vec<DVec3>,
    pub tris: Vec<Triangle>,
}

impl VectorTriangles {
    pub fn new(pts: Vec<DVec3>, tris: Vec<Triangle>) -> Self {
        VectorTriangles { pts, tris }
    }

    /// Vertices of the given triangle, or `None` when the triangle or one of
    /// its indices is out of range.
    pub fn triangle(&self, which: usize) -> Option<[DVec3; 3]> {
        let tri = self.tris.get(which)?;
        let v0 = *self.pts.get(tri.pts[0] as usize)?;
        let v1 = *self.pts.get(tri.pts[1] as usize)?;
        let v2 = *self.pts.get(tri.pts[2] as usize)?;
        Some([v0, v1, v2])
    }

    /// The given triangle as a 2D ring over the x/y projection.
    pub fn triangle_ring(&self, which: usize) -> Option<VectorRing> {
        self.triangle(which).map(|verts| {
            verts
                .iter()
                .map(|v| coord! { x: v.x, y: v.y })
                .collect()
        })
    }

    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        for pt in &self.pts {
            mbr.add_point(coord! { x: pt.x, y: pt.y });
        }
        mbr
    }

    /// True when the point lies within any triangle, tested in the x/y plane.
    /// Short-circuits on the first hit.
    pub fn point_inside(&self, pt: Coord<f64>) -> bool {
        (0..self.tris.len()).any(|which| {
            self.triangle(which).map_or(false, |[v0, v1, v2]| {
                point_in_triangle(
                    pt,
                    coord! { x: v0.x, y: v0.y },
                    coord! { x: v1.x, y: v1.y },
                    coord! { x: v2.x, y: v2.y },
                )
            })
        })
    }
}
