//! The vector shape data model: a closed set of five variants sharing
//! identity, attributes and a lazily computed bounding box.

pub use areal::VectorAreal;
pub use linear::{VectorLinear, VectorLinear3d};
pub use points::VectorPoints;
pub use set::{ShapeRef, ShapeSet};
pub use triangles::{Triangle, VectorTriangles};

mod areal;
mod linear;
mod points;
mod set;
mod triangles;

use std::sync::atomic::{AtomicU64, Ordering};

use geo::Coord;
use glam::DVec3;

use crate::algorithm::subdivide::{subdivide_edges, subdivide_edges_3d};
use crate::attributes::AttrDict;
use crate::mbr::GeoMbr;

/// Ordered sequence of 2D lon/lat points.
pub type VectorRing = Vec<Coord<f64>>;

/// Ordered sequence of 3D points.
pub type VectorRing3d = Vec<DVec3>;

static NEXT_SHAPE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity token assigned at construction.
///
/// Compared by value and used only for deduplication, never for equality of
/// content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    fn next() -> Self {
        ShapeId(NEXT_SHAPE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Variant payload of a shape.
#[derive(Debug, Clone)]
pub enum ShapeGeometry {
    Areal(VectorAreal),
    Linear(VectorLinear),
    Linear3d(VectorLinear3d),
    Points(VectorPoints),
    Triangles(VectorTriangles),
}

/// A vector shape: unique identity, attribute dictionary, cached bounding box
/// and one of five geometry payloads.
///
/// Deliberately not `Clone`: the identity belongs to this one object.
#[derive(Debug)]
pub struct VectorShape {
    id: ShapeId,
    attrs: AttrDict,
    geo_mbr: Option<GeoMbr>,
    geometry: ShapeGeometry,
}

macro_rules! downcast_impl {
    ($as_ref:ident, $as_mut:ident, $variant:ident, $payload:ty) => {
        pub fn $as_ref(&self) -> Option<&$payload> {
            match &self.geometry {
                ShapeGeometry::$variant(inner) => Some(inner),
                _ => None,
            }
        }

        /// Mutable downcast. Invalidates the cached bounding box.
        pub fn $as_mut(&mut self) -> Option<&mut $payload> {
            match &mut self.geometry {
                ShapeGeometry::$variant(inner) => {
                    self.geo_mbr = None;
                    Some(inner)
                }
                _ => None,
            }
        }
    };
}

impl VectorShape {
    /// Wrap a pre-built payload in a fresh shape with a unique identity and no
    /// attributes.
    pub fn new(geometry: ShapeGeometry) -> Self {
        VectorShape {
            id: ShapeId::next(),
            attrs: AttrDict::new(),
            geo_mbr: None,
            geometry,
        }
    }

    pub fn new_areal() -> Self {
        Self::new(ShapeGeometry::Areal(VectorAreal::default()))
    }

    pub fn new_linear() -> Self {
        Self::new(ShapeGeometry::Linear(VectorLinear::default()))
    }

    pub fn new_linear3d() -> Self {
        Self::new(ShapeGeometry::Linear3d(VectorLinear3d::default()))
    }

    pub fn new_points() -> Self {
        Self::new(ShapeGeometry::Points(VectorPoints::default()))
    }

    pub fn new_triangles() -> Self {
        Self::new(ShapeGeometry::Triangles(VectorTriangles::default()))
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn attributes(&self) -> &AttrDict {
        &self.attrs
    }

    pub fn attributes_mut(&mut self) -> &mut AttrDict {
        &mut self.attrs
    }

    pub fn set_attributes(&mut self, attrs: AttrDict) {
        self.attrs = attrs;
    }

    pub fn geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Mutable payload access. Invalidates the cached bounding box.
    pub fn geometry_mut(&mut self) -> &mut ShapeGeometry {
        self.geo_mbr = None;
        &mut self.geometry
    }

    downcast_impl!(as_areal, as_areal_mut, Areal, VectorAreal);
    downcast_impl!(as_linear, as_linear_mut, Linear, VectorLinear);
    downcast_impl!(as_linear3d, as_linear3d_mut, Linear3d, VectorLinear3d);
    downcast_impl!(as_points, as_points_mut, Points, VectorPoints);
    downcast_impl!(as_triangles, as_triangles_mut, Triangles, VectorTriangles);

    /// Bounding box of the geometry, using the cached value when one is
    /// present. Invalid for empty shapes.
    pub fn calc_geo_mbr(&self) -> GeoMbr {
        self.geo_mbr.unwrap_or_else(|| self.compute_geo_mbr())
    }

    /// Compute and cache the bounding box.
    pub fn init_geo_mbr(&mut self) {
        self.geo_mbr = Some(self.compute_geo_mbr());
    }

    fn compute_geo_mbr(&self) -> GeoMbr {
        match &self.geometry {
            ShapeGeometry::Areal(areal) => areal.calc_geo_mbr(),
            ShapeGeometry::Linear(linear) => linear.calc_geo_mbr(),
            ShapeGeometry::Linear3d(linear) => linear.calc_geo_mbr(),
            ShapeGeometry::Points(points) => points.calc_geo_mbr(),
            ShapeGeometry::Triangles(mesh) => mesh.calc_geo_mbr(),
        }
    }

    /// Split any edge longer than `tolerance` (degrees) in place. Areal loops
    /// treat the wrap-around edge as subject to splitting; polylines do not.
    /// Points and meshes are untouched.
    ///
    /// Returns whether anything was split; a cached bounding box is invalidated
    /// when it was.
    pub fn subdivide(&mut self, tolerance: f64) -> bool {
        let split = match &mut self.geometry {
            ShapeGeometry::Areal(areal) => {
                let mut any = false;
                for ring in &mut areal.loops {
                    let mut out = VectorRing::with_capacity(ring.len());
                    any |= subdivide_edges(ring, &mut out, true, tolerance);
                    *ring = out;
                }
                any
            }
            ShapeGeometry::Linear(linear) => {
                let mut out = VectorRing::with_capacity(linear.pts.len());
                let any = subdivide_edges(&linear.pts, &mut out, false, tolerance);
                linear.pts = out;
                any
            }
            ShapeGeometry::Linear3d(linear) => {
                let mut out = VectorRing3d::with_capacity(linear.pts.len());
                let any = subdivide_edges_3d(&linear.pts, &mut out, false, tolerance);
                linear.pts = out;
                any
            }
            ShapeGeometry::Points(_) | ShapeGeometry::Triangles(_) => false,
        };
        if split {
            self.geo_mbr = None;
        }
        split
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::coord;

    #[test]
    fn factories_are_empty_and_unique() {
        let a = VectorShape::new_areal();
        let b = VectorShape::new_areal();
        assert_ne!(a.id(), b.id());
        assert!(a.attributes().is_empty());
        assert!(a.as_areal().unwrap().loops.is_empty());
        assert!(!a.calc_geo_mbr().is_valid());
    }

    #[test]
    fn downcasts_are_closed() {
        let shape = VectorShape::new_linear();
        assert!(shape.as_linear().is_some());
        assert!(shape.as_areal().is_none());
        assert!(shape.as_triangles().is_none());
    }

    #[test]
    fn mbr_cache_and_invalidation() {
        let mut shape = VectorShape::new_linear();
        shape.as_linear_mut().unwrap().pts = vec![
            coord! { x: 0., y: 0. },
            coord! { x: 2., y: 1. },
        ];
        shape.init_geo_mbr();
        assert_eq!(shape.calc_geo_mbr().maxx, 2.);

        shape
            .as_linear_mut()
            .unwrap()
            .pts
            .push(coord! { x: 5., y: 5. });
        // cache was dropped by the mutable downcast
        assert_eq!(shape.calc_geo_mbr().maxx, 5.);
    }

    #[test]
    fn subdivide_areal_in_place() {
        let mut shape = VectorShape::new_areal();
        shape.as_areal_mut().unwrap().loops = vec![crate::test::ring::unit_square()];
        shape.init_geo_mbr();
        assert!(shape.subdivide(0.25));
        let areal = shape.as_areal().unwrap();
        assert!(areal.loops[0].len() > 4);
        assert!(shape.calc_geo_mbr().is_valid());
    }

    #[test]
    fn replace_geometry_resets_cache() {
        let mut shape = VectorShape::new_points();
        shape.as_points_mut().unwrap().pts = vec![coord! { x: 1., y: 1. }];
        shape.init_geo_mbr();
        *shape.geometry_mut() =
            ShapeGeometry::Points(VectorPoints::new(vec![coord! { x: 9., y: 9. }]));
        assert_eq!(shape.calc_geo_mbr().maxx, 9.);
    }

    #[test]
    fn subdivide_ignores_points() {
        let mut shape = VectorShape::new_points();
        shape.as_points_mut().unwrap().pts = vec![coord! { x: 0., y: 0. }];
        assert!(!shape.subdivide(0.1));
    }
}
