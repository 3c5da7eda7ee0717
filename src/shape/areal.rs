//! Areal (polygon-like) features.

use geo::Coord;

use super::VectorRing;
use crate::algorithm::point_in_polygon::point_in_polygon;
use crate::mbr::GeoMbr;

/// Areal feature: a list of loops where loop 0 is the outer boundary and all
/// the rest are holes.
///
/// Holes are expected to lie within the outer loop. That is a precondition on
/// producers, not something this type validates.
#[derive(Debug, Clone, Default)]
pub struct VectorAreal {
    pub loops: Vec<VectorRing>,
}

impl VectorAreal {
    pub fn new(loops: Vec<VectorRing>) -> Self {
        VectorAreal { loops }
    }

    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        for ring in &self.loops {
            for pt in ring {
                mbr.add_point(*pt);
            }
        }
        mbr
    }

    /// True when the point falls inside the outer loop and outside every hole.
    pub fn point_inside(&self, pt: Coord<f64>) -> bool {
        point_in_polygon(pt, &self.loops)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::ring::square_loops_with_hole;
    use geo::coord;

    #[test]
    fn mbr_covers_all_loops() {
        let areal = VectorAreal::new(square_loops_with_hole());
        let mbr = areal.calc_geo_mbr();
        assert!(mbr.is_valid());
        assert_eq!(mbr.minx, 0.);
        assert_eq!(mbr.maxx, 4.);
    }

    #[test]
    fn containment_respects_holes() {
        let areal = VectorAreal::new(square_loops_with_hole());
        assert!(areal.point_inside(coord! { x: 0.5, y: 0.5 }));
        assert!(!areal.point_inside(coord! { x: 2.0, y: 2.0 }));
        assert!(!areal.point_inside(coord! { x: -1.0, y: -1.0 }));
    }

    #[test]
    fn empty_areal() {
        let areal = VectorAreal::default();
        assert!(!areal.calc_geo_mbr().is_valid());
        assert!(!areal.point_inside(coord! { x: 0., y: 0. }));
    }
}
