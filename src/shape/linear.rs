//! Linear (polyline) features in two and three dimensions.

use super::{VectorRing, VectorRing3d};
use crate::mbr::GeoMbr;

/// Linear feature: a list of points forming a set of edges. Interpreted as an
/// open polyline, not implicitly closed.
#[derive(Debug, Clone, Default)]
pub struct VectorLinear {
    pub pts: VectorRing,
}

impl VectorLinear {
    pub fn new(pts: VectorRing) -> Self {
        VectorLinear { pts }
    }

    pub fn calc_geo_mbr(&self) -> GeoMbr {
        GeoMbr::from_points(&self.pts)
    }
}

/// [`VectorLinear`] with a z coordinate on every point. The bounding box only
/// considers lon/lat.
#[derive(Debug, Clone, Default)]
pub struct VectorLinear3d {
    pub pts: VectorRing3d,
}

impl VectorLinear3d {
    pub fn new(pts: VectorRing3d) -> Self {
        VectorLinear3d { pts }
    }

    pub fn calc_geo_mbr(&self) -> GeoMbr {
        let mut mbr = GeoMbr::new();
        for pt in &self.pts {
            mbr.add_point(geo::coord! { x: pt.x, y: pt.y });
        }
        mbr
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::coord;
    use glam::DVec3;

    #[test]
    fn linear_mbr() {
        let linear = VectorLinear::new(vec![
            coord! { x: -3., y: 2. },
            coord! { x: 7., y: -1. },
        ]);
        let mbr = linear.calc_geo_mbr();
        assert_eq!(mbr.minx, -3.);
        assert_eq!(mbr.maxy, 2.);
    }

    #[test]
    fn linear3d_mbr_ignores_z() {
        let linear = VectorLinear3d::new(vec![
            DVec3::new(1., 2., 100.),
            DVec3::new(3., 4., -100.),
        ]);
        let mbr = linear.calc_geo_mbr();
        assert_eq!(mbr.maxx, 3.);
        assert_eq!(mbr.maxy, 4.);
    }

    #[test]
    fn empty_linear_is_invalid() {
        assert!(!VectorLinear::default().calc_geo_mbr().is_valid());
    }
}
