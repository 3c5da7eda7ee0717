//! Point-cluster features.

use super::VectorRing;
use crate::mbr::GeoMbr;

/// A list of points that share attributes and are otherwise unrelated. In most
/// cases there is one point, but be prepared for multiple.
#[derive(Debug, Clone, Default)]
pub struct VectorPoints {
    pub pts: VectorRing,
}

impl VectorPoints {
    pub fn new(pts: VectorRing) -> Self {
        VectorPoints { pts }
    }

    pub fn calc_geo_mbr(&self) -> GeoMbr {
        GeoMbr::from_points(&self.pts)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use geo::coord;

    #[test]
    fn mbr_of_cluster() {
        let points = VectorPoints::new(vec![
            coord! { x: 10., y: 10. },
            coord! { x: -10., y: 30. },
        ]);
        let mbr = points.calc_geo_mbr();
        assert!(mbr.contains(coord! { x: 0., y: 20. }));
        assert!(!mbr.contains(coord! { x: 0., y: 5. }));
    }
}
