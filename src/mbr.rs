//! Minimum bounding rectangles in geographic coordinates.

use geo::{coord, Coord, Rect};

/// Axis-aligned bounding box in geographic coordinates (lon/lat degrees).
///
/// A freshly created box is invalid until a point is added, and an empty shape
/// keeps an invalid box. Callers must check [`GeoMbr::is_valid`] before feeding
/// the extents into further computation such as unions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoMbr {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl GeoMbr {
    /// New, invalid box.
    pub fn new() -> Self {
        GeoMbr {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    /// Box covering all the given points. Invalid for an empty slice.
    pub fn from_points(pts: &[Coord<f64>]) -> Self {
        let mut mbr = GeoMbr::new();
        for pt in pts {
            mbr.add_point(*pt);
        }
        mbr
    }

    pub fn is_valid(&self) -> bool {
        self.minx <= self.maxx && self.miny <= self.maxy
    }

    pub fn add_point(&mut self, pt: Coord<f64>) {
        if pt.x < self.minx {
            self.minx = pt.x;
        }
        if pt.y < self.miny {
            self.miny = pt.y;
        }
        if pt.x > self.maxx {
            self.maxx = pt.x;
        }
        if pt.y > self.maxy {
            self.maxy = pt.y;
        }
    }

    /// Grow this box to cover `other`. Invalid boxes contribute nothing.
    pub fn expand(&mut self, other: GeoMbr) {
        if !other.is_valid() {
            return;
        }
        self.add_point(coord! { x: other.minx, y: other.miny });
        self.add_point(coord! { x: other.maxx, y: other.maxy });
    }

    /// Inclusive containment test. Always false for invalid boxes.
    pub fn contains(&self, pt: Coord<f64>) -> bool {
        self.is_valid()
            && self.minx <= pt.x
            && pt.x <= self.maxx
            && self.miny <= pt.y
            && pt.y <= self.maxy
    }

    /// Center of the box. Meaningless for invalid boxes.
    pub fn middle(&self) -> Coord<f64> {
        coord! { x: (self.minx + self.maxx) / 2.0, y: (self.miny + self.maxy) / 2.0 }
    }

    /// Convert to a [`geo::Rect`], or `None` when the box is invalid.
    pub fn to_rect(&self) -> Option<Rect> {
        self.is_valid().then(|| {
            Rect::new(
                coord! { x: self.minx, y: self.miny },
                coord! { x: self.maxx, y: self.maxy },
            )
        })
    }
}

impl Default for GeoMbr {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_invalid() {
        let mbr = GeoMbr::new();
        assert!(!mbr.is_valid());
        assert!(mbr.to_rect().is_none());
        assert!(!mbr.contains(coord! { x: 0., y: 0. }));
    }

    #[test]
    fn add_and_contain() {
        let mut mbr = GeoMbr::new();
        mbr.add_point(coord! { x: -10., y: 5. });
        mbr.add_point(coord! { x: 20., y: -5. });
        assert!(mbr.is_valid());
        assert!(mbr.contains(coord! { x: 0., y: 0. }));
        assert!(mbr.contains(coord! { x: -10., y: 5. }));
        assert!(!mbr.contains(coord! { x: 21., y: 0. }));
        assert_eq!(mbr.middle(), coord! { x: 5., y: 0. });
    }

    #[test]
    fn expand_ignores_invalid() {
        let mut mbr = GeoMbr::from_points(&[coord! { x: 0., y: 0. }, coord! { x: 1., y: 1. }]);
        mbr.expand(GeoMbr::new());
        assert_eq!(mbr.maxx, 1.);

        mbr.expand(GeoMbr::from_points(&[coord! { x: 3., y: -2. }]));
        assert_eq!(mbr.maxx, 3.);
        assert_eq!(mbr.miny, -2.);
    }
}
