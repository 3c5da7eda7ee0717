//! Point containment tests for rings, polygons with holes and 2D triangles.

use geo::Coord;

use crate::shape::VectorRing;

/// Odd-crossing-number test against a single ring.
///
/// The ring is treated as implicitly closed. Points exactly on an edge may
/// report either side.
pub fn point_in_ring(pt: Coord<f64>, ring: &[Coord<f64>]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut jj = ring.len() - 1;
    for ii in 0..ring.len() {
        let pi = ring[ii];
        let pj = ring[jj];
        if (pi.y > pt.y) != (pj.y > pt.y)
            && pt.x < (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        jj = ii;
    }
    inside
}

/// Polygon-with-holes containment: crossings aggregate with XOR across rings,
/// so a point inside the outer ring but also inside a hole tests outside.
pub fn point_in_polygon(pt: Coord<f64>, loops: &[VectorRing]) -> bool {
    loops
        .iter()
        .fold(false, |inside, ring| inside ^ point_in_ring(pt, ring))
}

/// Same-side sign test against one triangle in the plane.
pub fn point_in_triangle(pt: Coord<f64>, a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> bool {
    fn edge_sign(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> f64 {
        (p.x - r.x) * (q.y - r.y) - (q.x - r.x) * (p.y - r.y)
    }
    let d0 = edge_sign(pt, a, b);
    let d1 = edge_sign(pt, b, c);
    let d2 = edge_sign(pt, c, a);
    let any_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let any_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(any_neg && any_pos)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::ring::{square_loops_with_hole, unit_square};
    use geo::coord;

    #[test]
    fn ring_containment() {
        let square = unit_square();
        assert!(point_in_ring(coord! { x: 0.5, y: 0.5 }, &square));
        assert!(!point_in_ring(coord! { x: 1.5, y: 0.5 }, &square));
        assert!(!point_in_ring(coord! { x: -100., y: -100. }, &square));
    }

    #[test]
    fn short_ring_is_never_inside() {
        let segment = vec![coord! { x: 0., y: 0. }, coord! { x: 1., y: 0. }];
        assert!(!point_in_ring(coord! { x: 0.5, y: 0. }, &segment));
    }

    #[test]
    fn hole_excludes() {
        let loops = square_loops_with_hole();
        assert!(point_in_polygon(coord! { x: 0.5, y: 2.0 }, &loops));
        assert!(!point_in_polygon(coord! { x: 2.0, y: 2.0 }, &loops));
        assert!(!point_in_polygon(coord! { x: 9.0, y: 9.0 }, &loops));
    }

    #[test]
    fn triangle_sign_test() {
        let a = coord! { x: 0., y: 0. };
        let b = coord! { x: 2., y: 0. };
        let c = coord! { x: 0., y: 2. };
        assert!(point_in_triangle(coord! { x: 0.5, y: 0.5 }, a, b, c));
        assert!(!point_in_triangle(coord! { x: 1.5, y: 1.5 }, a, b, c));
        // winding should not matter
        assert!(point_in_triangle(coord! { x: 0.5, y: 0.5 }, c, b, a));
    }
}
