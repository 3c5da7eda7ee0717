use geo::{coord, Coord};

use crate::shape::VectorRing;

/// Counter-clockwise unit square, not explicitly closed.
pub(crate) fn unit_square() -> VectorRing {
    vec![
        coord! { x: 0., y: 0. },
        coord! { x: 1., y: 0. },
        coord! { x: 1., y: 1. },
        coord! { x: 0., y: 1. },
    ]
}

pub(crate) fn unit_square_f32() -> Vec<Coord<f32>> {
    vec![
        coord! { x: 0., y: 0. },
        coord! { x: 1., y: 0. },
        coord! { x: 1., y: 1. },
        coord! { x: 0., y: 1. },
    ]
}

/// 4x4 outer square with a 1x1 hole around (2, 2).
pub(crate) fn square_loops_with_hole() -> Vec<VectorRing> {
    let outer = vec![
        coord! { x: 0., y: 0. },
        coord! { x: 4., y: 0. },
        coord! { x: 4., y: 4. },
        coord! { x: 0., y: 4. },
    ];
    let hole = vec![
        coord! { x: 1.5, y: 1.5 },
        coord! { x: 2.5, y: 1.5 },
        coord! { x: 2.5, y: 2.5 },
        coord! { x: 1.5, y: 2.5 },
    ];
    vec![outer, hole]
}
