use glam::DVec3;

use crate::shape::{Triangle, VectorTriangles};

/// Unit square in the z = 0 plane as two triangles over four shared vertices.
pub(crate) fn quad_mesh() -> VectorTriangles {
    VectorTriangles::new(
        vec![
            DVec3::new(0., 0., 0.),
            DVec3::new(1., 0., 0.),
            DVec3::new(1., 1., 0.),
            DVec3::new(0., 1., 0.),
        ],
        vec![Triangle { pts: [0, 1, 2] }, Triangle { pts: [0, 2, 3] }],
    )
}
