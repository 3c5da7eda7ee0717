//! Display-surface projection consumed by the surface-deviation and
//! great-circle subdivision routines.

use geo::Coord;
use glam::DVec3;

/// Maps geographic points (lon/lat degrees) onto the display surface.
///
/// Subdivision only assumes the surface is smooth with bounded curvature, so
/// that halving an edge halves its deviation from the surface.
pub trait DisplayAdapter {
    /// Project a geographic point to its true display-space position.
    fn display_point(&self, geo_pt: Coord<f64>) -> DVec3;

    /// Flat display surfaces skip great-circle renormalization.
    fn is_flat(&self) -> bool {
        false
    }
}

/// Unit-sphere globe: lon/lat degrees map to a point on the sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobeDisplayAdapter;

impl DisplayAdapter for GlobeDisplayAdapter {
    fn display_point(&self, geo_pt: Coord<f64>) -> DVec3 {
        let lon = geo_pt.x.to_radians();
        let lat = geo_pt.y.to_radians();
        DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }
}

/// Flat map plane: degrees map straight to x/y, z stays 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaneDisplayAdapter;

impl DisplayAdapter for PlaneDisplayAdapter {
    fn display_point(&self, geo_pt: Coord<f64>) -> DVec3 {
        DVec3::new(geo_pt.x, geo_pt.y, 0.0)
    }

    fn is_flat(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use geo::coord;

    #[test]
    fn globe_projection() {
        let adapter = GlobeDisplayAdapter;
        let origin = adapter.display_point(coord! { x: 0., y: 0. });
        assert_relative_eq!(origin.x, 1.0);
        assert_relative_eq!(origin.y, 0.0);
        assert_relative_eq!(origin.z, 0.0);

        let pole = adapter.display_point(coord! { x: 45., y: 90. });
        assert_relative_eq!(pole.z, 1.0);
        assert_relative_eq!(pole.x, 0.0, epsilon = 1e-12);

        let anywhere = adapter.display_point(coord! { x: -122.4, y: 37.8 });
        assert_relative_eq!(anywhere.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn plane_projection() {
        let adapter = PlaneDisplayAdapter;
        assert!(adapter.is_flat());
        let pt = adapter.display_point(coord! { x: 3., y: -4. });
        assert_eq!(pt, DVec3::new(3., -4., 0.));
    }
}
