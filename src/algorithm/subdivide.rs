//! Edge subdivision: densify rings against a chord-length tolerance, a curved
//! display surface, or great-circle arcs in display space.
//!
//! Every routine takes an input ring, an output ring and a `closed` flag. When
//! `closed` is true the wrap-around edge (last point back to the first) is also
//! subject to splitting; the output never repeats the first point.

use geo::{coord, Coord};
use glam::DVec3;

use crate::adapter::DisplayAdapter;
use crate::shape::{VectorRing, VectorRing3d};

/// Split any edge longer than `max_len` into equal sub-segments no longer than
/// the limit. Returns whether any edge was split.
///
/// `max_len` is in the same units as the ring and must be greater than 0.
pub fn subdivide_edges(
    in_pts: &[Coord<f64>],
    out_pts: &mut VectorRing,
    closed: bool,
    max_len: f64,
) -> bool {
    if in_pts.is_empty() || max_len <= 0.0 {
        out_pts.extend_from_slice(in_pts);
        return false;
    }
    let mut split = false;
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let len = dx.hypot(dy);
        if len > max_len {
            let pieces = (len / max_len).ceil() as usize;
            for jj in 1..pieces {
                let t = jj as f64 / pieces as f64;
                out_pts.push(coord! { x: p0.x + dx * t, y: p0.y + dy * t });
            }
            split = true;
        }
    }
    if !closed {
        out_pts.push(in_pts[in_pts.len() - 1]);
    }
    split
}

/// 3D variant of [`subdivide_edges`].
pub fn subdivide_edges_3d(
    in_pts: &[DVec3],
    out_pts: &mut VectorRing3d,
    closed: bool,
    max_len: f64,
) -> bool {
    if in_pts.is_empty() || max_len <= 0.0 {
        out_pts.extend_from_slice(in_pts);
        return false;
    }
    let mut split = false;
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        let len = p0.distance(p1);
        if len > max_len {
            let pieces = (len / max_len).ceil() as usize;
            for jj in 1..pieces {
                out_pts.push(p0.lerp(p1, jj as f64 / pieces as f64));
            }
            split = true;
        }
    }
    if !closed {
        out_pts.push(in_pts[in_pts.len() - 1]);
    }
    split
}

/// Recursively split edges wherever the straight chord between the projected
/// endpoints strays more than `eps` from the projected surface. Output stays in
/// geographic coordinates.
///
/// `eps` is a display-space distance and must be greater than 0; termination
/// relies on the adapter's surface being smooth with bounded curvature.
pub fn subdivide_edges_to_surface(
    in_pts: &[Coord<f64>],
    out_pts: &mut VectorRing,
    closed: bool,
    adapter: &dyn DisplayAdapter,
    eps: f64,
) {
    if in_pts.is_empty() {
        return;
    }
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        surface_recurse(p0, p1, adapter, eps, out_pts);
    }
    if !closed {
        out_pts.push(in_pts[in_pts.len() - 1]);
    }
}

fn surface_recurse(
    p0: Coord<f64>,
    p1: Coord<f64>,
    adapter: &dyn DisplayAdapter,
    eps: f64,
    out_pts: &mut VectorRing,
) {
    let mid = coord! { x: (p0.x + p1.x) / 2.0, y: (p0.y + p1.y) / 2.0 };
    let surface_mid = adapter.display_point(mid);
    let chord_mid = (adapter.display_point(p0) + adapter.display_point(p1)) / 2.0;
    if (chord_mid - surface_mid).length() > eps {
        surface_recurse(p0, mid, adapter, eps, out_pts);
        out_pts.push(mid);
        surface_recurse(mid, p1, adapter, eps, out_pts);
    }
}

/// 3D variant of [`subdivide_edges_to_surface`]. Points are (lon, lat, z); the
/// deviation test uses the projected lon/lat while z interpolates linearly.
pub fn subdivide_edges_to_surface_3d(
    in_pts: &[DVec3],
    out_pts: &mut VectorRing3d,
    closed: bool,
    adapter: &dyn DisplayAdapter,
    eps: f64,
) {
    if in_pts.is_empty() {
        return;
    }
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = in_pts[ii];
        let p1 = in_pts[(ii + 1) % in_pts.len()];
        out_pts.push(p0);
        surface_recurse_3d(p0, p1, adapter, eps, out_pts);
    }
    if !closed {
        out_pts.push(in_pts[in_pts.len() - 1]);
    }
}

fn surface_recurse_3d(
    p0: DVec3,
    p1: DVec3,
    adapter: &dyn DisplayAdapter,
    eps: f64,
    out_pts: &mut VectorRing3d,
) {
    let mid = (p0 + p1) / 2.0;
    let surface_mid = adapter.display_point(coord! { x: mid.x, y: mid.y });
    let chord_mid = (adapter.display_point(coord! { x: p0.x, y: p0.y })
        + adapter.display_point(coord! { x: p1.x, y: p1.y }))
        / 2.0;
    if (chord_mid - surface_mid).length() > eps {
        surface_recurse_3d(p0, mid, adapter, eps, out_pts);
        out_pts.push(mid);
        surface_recurse_3d(mid, p1, adapter, eps, out_pts);
    }
}

/// Great-circle subdivision: projects the ring into display space and emits
/// points along the great-circle arc between the projected endpoints.
///
/// At least `min_pts` interpolated points are generated per edge regardless of
/// deviation, and every output point sits `sphere_offset` above the unit
/// sphere. Flat adapters interpolate linearly instead of along an arc.
pub fn subdivide_edges_to_surface_gc(
    in_pts: &[Coord<f64>],
    out_pts: &mut VectorRing3d,
    closed: bool,
    adapter: &dyn DisplayAdapter,
    eps: f64,
    sphere_offset: f64,
    min_pts: usize,
) {
    if in_pts.is_empty() {
        return;
    }
    let num_edges = if closed { in_pts.len() } else { in_pts.len() - 1 };
    for ii in 0..num_edges {
        let p0 = on_arc(adapter.display_point(in_pts[ii]), adapter, sphere_offset);
        let p1 = on_arc(
            adapter.display_point(in_pts[(ii + 1) % in_pts.len()]),
            adapter,
            sphere_offset,
        );
        out_pts.push(p0);
        gc_recurse(p0, p1, adapter, eps, sphere_offset, min_pts, out_pts);
    }
    if !closed {
        out_pts.push(on_arc(
            adapter.display_point(in_pts[in_pts.len() - 1]),
            adapter,
            sphere_offset,
        ));
    }
}

/// Renormalize a display point onto the offset sphere. Flat surfaces and
/// degenerate (near-origin) points pass through unchanged.
fn on_arc(pt: DVec3, adapter: &dyn DisplayAdapter, sphere_offset: f64) -> DVec3 {
    if adapter.is_flat() {
        return pt;
    }
    match pt.try_normalize() {
        Some(dir) => dir * (1.0 + sphere_offset),
        None => pt,
    }
}

fn gc_recurse(
    p0: DVec3,
    p1: DVec3,
    adapter: &dyn DisplayAdapter,
    eps: f64,
    sphere_offset: f64,
    min_pts: usize,
    out_pts: &mut VectorRing3d,
) {
    let chord_mid = (p0 + p1) / 2.0;
    let arc_mid = on_arc(chord_mid, adapter, sphere_offset);
    if (arc_mid - chord_mid).length() > eps || min_pts > 0 {
        gc_recurse(p0, arc_mid, adapter, eps, sphere_offset, min_pts / 2, out_pts);
        out_pts.push(arc_mid);
        gc_recurse(arc_mid, p1, adapter, eps, sphere_offset, min_pts / 2, out_pts);
    }
}
