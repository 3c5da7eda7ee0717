//! Loop area, area-weighted centroid and center of mass.
//!
//! Everything here is generic over [`CoordFloat`], which gives the single- and
//! double-precision variants from one implementation. Use `f64` whenever
//! accumulated rounding error matters (large coordinate magnitudes, many
//! points).

use geo::{coord, Coord, CoordFloat};

fn loop_edges<T: CoordFloat>(pts: &[Coord<T>]) -> impl Iterator<Item = (Coord<T>, Coord<T>)> + '_ {
    (0..pts.len()).map(|ii| (pts[ii], pts[(ii + 1) % pts.len()]))
}

/// Signed planar area of a loop via the shoelace formula.
///
/// Positive means the points wind counter-clockwise; callers use the sign to
/// tell outer loops from holes. Loops with fewer than three points have zero
/// area.
pub fn calc_loop_area<T: CoordFloat>(loop_pts: &[Coord<T>]) -> T {
    if loop_pts.len() < 3 {
        return T::zero();
    }
    let two = T::one() + T::one();
    let mut total = T::zero();
    for (p0, p1) in loop_edges(loop_pts) {
        total = total + (p0.x * p1.y - p1.x * p0.y);
    }
    total / two
}

/// Area-weighted centroid of a closed loop.
///
/// `None` for degenerate loops of area ≈ 0; fall back to
/// [`calc_center_of_mass`] for those.
pub fn calc_loop_centroid<T: CoordFloat>(loop_pts: &[Coord<T>]) -> Option<Coord<T>> {
    let area = calc_loop_area(loop_pts);
    if area.abs() <= T::epsilon() {
        return None;
    }
    let two = T::one() + T::one();
    let six = two * (two + T::one());
    let mut cx = T::zero();
    let mut cy = T::zero();
    for (p0, p1) in loop_edges(loop_pts) {
        let cross = p0.x * p1.y - p1.x * p0.y;
        cx = cx + (p0.x + p1.x) * cross;
        cy = cy + (p0.y + p1.y) * cross;
    }
    Some(coord! { x: cx / (six * area), y: cy / (six * area) })
}

/// Unweighted average of the point positions, distinct from the area centroid.
///
/// Usable where degenerate loops make the area centroid unusable. `None` only
/// for empty input.
pub fn calc_center_of_mass<T: CoordFloat>(loop_pts: &[Coord<T>]) -> Option<Coord<T>> {
    if loop_pts.is_empty() {
        return None;
    }
    let mut sum = coord! { x: T::zero(), y: T::zero() };
    for pt in loop_pts {
        sum = sum + *pt;
    }
    let count = T::from(loop_pts.len()).unwrap();
    Some(coord! { x: sum.x / count, y: sum.y / count })
}
