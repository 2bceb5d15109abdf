use crate::bounding_volume::BoundingVolumeError;
use crate::math::{Point, Real};
use na;

/// Computes the geometric center (centroid) of a set of points.
///
/// All the points are weighted equally.
///
/// # Errors
///
/// Returns [`BoundingVolumeError::EmptyPointSet`] if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use boundkit2d::utils::center;
/// use boundkit2d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ];
///
/// let c = center(&points).unwrap();
/// assert!((c.x - 1.0).abs() < 1e-6);
/// assert!((c.y - 1.0).abs() < 1e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Result<Point<Real>, BoundingVolumeError> {
    let (first, rest) = pts
        .split_first()
        .ok_or(BoundingVolumeError::EmptyPointSet)?;

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));
    let mut res = *first * denom;

    for pt in rest {
        res += pt.coords * denom;
    }

    Ok(res)
}
