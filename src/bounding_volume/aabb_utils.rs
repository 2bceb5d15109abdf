use crate::bounding_volume::{Aabb, BoundingVolumeError};
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// The points are assumed to be expressed relative to the pivot of the object they
/// sample, so the offset of the returned AABB is the coordinates of its center.
pub fn local_point_cloud_aabb<I>(pts: I) -> Result<Aabb, BoundingVolumeError>
where
    I: IntoIterator<Item = Point<Real>>,
{
    let mut it = pts.into_iter();

    let p0 = it.next().ok_or(BoundingVolumeError::EmptyPointSet)?;
    let mut min: Point<Real> = p0;
    let mut max: Point<Real> = p0;

    for pt in it {
        min = min.inf(&pt);
        max = max.sup(&pt);
    }

    let offset = na::center(&min, &max).coords;
    Ok(Aabb::with_offset(min, max, offset))
}
