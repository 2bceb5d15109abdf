use crate::bounding_volume::bounding_sphere_support::{
    degenerate_support_ball, support_ball, two_points_ball,
};
use crate::bounding_volume::{BoundingSphere, BoundingVolumeError, EPSILON};
use crate::math::*;
use crate::utils;
use arrayvec::ArrayVec;
use na::{self, ComplexField};

type SupportSet = ArrayVec<Point<Real>, MAX_SUPPORT_POINTS>;

/// Computes the bounding sphere of a set of points, given its center.
#[inline]
pub fn point_cloud_bounding_sphere_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    (center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding sphere of the specified set of points, centered on its centroid.
#[inline]
pub fn point_cloud_bounding_sphere(
    pts: &[Point<Real>],
) -> Result<BoundingSphere, BoundingVolumeError> {
    let (center, radius) = point_cloud_bounding_sphere_with_center(pts, utils::center(pts)?);
    Ok(BoundingSphere::new(center, radius + EPSILON))
}

/// Computes the minimal bounding sphere of a set of points, with Welzl's move-to-front
/// algorithm.
///
/// `pts` is reordered in-place. The returned radius is padded by `epsilon`.
pub fn exact_point_cloud_bounding_sphere(
    pts: &mut [Point<Real>],
    epsilon: Real,
) -> Result<BoundingSphere, BoundingVolumeError> {
    let n = pts.len();
    let mut support = SupportSet::new();
    move_to_front_ball(pts, n, &mut support, epsilon).ok_or(BoundingVolumeError::EmptyPointSet)
}

/// The minimal ball enclosing `pts[..end]` with all the points of `support` on its boundary.
///
/// Every point of `pts[..end]` found outside of the current ball becomes a new support
/// point for a recursive call on the points preceding it, and is then moved to the front
/// of the slice so later passes test it first.
fn move_to_front_ball(
    pts: &mut [Point<Real>],
    end: usize,
    support: &mut SupportSet,
    epsilon: Real,
) -> Option<BoundingSphere> {
    let mut ball = match support_ball(support, epsilon) {
        Ok(ball) => ball,
        Err(err) => {
            log::debug!("{err} Falling back to the smallest ball enclosing the support points.");
            Some(degenerate_support_ball(support, epsilon))
        }
    };

    if support.is_full() {
        return ball;
    }

    for i in 0..end {
        let pt = pts[i];

        if ball.map_or(true, |ball| !ball.contains_local_point(&pt)) {
            support.push(pt);
            ball = move_to_front_ball(pts, i, support, epsilon);
            let _ = support.pop();
            pts[..=i].rotate_right(1);
        }
    }

    ball
}

/// Computes a bounding sphere of a set of points with Ritter's algorithm.
///
/// The initial sphere is the sphere having as diameter the farthest pair among the points
/// with extremal coordinates along each axis. It is then grown to include every point lying
/// outside of it. The result encloses all the points but isn't minimal.
pub fn approx_point_cloud_bounding_sphere(
    pts: &[Point<Real>],
    epsilon: Real,
) -> Result<BoundingSphere, BoundingVolumeError> {
    let first = pts.first().ok_or(BoundingVolumeError::EmptyPointSet)?;

    // Stored as [min x, max x, min y, max y, ...].
    let mut extremes = [*first; 2 * DIM];

    for pt in pts {
        for i in 0..DIM {
            if pt[i] < extremes[2 * i][i] {
                extremes[2 * i] = *pt;
            }
            if pt[i] > extremes[2 * i + 1][i] {
                extremes[2 * i + 1] = *pt;
            }
        }
    }

    let mut farthest = (extremes[0], extremes[1]);
    let mut max_distance_squared = -1.0;

    for i in 0..extremes.len() {
        for j in i + 1..extremes.len() {
            let distance_squared = na::distance_squared(&extremes[i], &extremes[j]);

            if distance_squared > max_distance_squared {
                max_distance_squared = distance_squared;
                farthest = (extremes[i], extremes[j]);
            }
        }
    }

    let mut sphere = two_points_ball(&farthest.0, &farthest.1, epsilon);

    for pt in pts {
        let dir = pt - sphere.center;
        let distance = dir.norm();

        if distance > sphere.radius {
            let radius = (sphere.radius + distance) * 0.5;
            sphere.center += dir * ((radius - sphere.radius) / distance);
            sphere.radius = radius;
        }
    }

    Ok(sphere)
}
