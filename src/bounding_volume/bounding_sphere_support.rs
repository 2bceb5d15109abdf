//! Bounding spheres fully determined by up to `DIM + 1` support points.

use crate::bounding_volume::{BoundingSphere, BoundingVolumeError};
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use na;

pub(crate) fn single_point_ball(pt: &Point<Real>, epsilon: Real) -> BoundingSphere {
    BoundingSphere {
        center: *pt,
        radius: epsilon,
    }
}

pub(crate) fn two_points_ball(a: &Point<Real>, b: &Point<Real>, epsilon: Real) -> BoundingSphere {
    let center = na::center(a, b);
    BoundingSphere {
        center,
        radius: na::distance(&center, a) + epsilon,
    }
}

fn ball_around(origin: &Point<Real>, to_center: Vector<Real>, epsilon: Real) -> BoundingSphere {
    BoundingSphere {
        center: origin + to_center,
        radius: to_center.norm() + epsilon,
    }
}

/// The circumcircle of the triangle `abc`.
#[cfg(feature = "dim2")]
pub(crate) fn three_points_ball(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    epsilon: Real,
) -> Result<BoundingSphere, BoundingVolumeError> {
    let ab = b - a;
    let ac = c - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let perp = ab.perp(&ac);

    // perp² = |ab|² |ac|² sin²(angle between ab and ac).
    if perp * perp <= DEFAULT_EPSILON * ab2 * ac2 {
        return Err(BoundingVolumeError::DegenerateSupport(3));
    }

    let to_center = Vector::new(ac.y * ab2 - ab.y * ac2, ab.x * ac2 - ac.x * ab2) / (perp * 2.0);
    Ok(ball_around(a, to_center, epsilon))
}

/// The sphere centered on the circumcenter of the triangle `abc`.
#[cfg(feature = "dim3")]
pub(crate) fn three_points_ball(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    epsilon: Real,
) -> Result<BoundingSphere, BoundingVolumeError> {
    let ab = b - a;
    let ac = c - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let normal = ab.cross(&ac);
    let normal2 = normal.norm_squared();

    // |normal|² = |ab|² |ac|² sin²(angle between ab and ac).
    if normal2 <= DEFAULT_EPSILON * ab2 * ac2 {
        return Err(BoundingVolumeError::DegenerateSupport(3));
    }

    let to_center = (normal.cross(&ab) * ac2 + ac.cross(&normal) * ab2) / (normal2 * 2.0);
    Ok(ball_around(a, to_center, epsilon))
}

/// The circumsphere of the tetrahedron `abcd`.
#[cfg(feature = "dim3")]
pub(crate) fn four_points_ball(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    epsilon: Real,
) -> Result<BoundingSphere, BoundingVolumeError> {
    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ab2 = ab.norm_squared();
    let ac2 = ac.norm_squared();
    let ad2 = ad.norm_squared();
    let det = ab.dot(&ac.cross(&ad));

    // det² = 36 * volume² is compared to the squared volume of the box spanned by the edges.
    if det * det <= DEFAULT_EPSILON * ab2 * ac2 * ad2 {
        return Err(BoundingVolumeError::DegenerateSupport(4));
    }

    let to_center =
        (ac.cross(&ad) * ab2 + ad.cross(&ab) * ac2 + ab.cross(&ac) * ad2) / (det * 2.0);
    Ok(ball_around(a, to_center, epsilon))
}

/// The sphere fully determined by the given support points.
///
/// Returns `Ok(None)` if `support` is empty.
pub(crate) fn support_ball(
    support: &[Point<Real>],
    epsilon: Real,
) -> Result<Option<BoundingSphere>, BoundingVolumeError> {
    match support {
        [] => Ok(None),
        [a] => Ok(Some(single_point_ball(a, epsilon))),
        [a, b] => Ok(Some(two_points_ball(a, b, epsilon))),
        [a, b, c] => three_points_ball(a, b, c, epsilon).map(Some),
        #[cfg(feature = "dim3")]
        [a, b, c, d] => four_points_ball(a, b, c, d, epsilon).map(Some),
        _ => Err(BoundingVolumeError::DegenerateSupport(support.len())),
    }
}

/// The smallest ball, among the balls determined by subsets of `support`, that
/// encloses every support point.
///
/// This is used when `support` itself is affinely dependent. A sphere centered on the
/// centroid is returned if no subset works, which only happens with non-finite inputs.
pub(crate) fn degenerate_support_ball(support: &[Point<Real>], epsilon: Real) -> BoundingSphere {
    let encloses_support = |ball: &BoundingSphere| {
        support
            .iter()
            .all(|pt| na::distance(&ball.center, pt) <= ball.radius + epsilon)
    };
    let mut best: Option<BoundingSphere> = None;
    let mut consider = |ball: BoundingSphere| {
        if encloses_support(&ball) && best.map_or(true, |best| ball.radius < best.radius) {
            best = Some(ball);
        }
    };

    let n = support.len();
    for i in 0..n {
        for j in i + 1..n {
            consider(two_points_ball(&support[i], &support[j], epsilon));

            for k in j + 1..n {
                if let Ok(ball) = three_points_ball(&support[i], &support[j], &support[k], epsilon)
                {
                    consider(ball);
                }
            }
        }
    }

    best.unwrap_or_else(|| centroid_ball(support, epsilon))
}

/// The ball centered on the centroid of `support` and enclosing all of its points.
///
/// An empty `support` gives the ball of radius `epsilon` centered at the origin.
fn centroid_ball(support: &[Point<Real>], epsilon: Real) -> BoundingSphere {
    let sum = support
        .iter()
        .fold(Vector::zeros(), |sum, pt| sum + pt.coords);
    let center = Point::from(sum / (support.len().max(1) as Real));
    let (center, radius) =
        super::bounding_sphere_utils::point_cloud_bounding_sphere_with_center(support, center);

    BoundingSphere {
        center,
        radius: radius + epsilon,
    }
}
