//! Bounding sphere.

use crate::bounding_volume::{BoundingVolume, BoundingVolumeError, EPSILON};
use crate::math::{Isometry, Point, Real, Vector};
use na;

#[cfg(feature = "dim3")]
use crate::bounding_volume::bounding_sphere_support::four_points_ball;
use crate::bounding_volume::bounding_sphere_support::{
    single_point_ball, three_points_ball, two_points_ball,
};
use crate::bounding_volume::bounding_sphere_utils;

/// A Bounding Sphere.
///
/// The radius of a bounding sphere is never smaller than [`EPSILON`]: the constructors
/// clamp it, and the ones computing a sphere from points pad it, so points lying on the
/// boundary are still reported as contained despite rounding errors.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of the sphere.
    pub center: Point<Real>,
    /// The radius of the sphere.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    ///
    /// The radius is clamped to be at least [`EPSILON`].
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius: radius.max(EPSILON),
        }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The bounding sphere of a single point: centered on it, with a radius of [`EPSILON`].
    #[inline]
    pub fn from_single_point(pt: &Point<Real>) -> BoundingSphere {
        single_point_ball(pt, EPSILON)
    }

    /// The smallest sphere enclosing two points, padded by [`EPSILON`].
    #[inline]
    pub fn from_two_points(a: &Point<Real>, b: &Point<Real>) -> BoundingSphere {
        two_points_ball(a, b, EPSILON)
    }

    /// The sphere (circle in 2D) passing through three points, padded by [`EPSILON`].
    ///
    /// In 3D this is the sphere centered on the circumcenter of the triangle `abc`, which
    /// is the smallest sphere having the three points on its boundary.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::DegenerateSupport`] if the three points are
    /// collinear (or two of them are the same).
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim2", feature = "f32"))] {
    /// use boundkit2d::bounding_volume::BoundingSphere;
    /// use boundkit2d::math::Point;
    ///
    /// let circle = BoundingSphere::from_three_points(
    ///     &Point::new(1.0, 0.0),
    ///     &Point::new(0.0, 1.0),
    ///     &Point::new(-1.0, 0.0),
    /// )
    /// .unwrap();
    /// assert!(circle.center().coords.norm() < 1.0e-5);
    /// assert!((circle.radius() - 1.0).abs() < 1.0e-4);
    ///
    /// let collinear = BoundingSphere::from_three_points(
    ///     &Point::new(0.0, 0.0),
    ///     &Point::new(1.0, 0.0),
    ///     &Point::new(2.0, 0.0),
    /// );
    /// assert!(collinear.is_err());
    /// # }
    /// ```
    #[inline]
    pub fn from_three_points(
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
    ) -> Result<BoundingSphere, BoundingVolumeError> {
        three_points_ball(a, b, c, EPSILON)
    }

    /// The sphere passing through four points, padded by [`EPSILON`].
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::DegenerateSupport`] if the four points are coplanar.
    #[cfg(feature = "dim3")]
    #[inline]
    pub fn from_four_points(
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
        d: &Point<Real>,
    ) -> Result<BoundingSphere, BoundingVolumeError> {
        four_points_ball(a, b, c, d, EPSILON)
    }

    /// Computes the minimal sphere enclosing all the given points, padded by [`EPSILON`].
    ///
    /// This is the move-to-front variant of Welzl's algorithm. Its expected running time is
    /// linear, but it is significantly slower than [`BoundingSphere::approx`] and is
    /// intended for precomputations (e.g. when importing a model), not per-frame updates.
    ///
    /// The points are reordered in-place: points that constrained the sphere are moved
    /// towards the front of the slice.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::EmptyPointSet`] if `pts` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use boundkit3d::bounding_volume::BoundingSphere;
    /// use boundkit3d::math::Point;
    ///
    /// let mut points = vec![
    ///     Point::new(-1.0, 0.0, 0.0),
    ///     Point::new(1.0, 0.0, 0.0),
    ///     Point::new(0.0, 0.5, 0.0),
    ///     Point::new(0.0, 0.0, -0.5),
    /// ];
    ///
    /// let sphere = BoundingSphere::exact(&mut points).unwrap();
    /// assert!(sphere.center().coords.norm() < 1.0e-5);
    /// assert!((sphere.radius() - 1.0).abs() < 1.0e-4);
    /// # }
    /// ```
    pub fn exact(pts: &mut [Point<Real>]) -> Result<BoundingSphere, BoundingVolumeError> {
        Self::exact_with_epsilon(pts, EPSILON)
    }

    /// Same as [`BoundingSphere::exact`], with the radius padded by `epsilon` instead of [`EPSILON`].
    pub fn exact_with_epsilon(
        pts: &mut [Point<Real>],
        epsilon: Real,
    ) -> Result<BoundingSphere, BoundingVolumeError> {
        bounding_sphere_utils::exact_point_cloud_bounding_sphere(pts, epsilon)
    }

    /// Computes a sphere enclosing all the given points with Ritter's algorithm.
    ///
    /// The result encloses every point but is usually a bit larger than the minimal
    /// enclosing sphere. It is computed with two linear passes over the points.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::EmptyPointSet`] if `pts` is empty.
    pub fn approx(pts: &[Point<Real>]) -> Result<BoundingSphere, BoundingVolumeError> {
        Self::approx_with_epsilon(pts, EPSILON)
    }

    /// Same as [`BoundingSphere::approx`], with the radius padded by `epsilon` instead of [`EPSILON`].
    pub fn approx_with_epsilon(
        pts: &[Point<Real>],
        epsilon: Real,
    ) -> Result<BoundingSphere, BoundingVolumeError> {
        bounding_sphere_utils::approx_point_cloud_bounding_sphere(pts, epsilon)
    }

    /// Computes a sphere centered on the centroid of the given points and enclosing all of them.
    ///
    /// This is the cheapest construction, but also the loosest.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::EmptyPointSet`] if `pts` is empty.
    pub fn from_centroid(pts: &[Point<Real>]) -> Result<BoundingSphere, BoundingVolumeError> {
        bounding_sphere_utils::point_cloud_bounding_sphere(pts)
    }

    /// Translates this bounding sphere by `translation`.
    #[inline]
    pub fn translate(&mut self, translation: &Vector<Real>) {
        self.center += translation;
    }

    /// Computes the bounding sphere bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.translate(translation);
        self
    }

    /// Scales the radius of this bounding sphere by the largest (in absolute value)
    /// component of `scale`.
    ///
    /// A sphere can't represent the ellipsoid resulting from a non-uniform scaling: the
    /// largest factor gives a sphere that still encloses the scaled geometry. The center
    /// is left unchanged, and the radius never shrinks below [`EPSILON`].
    #[inline]
    pub fn scale(&mut self, scale: &Vector<Real>) {
        self.radius = (self.radius * scale.abs().max()).max(EPSILON);
    }

    /// Computes the bounding sphere bounding `self` scaled by `scale`.
    #[inline]
    #[must_use]
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.scale(scale);
        self
    }

    /// Transforms this bounding sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> BoundingSphere {
        BoundingSphere {
            center: m * self.center,
            radius: self.radius,
        }
    }

    /// Does this sphere contain a point expressed in the same coordinate frame as `self`?
    ///
    /// Points lying exactly on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance_squared = delta_pos.norm_squared();
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    /// Replaces `self` by the smallest sphere enclosing both `self` and `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use boundkit3d::bounding_volume::{BoundingSphere, BoundingVolume};
    /// use boundkit3d::math::Point;
    ///
    /// let a = BoundingSphere::new(Point::new(0.0, 0.0, 0.0), 1.0);
    /// let b = BoundingSphere::new(Point::new(5.0, 0.0, 0.0), 1.0);
    /// let merged = a.merged(&b);
    ///
    /// assert_eq!(merged.center, Point::new(2.5, 0.0, 0.0));
    /// assert_eq!(merged.radius, 3.5);
    /// # }
    /// ```
    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let dir = other.center - self.center;
        let distance = dir.norm();

        if distance <= EPSILON {
            self.radius = self.radius.max(other.radius);
        } else if distance + other.radius <= self.radius {
            // `other` is already inside of `self`.
        } else if distance + self.radius <= other.radius {
            *self = *other;
        } else {
            let radius = (distance + self.radius + other.radius) * 0.5;
            self.center += dir * ((radius - self.radius) / distance);
            self.radius = radius;
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount;
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        let mut res = *self;
        res.loosen(amount);
        res
    }
}
