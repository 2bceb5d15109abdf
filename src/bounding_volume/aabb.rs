//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume, BoundingVolumeError};
use crate::math::{Isometry, Point, Real, Vector, DIM};
use crate::utils::RotationOps;
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. It's called "axis-aligned"
/// because its edges are always parallel to the coordinate axes of the frame it is
/// expressed in.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **offset**: The vector from the pivot of the bounded object (usually its local
///   origin) to the center of this box. This is what lets [`Aabb::scale`] scale the box
///   about the object's pivot rather than about the box center.
/// - **volume**: The cached volume (area in 2D), kept up-to-date by every operation.
///
/// The invariant `mins[i] <= maxs[i]` is checked by [`Aabb::is_valid`].
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use boundkit3d::bounding_volume::{Aabb, BoundingVolume};
/// use boundkit3d::math::{Point, Vector};
///
/// let mut aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
/// assert_eq!(aabb.volume(), 8.0);
///
/// aabb.scale(&Vector::new(2.0, 1.0, 1.0));
/// aabb.translate(&Vector::new(10.0, 0.0, 0.0));
///
/// assert_eq!(aabb.mins(), &Point::new(8.0, -1.0, -1.0));
/// assert_eq!(aabb.maxs(), &Point::new(12.0, 1.0, 1.0));
/// assert_eq!(aabb.volume(), 16.0);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    mins: Point<Real>,
    maxs: Point<Real>,
    offset: Vector<Real>,
    volume: Real,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// The pivot of the new box is its own center, i.e., its offset is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim2", feature = "f32"))] {
    /// use boundkit2d::bounding_volume::Aabb;
    /// use boundkit2d::math::{Point, Vector};
    ///
    /// let aabb = Aabb::new(Point::new(-1.0, 0.0), Point::new(1.0, 3.0));
    ///
    /// assert!(aabb.is_valid());
    /// assert_eq!(aabb.center(), Point::new(0.0, 1.5));
    /// assert_eq!(aabb.extents(), Vector::new(2.0, 3.0));
    /// assert_eq!(aabb.volume(), 6.0);
    /// # }
    /// ```
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Self::with_offset(mins, maxs, Vector::zeros())
    }

    /// Creates a new AABB from its corners and the vector from the bounded object pivot
    /// to the box center.
    #[inline]
    pub fn with_offset(mins: Point<Real>, maxs: Point<Real>, offset: Vector<Real>) -> Aabb {
        Aabb {
            mins,
            maxs,
            offset,
            volume: (maxs - mins).product(),
        }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any valid AABB into this one yields that valid AABB. This is useful as an
    /// initial value for merging algorithms (similar to starting a min operation with
    /// infinity).
    #[inline]
    pub fn new_invalid() -> Self {
        Aabb {
            mins: Vector::repeat(Real::MAX).into(),
            maxs: Vector::repeat(-Real::MAX).into(),
            offset: Vector::zeros(),
            volume: 0.0,
        }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    ///
    /// The points are assumed to be expressed relative to the pivot of the object they
    /// sample: the offset of the result is the coordinates of its center.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::EmptyPointSet`] if `pts` yields no point.
    pub fn from_points_ref<'a, I>(pts: I) -> Result<Self, BoundingVolumeError>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts.into_iter().copied())
    }

    /// Creates a new AABB that tightly encloses a set of points (values).
    ///
    /// The points are assumed to be expressed relative to the pivot of the object they
    /// sample: the offset of the result is the coordinates of its center.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingVolumeError::EmptyPointSet`] if `pts` yields no point.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use boundkit3d::bounding_volume::Aabb;
    /// use boundkit3d::math::{Point, Vector};
    ///
    /// let aabb = Aabb::from_points(vec![
    ///     Point::new(1.0, 2.0, 3.0),
    ///     Point::new(-1.0, 4.0, 2.0),
    ///     Point::new(0.0, 0.0, 5.0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(aabb.mins(), &Point::new(-1.0, 0.0, 2.0));
    /// assert_eq!(aabb.maxs(), &Point::new(1.0, 4.0, 5.0));
    /// assert_eq!(aabb.offset(), &Vector::new(0.0, 2.0, 3.5));
    /// assert!(Aabb::from_points(Vec::<Point<f32>>::new()).is_err());
    /// # }
    /// ```
    pub fn from_points<I>(pts: I) -> Result<Self, BoundingVolumeError>
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// The point with the smallest coordinates on each axis.
    #[inline]
    pub fn mins(&self) -> &Point<Real> {
        &self.mins
    }

    /// The point with the largest coordinates on each axis.
    #[inline]
    pub fn maxs(&self) -> &Point<Real> {
        &self.maxs
    }

    /// The vector from the pivot of the bounded object to the center of this AABB.
    #[inline]
    pub fn offset(&self) -> &Vector<Real> {
        &self.offset
    }

    /// Sets the vector from the pivot of the bounded object to the center of this AABB.
    #[inline]
    pub fn set_offset(&mut self, offset: Vector<Real>) {
        self.offset = offset;
    }

    /// The volume (area in 2D) of this AABB.
    ///
    /// This is a cached value: it is not recomputed from the corners.
    #[inline]
    pub fn volume(&self) -> Real {
        self.volume
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Returns the half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The pivot of the bounded object, i.e., `self.center() - self.offset()`.
    #[inline]
    pub fn pivot(&self) -> Point<Real> {
        self.center() - self.offset
    }

    /// Is `mins[i] <= maxs[i]` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// Moves the corners so this box has the given center and half-extents.
    ///
    /// Neither the offset nor the cached volume are updated.
    #[inline]
    pub(crate) fn set_center_and_half_extents(
        &mut self,
        center: Point<Real>,
        half_extents: Vector<Real>,
    ) {
        self.mins = center - half_extents;
        self.maxs = center + half_extents;
    }

    /// Recomputes the cached volume from the current corners.
    #[inline]
    pub(crate) fn reset_volume(&mut self) {
        self.volume = self.extents().product();
    }

    /// Translates this AABB by `translation`.
    ///
    /// The offset is a relative quantity and is left unchanged.
    #[inline]
    pub fn translate(&mut self, translation: &Vector<Real>) {
        self.mins += translation;
        self.maxs += translation;
    }

    /// Computes the AABB bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.translate(translation);
        self
    }

    /// Scales this AABB by `scale` with respect to the pivot of the bounded object.
    ///
    /// The offset is scaled as well, so that a box whose center isn't the object pivot
    /// moves as the object's geometry would. The scale can be non-uniform and/or negative:
    /// a negative factor mirrors the offset and has the same effect as its absolute value
    /// on the extents.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim2", feature = "f32"))] {
    /// use boundkit2d::bounding_volume::Aabb;
    /// use boundkit2d::math::{Point, Vector};
    ///
    /// // A box spanning [2, 4] along x, for an object whose pivot is the origin.
    /// let mut aabb = Aabb::with_offset(
    ///     Point::new(2.0, -1.0),
    ///     Point::new(4.0, 1.0),
    ///     Vector::new(3.0, 0.0),
    /// );
    /// aabb.scale(&Vector::new(2.0, 1.0));
    ///
    /// assert_eq!(aabb.mins(), &Point::new(4.0, -1.0));
    /// assert_eq!(aabb.maxs(), &Point::new(8.0, 1.0));
    /// assert_eq!(aabb.offset(), &Vector::new(6.0, 0.0));
    /// assert_eq!(aabb.volume(), 8.0);
    /// # }
    /// ```
    #[inline]
    pub fn scale(&mut self, scale: &Vector<Real>) {
        let pivot = self.pivot();
        self.offset.component_mul_assign(scale);
        // A negative scale would flip the half-extents. The box is symmetric wrt. its
        // center so the absolute value is valid.
        let half_extents = self.half_extents().component_mul(scale).abs();
        self.set_center_and_half_extents(pivot + self.offset, half_extents);
        self.volume *= scale.product().abs();
    }

    /// Computes the AABB bounding `self` scaled by `scale` wrt. the bounded object pivot.
    #[inline]
    #[must_use]
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.scale(scale);
        self
    }

    /// Scales this AABB by `scale`, and then translates it by `translation`.
    #[inline]
    pub fn transform(&mut self, translation: &Vector<Real>, scale: &Vector<Real>) {
        self.scale(scale);
        self.translate(translation);
    }

    /// Computes the AABB bounding `self` scaled by `scale`, and then translated by `translation`.
    #[inline]
    #[must_use]
    pub fn transformed(mut self, translation: &Vector<Real>, scale: &Vector<Real>) -> Self {
        self.transform(translation, scale);
        self
    }

    /// Computes the `Aabb` bounding `self` transformed by `m`.
    ///
    /// This is a loose fit: the result encloses the rotated box, not the rotated geometry.
    /// Use a [`RotatableAabb`](super::RotatableAabb) to keep a tight fit under successive
    /// rotations.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        let center = m * self.center();
        let ws_half_extents = m.absolute_transform_vector(&self.half_extents());

        Aabb::with_offset(
            center - ws_half_extents,
            center + ws_half_extents,
            m.rotation * self.offset,
        )
    }

    /// The volume of the AABB that would result from merging `self` and `other`.
    ///
    /// Neither AABB is modified.
    #[inline]
    pub fn merged_volume(&self, other: &Aabb) -> Real {
        let mins = self.mins.inf(&other.mins);
        let maxs = self.maxs.sup(&other.maxs);
        (maxs - mins).product()
    }

    /// The smallest bounding sphere containing this `Aabb`.
    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let center = self.center();
        let radius = na::distance(&self.mins, &self.maxs) * 0.5;
        BoundingSphere::new(center, radius)
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    /// Tests if the two AABBs overlap, touching boundaries included.
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Tests if `other` lies strictly inside of `self`.
    ///
    /// Boxes sharing a boundary are not contained into one another.
    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            if self.maxs[i] <= other.maxs[i] || self.mins[i] >= other.mins[i] {
                return false;
            }
        }

        true
    }

    /// Merges `other` into `self`.
    ///
    /// The pivot of `self` is preserved: its offset is updated to point to the new center.
    /// Merging into an invalid AABB (e.g. [`Aabb::new_invalid`]) copies `other`.
    #[inline]
    fn merge(&mut self, other: &Aabb) {
        if !self.is_valid() {
            *self = *other;
            return;
        }

        let pivot = self.pivot();
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
        self.offset = self.center() - pivot;
        self.reset_volume();
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
        self.reset_volume();
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        let mut res = *self;
        res.loosen(amount);
        res
    }
}
