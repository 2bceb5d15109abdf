//! Axis Aligned Bounding Box that can be re-fitted after rotations.

use crate::bounding_volume::{Aabb, BoundingVolume, BoundingVolumeError};
use crate::math::{Point, Real, Rotation, Vector};
use crate::utils::RotationOps;

/// An AABB that stays tight when the box it bounds is rotated.
///
/// Besides its axis-aligned corners, a `RotatableAabb` remembers the half-extents the box
/// had before any rotation was applied to it, as well as the cumulative rotation applied
/// since. After each new rotation the corners are re-fitted exactly to the rotated box,
/// instead of growing as they would if the current AABB itself were rotated again and
/// again.
///
/// The re-fit encloses the *rotated box*, not the geometry that box was computed from: it
/// is as tight as an AABB of an oriented box can be, without having to scan the geometry
/// again.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use boundkit3d::bounding_volume::RotatableAabb;
/// use boundkit3d::math::{Point, Rotation, Vector};
///
/// let mut aabb = RotatableAabb::new(Point::new(-2.0, -1.0, -0.5), Point::new(2.0, 1.0, 0.5));
/// let quarter_turn = Rotation::from_axis_angle(&Vector::z_axis(), std::f32::consts::FRAC_PI_2);
///
/// aabb.rotate(&quarter_turn);
/// assert!((aabb.maxs() - Point::new(1.0, 2.0, 0.5)).norm() < 1.0e-5);
///
/// // Rotating back recovers the original box exactly: no growth accumulates.
/// aabb.rotate(&quarter_turn.inverse());
/// assert!((aabb.maxs() - Point::new(2.0, 1.0, 0.5)).norm() < 1.0e-5);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RotatableAabb {
    aabb: Aabb,
    unrotated_half_extents: Vector<Real>,
    rotation: Rotation<Real>,
}

impl RotatableAabb {
    /// Creates a new rotatable AABB from its minimum and maximum corners.
    ///
    /// The new box is not rotated, and its pivot is its own center.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Self {
        Self::from_aabb(Aabb::new(mins, maxs))
    }

    /// Creates a new rotatable AABB from its corners and the vector from the bounded
    /// object pivot to the box center.
    #[inline]
    pub fn with_offset(mins: Point<Real>, maxs: Point<Real>, offset: Vector<Real>) -> Self {
        Self::from_aabb(Aabb::with_offset(mins, maxs, offset))
    }

    /// Creates a new, not yet rotated, rotatable AABB with the same corners and offset as `aabb`.
    #[inline]
    pub fn from_aabb(aabb: Aabb) -> Self {
        RotatableAabb {
            aabb,
            unrotated_half_extents: aabb.half_extents(),
            rotation: Rotation::identity(),
        }
    }

    /// Creates a new rotatable AABB that tightly encloses a set of points (references).
    ///
    /// See [`Aabb::from_points_ref`].
    pub fn from_points_ref<'a, I>(pts: I) -> Result<Self, BoundingVolumeError>
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Aabb::from_points_ref(pts).map(Self::from_aabb)
    }

    /// Creates a new rotatable AABB that tightly encloses a set of points (values).
    ///
    /// See [`Aabb::from_points`].
    pub fn from_points<I>(pts: I) -> Result<Self, BoundingVolumeError>
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        Aabb::from_points(pts).map(Self::from_aabb)
    }

    /// The axis-aligned box currently bounding the rotated box.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The point with the smallest coordinates on each axis.
    #[inline]
    pub fn mins(&self) -> &Point<Real> {
        self.aabb.mins()
    }

    /// The point with the largest coordinates on each axis.
    #[inline]
    pub fn maxs(&self) -> &Point<Real> {
        self.aabb.maxs()
    }

    /// The vector from the pivot of the bounded object to the center of this AABB.
    #[inline]
    pub fn offset(&self) -> &Vector<Real> {
        self.aabb.offset()
    }

    /// The volume (area in 2D) of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        self.aabb.volume()
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.aabb.center()
    }

    /// The half-extents of the bounded box, before any rotation was applied to it.
    #[inline]
    pub fn unrotated_half_extents(&self) -> &Vector<Real> {
        &self.unrotated_half_extents
    }

    /// The cumulative rotation applied to this box since it was created or last merged.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.rotation
    }

    /// The half-diagonal of the smallest AABB enclosing the rotated box.
    ///
    /// This is the sum, over every axis `i`, of the componentwise absolute value of the
    /// box edge vector `unrotated_half_extents[i] * e_i` rotated by the cumulative rotation.
    #[inline]
    pub fn half_extents_to_max(&self) -> Vector<Real> {
        self.rotation
            .absolute_transform_vector(&self.unrotated_half_extents)
    }

    /// Re-fits the corners to the rotated box, centered at `pivot + offset`.
    fn refit(&mut self, pivot: Point<Real>, offset: Vector<Real>) {
        let half_extents = self.half_extents_to_max();
        self.aabb.set_offset(offset);
        self.aabb
            .set_center_and_half_extents(pivot + offset, half_extents);
        self.aabb.reset_volume();
    }

    /// Applies `rotation` after the current cumulative rotation.
    fn compose_rotation(&mut self, rotation: &Rotation<Real>) {
        self.rotation = rotation * self.rotation;
        self.rotation.renormalize_fast();
    }

    /// Forgets the rotation history: the current corners become the unrotated box.
    fn reset_rotation_history(&mut self) {
        self.unrotated_half_extents = self.aabb.half_extents();
        self.rotation = Rotation::identity();
    }

    /// Translates this AABB by `translation`.
    #[inline]
    pub fn translate(&mut self, translation: &Vector<Real>) {
        self.aabb.translate(translation);
    }

    /// Computes the rotatable AABB bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.translate(translation);
        self
    }

    /// Rotates the bounded box by `rotation` around the pivot of the bounded object.
    ///
    /// The rotation is applied after all the previous ones. The offset is rotated as well,
    /// so the box center orbits the pivot. The corners are then re-fitted to the rotated box.
    #[inline]
    pub fn rotate(&mut self, rotation: &Rotation<Real>) {
        self.compose_rotation(rotation);
        let pivot = self.aabb.pivot();
        let offset = rotation * self.aabb.offset();
        self.refit(pivot, offset);
    }

    /// Computes the rotatable AABB bounding `self` rotated by `rotation`.
    #[inline]
    #[must_use]
    pub fn rotated(mut self, rotation: &Rotation<Real>) -> Self {
        self.rotate(rotation);
        self
    }

    /// Scales the bounded box by `scale` with respect to the pivot of the bounded object.
    ///
    /// The scale is applied to the unrotated half-extents, so the corners are re-fitted to
    /// the scaled and rotated box. A negative factor has the same effect as its absolute
    /// value on the extents, and mirrors the offset.
    #[inline]
    pub fn scale(&mut self, scale: &Vector<Real>) {
        self.unrotated_half_extents = self.unrotated_half_extents.component_mul(scale).abs();
        let pivot = self.aabb.pivot();
        let offset = self.aabb.offset().component_mul(scale);
        self.refit(pivot, offset);
    }

    /// Computes the rotatable AABB bounding `self` scaled by `scale`.
    #[inline]
    #[must_use]
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.scale(scale);
        self
    }

    /// Scales, rotates, and then translates the bounded box, in a single re-fit.
    ///
    /// The scale is folded into the unrotated half-extents before the rotation is
    /// composed. The offset is scaled and then rotated.
    #[inline]
    pub fn transform(
        &mut self,
        translation: &Vector<Real>,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
    ) {
        self.unrotated_half_extents = self.unrotated_half_extents.component_mul(scale).abs();
        self.compose_rotation(rotation);
        let pivot = self.aabb.pivot();
        let offset = rotation * self.aabb.offset().component_mul(scale);
        self.refit(pivot, offset);
        self.aabb.translate(translation);
    }

    /// Computes the rotatable AABB bounding `self` scaled, rotated, and then translated.
    #[inline]
    #[must_use]
    pub fn transformed(
        mut self,
        translation: &Vector<Real>,
        scale: &Vector<Real>,
        rotation: &Rotation<Real>,
    ) -> Self {
        self.transform(translation, scale, rotation);
        self
    }

    /// The volume of the AABB that would result from merging `self` and `other`.
    #[inline]
    pub fn merged_volume(&self, other: &RotatableAabb) -> Real {
        self.aabb.merged_volume(&other.aabb)
    }
}

impl From<Aabb> for RotatableAabb {
    fn from(aabb: Aabb) -> Self {
        Self::from_aabb(aabb)
    }
}

impl BoundingVolume for RotatableAabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.aabb.center()
    }

    #[inline]
    fn intersects(&self, other: &RotatableAabb) -> bool {
        self.aabb.intersects(&other.aabb)
    }

    #[inline]
    fn contains(&self, other: &RotatableAabb) -> bool {
        self.aabb.contains(&other.aabb)
    }

    /// Merges `other` into `self`.
    ///
    /// The merged box has no rotation history: it is treated as a freshly fitted,
    /// unrotated, box. Subsequent rotations re-fit that axis-aligned box, which is
    /// looser than re-fitting either of the original rotated boxes.
    #[inline]
    fn merge(&mut self, other: &RotatableAabb) {
        self.aabb.merge(&other.aabb);
        self.reset_rotation_history();
    }

    #[inline]
    fn merged(&self, other: &RotatableAabb) -> RotatableAabb {
        let mut res = *self;
        res.merge(other);
        res
    }

    /// Enlarges this AABB by `amount` on every side.
    ///
    /// Like [`RotatableAabb::merge`], this drops the rotation history.
    #[inline]
    fn loosen(&mut self, amount: Real) {
        self.aabb.loosen(amount);
        self.reset_rotation_history();
    }

    #[inline]
    fn loosened(&self, amount: Real) -> RotatableAabb {
        let mut res = *self;
        res.loosen(amount);
        res
    }
}
