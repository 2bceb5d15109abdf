use crate::math::{Isometry, Real, Rotation, Vector};

/// Extra operations with rotations.
pub trait RotationOps {
    /// Transform a vector by the absolute value of the rotation matrix equivalent to `self`.
    ///
    /// If `v` contains the (non-negative) half-extents of a box, the result contains the
    /// half-extents of the smallest axis-aligned box enclosing that box once rotated by
    /// `self`. This is the same as rotating each of the box edge vectors `v[i] * e_i`,
    /// taking their componentwise absolute values, and summing them.
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real>;
}

impl RotationOps for Rotation<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.to_rotation_matrix().into_inner().abs() * *v
    }
}

impl RotationOps for Isometry<Real> {
    #[inline]
    fn absolute_transform_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.absolute_transform_vector(v)
    }
}
