//! Bounding volumes.

use crate::math::Real;

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::rotatable_aabb::RotatableAabb;

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
pub use crate::bounding_volume::error::BoundingVolumeError;

/// The padding added to the radius of every bounding sphere built by this crate.
///
/// A bounding sphere never has a zero radius: this keeps containment tests on points
/// lying exactly on the sphere boundary from failing because of rounding errors.
/// Use the `*_with_epsilon` constructors of [`BoundingSphere`] to select another value.
pub const EPSILON: Real = 1.0e-5;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod aabb;
#[cfg(feature = "dim3")]
mod aabb_segment;
mod aabb_utils;
#[doc(hidden)]
pub mod rotatable_aabb;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_support;
mod bounding_sphere_utils;
mod error;

/// Free functions for some special cases of bounding-volume computation.
pub mod details {
    pub use super::aabb_utils::local_point_cloud_aabb;
    pub use super::bounding_sphere_utils::{
        approx_point_cloud_bounding_sphere, exact_point_cloud_bounding_sphere,
        point_cloud_bounding_sphere, point_cloud_bounding_sphere_with_center,
    };
}
