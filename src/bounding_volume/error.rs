/// Errors raised while building a bounding volume.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundingVolumeError {
    /// A bounding volume was requested for an empty set of points.
    #[error("cannot compute a bounding volume from an empty point set.")]
    EmptyPointSet,
    /// The given support points are affinely dependent (collinear, coplanar, or
    /// duplicated), so they don't define a unique circumscribed sphere.
    #[error("the {0} support points are affinely dependent: they have no unique circumsphere.")]
    DegenerateSupport(usize),
}
