//! Various unsorted geometrical operators.

pub use self::center::center;
pub use self::rotation_ops::RotationOps;

mod center;
mod rotation_ops;
