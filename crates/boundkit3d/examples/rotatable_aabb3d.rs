extern crate nalgebra as na;

use boundkit3d::bounding_volume::{Aabb, RotatableAabb};
use na::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

fn main() {
    let mins = Point3::new(-2.0, -1.0, -0.5);
    let maxs = Point3::new(2.0, 1.0, 0.5);
    let step = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.1);
    let step_iso = Isometry3::from_parts(Translation3::identity(), step);

    let mut rotatable = RotatableAabb::new(mins, maxs);
    let mut plain = Aabb::new(mins, maxs);

    // Rotating a plain AABB over and over grows it. The rotatable one is re-fitted
    // to the rotated box instead.
    for i in 1..=32 {
        rotatable.rotate(&step);
        plain = plain.transform_by(&step_iso);

        if i % 8 == 0 {
            println!(
                "After {i} steps: rotatable volume = {:.3}, plain volume = {:.3}",
                rotatable.volume(),
                plain.volume()
            );
        }
    }

    rotatable.translate(&Vector3::new(0.0, 0.0, 10.0));
    println!(
        "Final rotatable AABB: {:?} -> {:?}",
        rotatable.mins(),
        rotatable.maxs()
    );
}
