use boundkit3d::bounding_volume::{Aabb, BoundingVolume, RotatableAabb};
use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use na::{Point3, Quaternion, UnitQuaternion, Vector3};

fn box_2_1_half() -> RotatableAabb {
    RotatableAabb::new(Point3::new(-2.0, -1.0, -0.5), Point3::new(2.0, 1.0, 0.5))
}

#[test]
fn rotatable_aabb_quarter_turn_around_z() {
    let mut aabb = box_2_1_half();
    let rotation = UnitQuaternion::from_quaternion(Quaternion::new(0.7071, 0.0, 0.0, 0.7071));
    aabb.rotate(&rotation);

    assert_relative_eq!(aabb.half_extents_to_max(), Vector3::new(1.0, 2.0, 0.5), epsilon = 1.0e-4);
    assert_relative_eq!(*aabb.mins(), Point3::new(-1.0, -2.0, -0.5), epsilon = 1.0e-4);
    assert_relative_eq!(*aabb.maxs(), Point3::new(1.0, 2.0, 0.5), epsilon = 1.0e-4);
    assert_relative_eq!(aabb.volume(), 8.0, epsilon = 1.0e-3);
    // The unrotated box is remembered.
    assert_eq!(aabb.unrotated_half_extents(), &Vector3::new(2.0, 1.0, 0.5));
}

#[test]
fn rotatable_aabb_identity_rotation_is_a_no_op() {
    let aabb = box_2_1_half();
    let rotated = aabb.rotated(&UnitQuaternion::identity());

    assert_eq!(rotated.mins(), aabb.mins());
    assert_eq!(rotated.maxs(), aabb.maxs());
    assert_eq!(rotated.volume(), aabb.volume());
}

#[test]
fn rotatable_aabb_eighth_turn_fits_the_rotated_box() {
    let aabb = box_2_1_half().rotated(&UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4));
    let half_diagonal = 3.0 * FRAC_PI_4.cos();

    assert_relative_eq!(
        aabb.half_extents_to_max(),
        Vector3::new(half_diagonal, half_diagonal, 0.5),
        epsilon = 1.0e-5
    );
}

#[test]
fn rotatable_aabb_doesnt_grow_under_repeated_rotations() {
    let mut aabb = box_2_1_half();
    let step = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4 / 4.0);

    // Sixteen steps of an eighth of a quarter turn: half a turn in total.
    for _ in 0..16 {
        aabb.rotate(&step);
    }

    assert_relative_eq!(*aabb.mins(), Point3::new(-2.0, -1.0, -0.5), epsilon = 1.0e-3);
    assert_relative_eq!(*aabb.maxs(), Point3::new(2.0, 1.0, 0.5), epsilon = 1.0e-3);

    // The same rotations applied to a plain AABB accumulate the looseness.
    let mut plain = Aabb::new(Point3::new(-2.0, -1.0, -0.5), Point3::new(2.0, 1.0, 0.5));
    let iso = na::Isometry3::from_parts(na::Translation3::identity(), step);
    for _ in 0..16 {
        plain = plain.transform_by(&iso);
    }
    assert!(plain.volume() > aabb.volume() * 2.0);
}

#[test]
fn rotatable_aabb_offset_orbits_the_pivot() {
    // The object pivot is at the origin, the box is centered at (3, 0, 0).
    let mut aabb = RotatableAabb::from_points([
        Point3::new(2.0, -1.0, -1.0),
        Point3::new(4.0, 1.0, 1.0),
    ])
    .unwrap();
    aabb.rotate(&UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2));

    assert_relative_eq!(*aabb.offset(), Vector3::new(0.0, 3.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.center(), Point3::new(0.0, 3.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.aabb().pivot(), Point3::origin(), epsilon = 1.0e-5);
}

#[test]
fn rotatable_aabb_transform_matches_successive_operations() {
    let aabb = box_2_1_half();
    let translation = Vector3::new(1.0, -2.0, 3.0);
    let scale = Vector3::new(2.0, 1.0, 4.0);
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), 0.3);

    let at_once = aabb.transformed(&translation, &scale, &rotation);
    let step_by_step = aabb
        .scaled(&scale)
        .rotated(&rotation)
        .translated(&translation);

    assert_relative_eq!(*at_once.mins(), *step_by_step.mins(), epsilon = 1.0e-4);
    assert_relative_eq!(*at_once.maxs(), *step_by_step.maxs(), epsilon = 1.0e-4);
    assert_relative_eq!(at_once.volume(), step_by_step.volume(), epsilon = 1.0e-2);
}

#[test]
fn rotatable_aabb_merge_forgets_the_rotation() {
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_4);
    let a = box_2_1_half().rotated(&rotation);
    let b = box_2_1_half().translated(&Vector3::new(10.0, 0.0, 0.0));
    let merged = a.merged(&b);

    assert_eq!(merged.rotation(), &UnitQuaternion::identity());
    assert_eq!(merged.unrotated_half_extents(), &merged.aabb().half_extents());
    assert_eq!(merged.aabb(), &a.aabb().merged(b.aabb()));
}

#[test]
fn rotatable_aabb_loosen() {
    let aabb = box_2_1_half().loosened(0.5);

    assert_eq!(aabb.mins(), &Point3::new(-2.5, -1.5, -1.0));
    assert_eq!(aabb.maxs(), &Point3::new(2.5, 1.5, 1.0));
    assert_eq!(aabb.volume(), 5.0 * 3.0 * 2.0);
    assert!(aabb.contains(&box_2_1_half()));
}
