use boundkit2d::bounding_volume::RotatableAabb;
use core::f32::consts::{FRAC_PI_2, FRAC_PI_6};
use na::{Point2, UnitComplex, Vector2};

#[test]
fn rotatable_aabb_quarter_turn() {
    let aabb = RotatableAabb::new(Point2::new(-2.0, -1.0), Point2::new(2.0, 1.0))
        .rotated(&UnitComplex::new(FRAC_PI_2));

    assert_relative_eq!(*aabb.mins(), Point2::new(-1.0, -2.0), epsilon = 1.0e-5);
    assert_relative_eq!(*aabb.maxs(), Point2::new(1.0, 2.0), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.volume(), 8.0, epsilon = 1.0e-4);
}

#[test]
fn rotatable_aabb_is_refitted_from_the_unrotated_box() {
    let mut aabb = RotatableAabb::new(Point2::new(-2.0, -1.0), Point2::new(2.0, 1.0));

    for _ in 0..3 {
        aabb.rotate(&UnitComplex::new(FRAC_PI_6));
    }

    // Three sixths of a half turn is a quarter turn.
    assert_relative_eq!(aabb.half_extents_to_max(), Vector2::new(1.0, 2.0), epsilon = 1.0e-4);
    assert_relative_eq!(aabb.rotation().angle(), FRAC_PI_2, epsilon = 1.0e-5);
}

#[test]
fn rotatable_aabb_scale_after_rotation() {
    let aabb = RotatableAabb::new(Point2::new(-2.0, -1.0), Point2::new(2.0, 1.0))
        .rotated(&UnitComplex::new(FRAC_PI_2))
        .scaled(&Vector2::new(2.0, 3.0));

    // The scale applies to the unrotated box, whose y axis is now along x.
    assert_eq!(aabb.unrotated_half_extents(), &Vector2::new(4.0, 3.0));
    assert_relative_eq!(aabb.half_extents_to_max(), Vector2::new(3.0, 4.0), epsilon = 1.0e-5);
}
