extern crate nalgebra as na;

use boundkit2d::bounding_volume::{Aabb, BoundingVolume, RotatableAabb};
use na::{Point2, UnitComplex, Vector2};

fn main() {
    /*
     * Initialize the boxes.
     */
    let aabb1 = Aabb::from_half_extents(Point2::new(0.0, 1.0), Vector2::repeat(0.5));
    let aabb2 = Aabb::from_half_extents(Point2::origin(), Vector2::repeat(1.0));

    assert!(aabb1.intersects(&aabb2));

    let bounding_aabb = aabb1.merged(&aabb2);
    let loose_aabb = bounding_aabb.loosened(1.0);
    assert!(loose_aabb.contains(&aabb1) && loose_aabb.contains(&aabb2));
    println!(
        "Merged: {:?} -> {:?}, area {}",
        bounding_aabb.mins(),
        bounding_aabb.maxs(),
        bounding_aabb.volume()
    );

    // A rectangle spinning around its pivot.
    let mut rect = RotatableAabb::new(Point2::new(-2.0, -0.5), Point2::new(2.0, 0.5));
    for _ in 0..4 {
        rect.rotate(&UnitComplex::new(core::f32::consts::FRAC_PI_4));
        println!("{:?} -> {:?}", rect.mins(), rect.maxs());
    }
}
