extern crate nalgebra as na;

use boundkit3d::bounding_volume::{Aabb, BoundingVolume};
use na::{Point3, Vector3};

fn main() {
    /*
     * Initialize the boxes.
     */
    let aabb1 = Aabb::from_half_extents(Point3::new(0.0, 1.0, 0.0), Vector3::repeat(0.5));
    let aabb2 = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(1.0));
    let aabb3 = Aabb::from_half_extents(Point3::new(0.0, 3.0, 0.0), Vector3::repeat(0.5));

    assert!(aabb1.intersects(&aabb2));
    assert!(!aabb2.intersects(&aabb3));

    // Merge the boxes and enlarge the result.
    let bounding_aabb = aabb1.merged(&aabb2);
    let loose_aabb = bounding_aabb.loosened(1.0);

    assert!(loose_aabb.contains(&aabb1));
    assert!(loose_aabb.contains(&aabb2));
    assert!(!loose_aabb.contains(&aabb3));

    // Scale a box wrt. the pivot of the object it bounds.
    let aabb = Aabb::from_points([Point3::new(2.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0)])
        .expect("the point set isn't empty");
    let scaled = aabb.scaled(&Vector3::new(2.0, 1.0, 1.0));
    println!(
        "Scaled {:?} -> {:?} into {:?} -> {:?} (volume: {}).",
        aabb.mins(),
        aabb.maxs(),
        scaled.mins(),
        scaled.maxs(),
        scaled.volume()
    );

    // Segment overlap test.
    let hit = aabb2.intersects_segment(&Point3::new(-5.0, 0.0, 0.0), &Point3::new(5.0, 0.0, 0.0));
    println!("The segment intersects the box: {hit}");
}
