extern crate nalgebra as na;

use boundkit3d::bounding_volume::{BoundingSphere, BoundingVolume};
use na::{Point3, Vector3};
use oorandom::Rand32;

fn main() {
    let mut rng = Rand32::new(0);
    let mut points: Vec<_> = (0..1000)
        .map(|_| {
            Point3::new(
                rng.rand_float() * 4.0 - 2.0,
                rng.rand_float() * 2.0 - 1.0,
                rng.rand_float() - 0.5,
            )
        })
        .collect();

    /*
     * Compute the bounding spheres of the point cloud.
     */
    let approx = BoundingSphere::approx(&points).expect("the point set isn't empty");
    let centroid = BoundingSphere::from_centroid(&points).expect("the point set isn't empty");
    let exact = BoundingSphere::exact(&mut points).expect("the point set isn't empty");

    println!("Exact:    {:?}, radius {}", exact.center(), exact.radius());
    println!("Ritter:   {:?}, radius {}", approx.center(), approx.radius());
    println!("Centroid: {:?}, radius {}", centroid.center(), centroid.radius());

    let moved = exact.translated(&Vector3::new(10.0, 0.0, 0.0));
    let merged = exact.merged(&moved);
    assert!(merged.intersects(&exact) && merged.intersects(&moved));
    println!("Merged:   {:?}, radius {}", merged.center(), merged.radius());
}
