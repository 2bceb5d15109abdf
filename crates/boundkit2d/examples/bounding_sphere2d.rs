extern crate nalgebra as na;

use boundkit2d::bounding_volume::{BoundingSphere, BoundingVolume};
use na::Point2;

fn main() {
    let mut points = vec![
        Point2::new(-2.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(0.5, -1.5),
        Point2::new(-0.5, 0.2),
    ];

    let exact = BoundingSphere::exact(&mut points).expect("the point set isn't empty");
    let approx = BoundingSphere::approx(&points).expect("the point set isn't empty");
    println!("Exact circle: {:?}, radius {}", exact.center(), exact.radius());
    println!("Ritter circle: {:?}, radius {}", approx.center(), approx.radius());

    let circle1 = BoundingSphere::new(Point2::new(0.0, 0.0), 1.0);
    let circle2 = BoundingSphere::new(Point2::new(5.0, 0.0), 1.0);
    let merged = circle1.merged(&circle2);
    assert!(merged.contains(&circle1) && merged.contains(&circle2));
    println!("Merged circle: {:?}, radius {}", merged.center(), merged.radius());
}
