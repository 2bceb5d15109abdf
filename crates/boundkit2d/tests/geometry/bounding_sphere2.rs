use boundkit2d::bounding_volume::{BoundingSphere, BoundingVolume, EPSILON};
use na::{Point2, Vector2};
use oorandom::Rand32;

#[test]
fn bounding_circle_of_a_right_triangle() {
    // The hypotenuse is a diameter of the circumcircle.
    let mut pts = [
        Point2::new(0.0, 0.0),
        Point2::new(4.0, 0.0),
        Point2::new(0.0, 3.0),
    ];
    let circle = BoundingSphere::exact(&mut pts).unwrap();

    assert_relative_eq!(circle.center, Point2::new(2.0, 1.5), epsilon = 1.0e-4);
    assert_relative_eq!(circle.radius, 2.5 + EPSILON, epsilon = 1.0e-4);
}

#[test]
fn bounding_circle_of_an_obtuse_triangle() {
    // The circumcircle isn't minimal here: the longest side is.
    let mut pts = [
        Point2::new(-2.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(0.0, 0.5),
    ];
    let circle = BoundingSphere::exact(&mut pts).unwrap();

    assert_relative_eq!(circle.center, Point2::origin(), epsilon = 1.0e-4);
    assert_relative_eq!(circle.radius, 2.0 + EPSILON, epsilon = 1.0e-4);
}

#[test]
fn bounding_circle_exact_vs_approx() {
    let mut rng = Rand32::new(8);

    for _ in 0..20 {
        let pts: Vec<_> = (0..50)
            .map(|_| Point2::new(rng.rand_float() * 8.0 - 4.0, rng.rand_float() * 2.0))
            .collect();
        let exact = BoundingSphere::exact(&mut pts.clone()).unwrap();
        let approx = BoundingSphere::approx(&pts).unwrap();

        for pt in &pts {
            assert!(na::distance(&exact.center, pt) <= exact.radius + 1.0e-4);
            assert!(na::distance(&approx.center, pt) <= approx.radius + 1.0e-4);
        }
        assert!(approx.radius >= exact.radius - 1.0e-3);
    }
}

#[test]
fn bounding_circle_scale_and_loosen() {
    let circle = BoundingSphere::new(Point2::new(1.0, 1.0), 1.0)
        .scaled(&Vector2::new(-3.0, 2.0))
        .loosened(0.5);

    assert_eq!(circle.center, Point2::new(1.0, 1.0));
    assert_eq!(circle.radius, 3.5);
}
