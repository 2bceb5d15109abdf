use boundkit2d::bounding_volume::{Aabb, BoundingVolume};
use na::{Point2, Vector2};

#[test]
fn test_aabb_scale_wrt_object_pivot() {
    let aabb = Aabb::from_points_ref(&[Point2::new(1.0, 1.0), Point2::new(3.0, 2.0)]).unwrap();
    assert_eq!(aabb.offset(), &Vector2::new(2.0, 1.5));
    assert_eq!(aabb.volume(), 2.0);

    let scaled = aabb.scaled(&Vector2::new(-2.0, 2.0));
    assert_eq!(scaled.mins(), &Point2::new(-6.0, 2.0));
    assert_eq!(scaled.maxs(), &Point2::new(-2.0, 4.0));
    assert_eq!(scaled.offset(), &Vector2::new(-4.0, 3.0));
    assert_eq!(scaled.volume(), 8.0);
}

#[test]
fn test_aabb_merge_preserves_the_pivot() {
    let a = Aabb::with_offset(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0), Vector2::new(1.0, 0.0));
    let b = Aabb::new(Point2::new(4.0, 0.0), Point2::new(6.0, 2.0));
    let merged = a.merged(&b);

    assert_eq!(merged.mins(), &Point2::new(0.0, 0.0));
    assert_eq!(merged.maxs(), &Point2::new(6.0, 2.0));
    assert_eq!(merged.pivot(), a.pivot());
    assert_eq!(merged.offset(), &Vector2::new(3.0, 0.0));
    assert_eq!(merged.volume(), 12.0);
}

#[test]
fn test_aabb_invalid_is_the_merge_identity() {
    let b = Aabb::new(Point2::new(4.0, 0.0), Point2::new(6.0, 2.0));
    let mut acc = Aabb::new_invalid();
    assert!(!acc.is_valid());

    acc.merge(&b);
    assert_eq!(acc, b);
}

#[test]
fn test_aabb_contains_and_intersects() {
    let outer = Aabb::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0));
    let inner = Aabb::new(Point2::new(-0.5, -0.5), Point2::new(0.5, 0.5));
    let apart = Aabb::new(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0));

    assert!(outer.contains(&inner));
    assert!(!inner.contains(&outer));
    assert!(outer.intersects(&inner) && inner.intersects(&outer));
    assert!(!outer.intersects(&apart) && !apart.intersects(&outer));
    assert!(outer.contains_local_point(&Point2::new(1.0, 0.0)));
    assert!(!outer.contains_local_point(&Point2::new(1.5, 0.0)));
}

#[test]
fn test_aabb_bounding_sphere() {
    let aabb = Aabb::new(Point2::new(0.0, 0.0), Point2::new(6.0, 8.0));
    let sphere = aabb.bounding_sphere();

    assert_eq!(sphere.center, Point2::new(3.0, 4.0));
    assert_eq!(sphere.radius, 5.0);
}
