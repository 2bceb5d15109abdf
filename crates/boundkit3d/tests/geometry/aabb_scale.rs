use boundkit3d::bounding_volume::Aabb;
use na::{Point3, Vector3};

#[test]
fn test_aabb_scale_wrt_centered_pivot() {
    let aabb = Aabb::from_half_extents(Point3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
    let scale = Vector3::new(10.0, -20.0, 50.0);
    let scaled_aabb = aabb.scaled(&scale);
    let scaled_aabb_neg = aabb.scaled(&-scale);
    let scaled_aabb_abs = aabb.scaled(&scale.abs());

    assert_eq!(&scaled_aabb, &scaled_aabb_neg);
    assert_eq!(&scaled_aabb, &scaled_aabb_abs);
    assert_eq!(aabb.center(), scaled_aabb.center());
    assert_eq!(scaled_aabb.half_extents(), Vector3::new(40.0, 100.0, 300.0));
    assert_eq!(scaled_aabb.volume(), aabb.volume() * 10.0 * 20.0 * 50.0);
}

#[test]
fn test_aabb_scale_wrt_object_pivot() {
    // The object pivot is at the origin, the box spans [2, 4] along x.
    let aabb = Aabb::from_points([
        Point3::new(2.0, -1.0, -1.0),
        Point3::new(4.0, 1.0, 1.0),
    ])
    .unwrap();
    assert_eq!(aabb.offset(), &Vector3::new(3.0, 0.0, 0.0));

    let scaled = aabb.scaled(&Vector3::new(3.0, 1.0, 2.0));
    assert_eq!(scaled.mins(), &Point3::new(6.0, -1.0, -2.0));
    assert_eq!(scaled.maxs(), &Point3::new(12.0, 1.0, 2.0));
    assert_eq!(scaled.offset(), &Vector3::new(9.0, 0.0, 0.0));
    assert_eq!(scaled.pivot(), Point3::origin());
    assert_eq!(scaled.volume(), 48.0);
}

#[test]
fn test_aabb_scale_after_translation() {
    // Translating doesn't change the offset: the box is still scaled about the moved pivot.
    let aabb = Aabb::with_offset(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 2.0, 2.0),
        Vector3::new(1.0, 1.0, 1.0),
    );
    let translation = Vector3::new(10.0, 0.0, -5.0);
    let moved = aabb.translated(&translation);
    assert_eq!(moved.offset(), aabb.offset());
    assert_eq!(moved.pivot(), Point3::new(10.0, 0.0, -5.0));

    let scaled = moved.scaled(&Vector3::repeat(2.0));
    assert_eq!(scaled.mins(), &Point3::new(10.0, 0.0, -5.0));
    assert_eq!(scaled.maxs(), &Point3::new(14.0, 4.0, -1.0));
}

#[test]
fn test_aabb_transform_scales_then_translates() {
    let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let translation = Vector3::new(1.0, 2.0, 3.0);
    let scale = Vector3::new(2.0, 3.0, 4.0);

    let transformed = aabb.transformed(&translation, &scale);
    assert_eq!(transformed, aabb.scaled(&scale).translated(&translation));
    assert_eq!(transformed.center(), Point3::new(1.0, 2.0, 3.0));
    assert_eq!(transformed.half_extents(), scale);
    assert_eq!(transformed.volume(), 8.0 * 24.0);
}

#[test]
fn test_aabb_from_empty_point_set() {
    assert!(Aabb::from_points(Vec::<Point3<f32>>::new()).is_err());
    assert!(Aabb::from_points_ref(&[]).is_err());
}
