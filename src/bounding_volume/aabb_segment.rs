use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, DIM};
use na;

impl Aabb {
    /// Tests if the segment `[a, b]` intersects this AABB.
    ///
    /// The segment endpoints are expressed in the same frame as `self`. This is a
    /// separating-axis test on the three face normals of the box and on the three cross
    /// products between the box axes and the segment direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(all(feature = "dim3", feature = "f32"))] {
    /// use boundkit3d::bounding_volume::Aabb;
    /// use boundkit3d::math::Point;
    ///
    /// let aabb = Aabb::new(Point::new(-1.0, -1.0, -1.0), Point::new(1.0, 1.0, 1.0));
    ///
    /// assert!(aabb.intersects_segment(&Point::new(-5.0, 0.0, 0.0), &Point::new(5.0, 0.0, 0.0)));
    /// assert!(!aabb.intersects_segment(&Point::new(5.0, 5.0, 5.0), &Point::new(6.0, 6.0, 6.0)));
    /// # }
    /// ```
    pub fn intersects_segment(&self, a: &Point<Real>, b: &Point<Real>) -> bool {
        let half_extents = self.half_extents();
        // Segment midpoint and half-direction, relative to the box center.
        let mid = na::center(a, b) - self.center();
        let half_dir: Vector<Real> = (b - a) * 0.5;
        // The epsilon counters rounding errors when the segment is (nearly) parallel to an axis.
        let abs_half_dir = half_dir.abs() + Vector::repeat(DEFAULT_EPSILON);

        for i in 0..DIM {
            if mid[i].abs() > half_extents[i] + abs_half_dir[i] {
                return false;
            }
        }

        for i in 0..DIM {
            let axis = Vector::ith(i, 1.0).cross(&half_dir);
            let abs_axis = Vector::ith(i, 1.0).cross(&abs_half_dir).abs();

            if axis.dot(&mid).abs() > abs_axis.dot(&half_extents) {
                return false;
            }
        }

        true
    }
}
