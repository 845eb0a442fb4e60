use std::fmt::Debug;

use nalgebra::Point3;

use super::FloatingPoint;

/// Source of a surface's control point coordinates.
///
/// The buffer is flattened over the control grid with `u` varying fastest,
/// so the point at `(u, v)` lives at `v * u_dimension + u`.
/// Tessellation only ever reads from a provider.
pub trait CoordinateProvider<T: FloatingPoint>: Debug + Send + Sync {
    fn points(&self) -> &[Point3<T>];

    fn len(&self) -> usize {
        self.points().len()
    }

    fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
}

impl<T: FloatingPoint> CoordinateProvider<T> for Vec<Point3<T>> {
    fn points(&self) -> &[Point3<T>] {
        self.as_slice()
    }
}
