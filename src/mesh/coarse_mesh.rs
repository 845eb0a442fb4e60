use std::sync::Arc;

use itertools::iproduct;

use crate::{
    error::{TessError, TessResult},
    misc::{CoordinateProvider, FloatingPoint},
};

use super::{Mesh, MeshProvenance, VertexSource};

/// Build the placeholder mesh of a surface directly over its control grid
/// Each grid cell is split into two triangles along the (i, j) -> (i + 1, j + 1) diagonal,
/// so a `u x v` grid yields `2 (u - 1) (v - 1)` triangles.
///
/// Vertices are the control points themselves, indexed `j * u_dimension + i`.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use nalgebra::Point3;
/// use trimtess::prelude::*;
///
/// let grid: Vec<Point3<f64>> = (0..12)
///     .map(|i| Point3::new((i % 4) as f64, (i / 4) as f64, 0.))
///     .collect();
/// let mesh = coarse_mesh(4, 3, Arc::new(grid)).unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn coarse_mesh<T: FloatingPoint>(
    u_dimension: usize,
    v_dimension: usize,
    control_points: Arc<dyn CoordinateProvider<T>>,
) -> TessResult<Mesh<T>> {
    if u_dimension < 2 || v_dimension < 2 {
        return Err(TessError::InvalidDimensions {
            u: u_dimension,
            v: v_dimension,
        });
    }

    let w = u_dimension as u32;
    let indices = iproduct!(0..v_dimension as u32 - 1, 0..w - 1)
        .flat_map(|(j, i)| {
            let a = j * w + i;
            let b = a + 1;
            let c = a + w;
            let d = c + 1;
            [a, b, d, a, d, c]
        })
        .collect();

    Ok(Mesh::new(
        indices,
        VertexSource::ControlPoints(control_points),
        MeshProvenance::Coarse,
    ))
}
