use nalgebra::Point2;

use crate::{
    error::{TessError, TessResult},
    knot::KnotVector,
    misc::FloatingPoint,
};

use super::{trim_curve::check_control_points, TrimCurve};

/// Trimming curve as delivered by a trim source node
/// Degree and knots are optional: a bare polyline only carries points and weights
///
/// Control points are always counted as logical 2D points.
/// Use [`RawTrimCurve::try_from_flattened`] for `[x0, y0, x1, y1, ..]` buffers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTrimCurve<T: FloatingPoint> {
    pub degree: Option<usize>,
    pub knots: Option<Vec<T>>,
    pub control_points: Vec<Point2<T>>,
    pub weights: Vec<T>,
}

impl<T: FloatingPoint> RawTrimCurve<T> {
    pub fn new(control_points: Vec<Point2<T>>, weights: Vec<T>) -> Self {
        Self {
            degree: None,
            knots: None,
            control_points,
            weights,
        }
    }

    /// Create a polyline with unit weights
    pub fn polyline(points: &[Point2<T>]) -> Self {
        Self::new(points.to_vec(), vec![T::one(); points.len()])
    }

    /// Create a curve from a flattened coordinate buffer
    /// # Failures
    /// - if the buffer has an odd number of coordinates
    pub fn try_from_flattened(coordinates: &[T], weights: Vec<T>) -> TessResult<Self> {
        if coordinates.len() % 2 != 0 {
            return Err(TessError::malformed(format!(
                "flattened 2D buffer has an odd number of coordinates ({})",
                coordinates.len()
            )));
        }
        let control_points = coordinates
            .chunks_exact(2)
            .map(|c| Point2::new(c[0], c[1]))
            .collect();
        Ok(Self::new(control_points, weights))
    }

    pub fn with_degree(mut self, degree: usize) -> Self {
        self.degree = Some(degree);
        self
    }

    /// Set the degree from an order (`degree + 1`), an order of 0 means unset
    pub fn with_order(mut self, order: usize) -> Self {
        self.degree = order.checked_sub(1);
        self
    }

    pub fn with_knots(mut self, knots: Vec<T>) -> Self {
        self.knots = Some(knots);
        self
    }

    /// Normalize into a canonical [`TrimCurve`]
    /// A missing degree defaults to 1 (linear),
    /// a missing or empty knot vector is synthesized with [`KnotVector::clamped_uniform`].
    /// Supplied knots are kept as they are.
    ///
    /// # Example
    /// ```
    /// use trimtess::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let square = RawTrimCurve::polyline(&[
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 0.),
    ///     Point2::new(1., 1.),
    ///     Point2::new(0., 0.),
    /// ]);
    /// let curve = square.normalize().unwrap();
    /// assert_eq!(curve.degree(), 1);
    /// assert_eq!(curve.knots().to_vec(), vec![0., 0., 1., 2., 3., 4., 4.]);
    /// ```
    pub fn normalize(&self) -> TessResult<TrimCurve<T>> {
        let degree = self.degree.unwrap_or(1);
        let n = self.control_points.len();
        check_control_points(degree, n, self.weights.len())?;

        let knots = match self.knots.as_ref().filter(|k| !k.is_empty()) {
            Some(knots) => KnotVector::new(knots.clone()),
            None => KnotVector::clamped_uniform(n, degree).ok_or_else(|| {
                TessError::malformed(format!("too few control points ({}) for degree {}", n, degree))
            })?,
        };

        TrimCurve::try_new(
            degree,
            knots,
            self.control_points.clone(),
            self.weights.clone(),
        )
    }
}
