use nalgebra::Point2;

use crate::{
    error::{TessError, TessResult},
    knot::KnotVector,
    misc::FloatingPoint,
};

/// Canonical trimming curve in the parameter space of a surface
/// Every curve that reaches the tessellator is in this form
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimCurve<T: FloatingPoint> {
    degree: usize,
    knots: KnotVector<T>,
    control_points: Vec<Point2<T>>,
    /// one weight per control point
    weights: Vec<T>,
}

impl<T: FloatingPoint> TrimCurve<T> {
    /// Create a new trimming curve
    /// # Failures
    /// - if there are fewer than 2 control points or not more control points than the degree
    /// - if the number of weights differs from the number of control points
    /// - if the knot vector is decreasing somewhere
    pub fn try_new(
        degree: usize,
        knots: KnotVector<T>,
        control_points: Vec<Point2<T>>,
        weights: Vec<T>,
    ) -> TessResult<Self> {
        check_control_points(degree, control_points.len(), weights.len())?;
        if !knots.is_non_decreasing() {
            return Err(TessError::malformed("knot vector must be non-decreasing"));
        }
        Ok(Self {
            degree,
            knots,
            control_points,
            weights,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn knots(&self) -> &KnotVector<T> {
        &self.knots
    }

    pub fn control_points(&self) -> &[Point2<T>] {
        &self.control_points
    }

    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of logical control points
    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }
}

pub(crate) fn check_control_points(degree: usize, points: usize, weights: usize) -> TessResult<()> {
    if degree == 0 {
        return Err(TessError::malformed("degree must be at least 1"));
    }
    if points < 2 {
        return Err(TessError::malformed(format!(
            "at least 2 control points are required, got {}",
            points
        )));
    }
    if weights != points {
        return Err(TessError::malformed(format!(
            "invalid number of weights, got {}, expected {}",
            weights, points
        )));
    }
    if points <= degree {
        return Err(TessError::malformed(format!(
            "too few control points ({}) for degree {}",
            points, degree
        )));
    }
    Ok(())
}
