use std::sync::Arc;

use crate::{
    error::TessResult,
    misc::{CoordinateProvider, FloatingPoint},
    trim::{normalize_contours, Contour2D, TrimLoop},
};

/// Definition of a trimmed NURBS surface as it is handed to tessellation
/// Any change of a field means a new definition and a new tessellation job
#[derive(Clone, Debug)]
pub struct SurfaceDefinition<T: FloatingPoint> {
    /// number of control points in u direction
    pub u_dimension: usize,
    /// number of control points in v direction
    pub v_dimension: usize,
    /// order (`degree + 1`) in u direction
    pub u_order: usize,
    /// order (`degree + 1`) in v direction
    pub v_order: usize,
    pub u_knots: Vec<T>,
    pub v_knots: Vec<T>,
    /// control points flattened with u varying fastest
    pub control_points: Arc<dyn CoordinateProvider<T>>,
    pub weights: Vec<T>,
    /// tessellation density hint in u direction, 0 lets the tessellator decide
    pub u_tessellation: i32,
    /// tessellation density hint in v direction, 0 lets the tessellator decide
    pub v_tessellation: i32,
    /// no contours means the surface is untrimmed
    pub trimming_contours: Vec<Contour2D<T>>,
}

impl<T: FloatingPoint> SurfaceDefinition<T> {
    /// Create an untrimmed cubic surface over a `u_dimension x v_dimension` control grid
    pub fn new(
        u_dimension: usize,
        v_dimension: usize,
        control_points: Arc<dyn CoordinateProvider<T>>,
    ) -> Self {
        Self {
            u_dimension,
            v_dimension,
            u_order: 3,
            v_order: 3,
            u_knots: vec![],
            v_knots: vec![],
            control_points,
            weights: vec![],
            u_tessellation: 0,
            v_tessellation: 0,
            trimming_contours: vec![],
        }
    }

    pub fn with_orders(mut self, u_order: usize, v_order: usize) -> Self {
        self.u_order = u_order;
        self.v_order = v_order;
        self
    }

    pub fn with_knots(mut self, u_knots: Vec<T>, v_knots: Vec<T>) -> Self {
        self.u_knots = u_knots;
        self.v_knots = v_knots;
        self
    }

    pub fn with_weights(mut self, weights: Vec<T>) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_tessellation(mut self, u_tessellation: i32, v_tessellation: i32) -> Self {
        self.u_tessellation = u_tessellation;
        self.v_tessellation = v_tessellation;
        self
    }

    pub fn with_trimming_contours(mut self, contours: Vec<Contour2D<T>>) -> Self {
        self.trimming_contours = contours;
        self
    }

    pub fn is_trimmed(&self) -> bool {
        self.trimming_contours.iter().any(|c| !c.is_empty())
    }

    /// Normalize the trimming contours into trim loops
    pub fn trim_loops(&self) -> TessResult<Vec<TrimLoop<T>>> {
        normalize_contours(&self.trimming_contours)
    }
}
