use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Scalar of knots, weights and control point coordinates
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert a count or an index into a knot value
    fn from_count(n: usize) -> Self {
        convert(n as f64)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
