pub mod contour;
pub mod raw_trim_curve;
pub mod trim_curve;
pub use contour::*;
pub use raw_trim_curve::*;
pub use trim_curve::*;
