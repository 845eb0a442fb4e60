pub mod tessellation_payload;
pub mod trim_curve_payload;
pub use tessellation_payload::*;
pub use trim_curve_payload::*;

#[cfg(feature = "serde")]
mod positional;
