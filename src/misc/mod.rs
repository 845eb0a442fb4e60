pub mod coordinate_provider;
pub mod floating_point;

pub use coordinate_provider::*;
pub use floating_point::*;
