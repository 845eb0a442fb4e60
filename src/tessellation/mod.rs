pub mod surface_tessellation;
pub mod tessellator;
pub use surface_tessellation::*;
pub use tessellator::*;
