pub mod surface_definition;
pub mod tessellated_surface;
pub use surface_definition::*;
pub use tessellated_surface::*;
