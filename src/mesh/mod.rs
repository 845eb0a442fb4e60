pub mod coarse_mesh;
pub mod mesh;
pub use coarse_mesh::*;
pub use mesh::*;
