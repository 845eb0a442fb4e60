mod error;
mod knot;
mod mesh;
mod misc;
mod payload;
mod pool;
mod scene;
mod scheduler;
mod surface;
mod tessellation;
mod trim;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::knot::*;
    pub use crate::mesh::*;
    pub use crate::misc::*;
    pub use crate::payload::*;
    pub use crate::pool::*;
    pub use crate::scene::*;
    pub use crate::scheduler::*;
    pub use crate::surface::*;
    pub use crate::tessellation::*;
    pub use crate::trim::*;
}
