pub mod scene;
pub mod scene_host;
pub use scene::*;
pub use scene_host::*;
