pub mod job;
pub mod progress;
pub mod scheduler_config;
pub mod tessellation_scheduler;
pub use job::*;
pub use progress::*;
pub use scheduler_config::*;
pub use tessellation_scheduler::*;
