pub mod config;
pub mod op;

pub use config::*;
pub use op::*;
