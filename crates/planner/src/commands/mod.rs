//! Command implementations for the planner CLI
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod import;
mod optimize;
mod validate;

pub use import::Import;
pub use optimize::Optimize;
pub use validate::Validate;
