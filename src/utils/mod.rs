//! Utility modules

pub mod display;
pub mod memory_directory;
pub mod validation;

pub use display::*;
pub use memory_directory::*;
pub use validation::*;
