//! Core building blocks: vector math, errors and logging.

// Macros first so the rest of the crate can use them.
#[macro_use]
pub mod log;
pub mod error;
pub mod vector;

pub use error::{EngineError, EngineResult};
pub use vector::Vector;
