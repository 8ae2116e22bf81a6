//! Position source implementations.

mod json;
mod memory;

pub use json::JsonPositionSource;
pub use memory::InMemoryPositionSource;
