// Adapters layer: concrete implementations for files and the console.

pub mod input;
pub mod sinks;
