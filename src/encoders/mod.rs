pub mod algorithms;
pub mod codec;

// Re-export commonly used items
pub use algorithms::{ascii85, chunked, math, radix};
