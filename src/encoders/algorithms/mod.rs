pub mod ascii85;
pub mod chunked;
pub mod errors;
pub mod math;
pub mod radix;

// Re-export error types for public API
pub use errors::{ConfigError, DecodeError, FormatNotFoundError, find_closest_name};
