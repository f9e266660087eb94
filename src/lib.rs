//! Road network generator library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod config;
pub mod export;
pub mod palette;
pub mod roads;
pub mod sinks;
pub mod tilemap;
