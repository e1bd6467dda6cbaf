//! compression/mod.rs
//! Per-chunk DEFLATE compression and decompression.
//!
//! Notes:
//! - Every chunk is an independent zlib stream; no state crosses record boundaries.
//! - Level is fixed per call (default 7), see `constants::DEFAULT_DEFLATE_LEVEL`.

pub mod types;
pub mod codecs;

pub use types::*;
pub use codecs::*;
