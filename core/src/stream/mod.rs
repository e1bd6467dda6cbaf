//! UZ2 stream engine.
//!
//! Layers:
//! - `framing`: chunk record wire format
//! - `io`: chunked reads and hashing wrappers
//! - `compress` / `decompress`: Read -> Write transforms
//! - `core`: file-level API and config

pub mod framing;
pub mod io;
pub mod compress;
pub mod decompress;
pub mod core;

pub use compress::{compress_stream, ChunkEncoder};
pub use decompress::{decompress_stream, TagGate};
pub use self::core::{compress, decompress, CodecConfig, Uz2Codec};
