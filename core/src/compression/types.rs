//! compression/types.rs
//! Codec traits and errors.
use std::fmt;

#[derive(Debug)]
pub enum CompressionError {
    InvalidLevel { level: u32, max: u32 },
    ChunkTooLarge { have: usize, max: usize },
    CodecProcessFailed { codec: &'static str, msg: String },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CompressionError::*;
        match self {
            InvalidLevel { level, max } =>
                write!(f, "compression level {} out of range 0..={}", level, max),
            ChunkTooLarge { have, max } =>
                write!(f, "chunk too large: {} > {}", have, max),
            CodecProcessFailed { codec, msg } =>
                write!(f, "codec {} process failed: {}", codec, msg),
            SizeMismatch { expected, actual } =>
                write!(f, "decoded size {} != declared {}", actual, expected),
        }
    }
}

impl std::error::Error for CompressionError {}

// Require Send so a codec can live inside a worker thread.
pub trait Compressor: Send {
    /// Compress a single chunk, appending the payload to `out`.
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Inflate a single payload, appending exactly `expected_len` bytes to `out`.
    fn decompress_chunk(
        &mut self,
        input: &[u8],
        expected_len: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CompressionError>;
}
