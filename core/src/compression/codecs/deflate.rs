//! Deflate (zlib wrapper) via flate2, one stream per chunk.

use std::io::{Read, Write};
use flate2::{Compression, write::ZlibEncoder, read::ZlibDecoder};

use crate::compression::types::{Compressor, Decompressor, CompressionError};
use crate::constants::{DEFAULT_DEFLATE_LEVEL, MAX_DEFLATE_LEVEL, UNCOMPRESSED_CHUNK_SIZE};

const CODEC: &str = "deflate";

fn process_failed(e: std::io::Error) -> CompressionError {
    CompressionError::CodecProcessFailed { codec: CODEC, msg: e.to_string() }
}

#[derive(Debug, Clone, Copy)]
pub struct DeflateCompressor {
    level: Compression,
}

impl DeflateCompressor {
    pub fn new(level: u32) -> Result<Self, CompressionError> {
        if level > MAX_DEFLATE_LEVEL {
            return Err(CompressionError::InvalidLevel { level, max: MAX_DEFLATE_LEVEL });
        }
        Ok(Self { level: Compression::new(level) })
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }
}

impl Default for DeflateCompressor {
    fn default() -> Self {
        Self { level: Compression::new(DEFAULT_DEFLATE_LEVEL) }
    }
}

impl Compressor for DeflateCompressor {
    fn compress_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.len() > UNCOMPRESSED_CHUNK_SIZE {
            return Err(CompressionError::ChunkTooLarge {
                have: input.len(),
                max: UNCOMPRESSED_CHUNK_SIZE,
            });
        }

        // Encode this chunk as its own zlib stream, straight into `out`
        let mut enc = ZlibEncoder::new(out, self.level);
        enc.write_all(input).map_err(process_failed)?;
        enc.finish().map_err(process_failed)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeflateDecompressor;

impl DeflateDecompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Decompressor for DeflateDecompressor {
    fn decompress_chunk(
        &mut self,
        input: &[u8],
        expected_len: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CompressionError> {
        let start = out.len();
        out.reserve(expected_len);

        // Read one byte past the declared size so an overlong payload is caught
        // without inflating the whole thing.
        let limit = expected_len as u64 + 1;
        let read = ZlibDecoder::new(input)
            .take(limit)
            .read_to_end(out);

        if let Err(e) = read {
            out.truncate(start);
            return Err(process_failed(e));
        }

        let actual = out.len() - start;
        if actual != expected_len {
            out.truncate(start);
            return Err(CompressionError::SizeMismatch { expected: expected_len, actual });
        }

        Ok(())
    }
}
