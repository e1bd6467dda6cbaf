use std::{fmt, io};
use bytes::Bytes;

use crate::constants::{MAX_COMPRESSED_CHUNK_SIZE, UNCOMPRESSED_CHUNK_SIZE};

/// Canonical chunk header (fixed size).
///
/// All fields are little-endian u32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// DEFLATE payload bytes that follow the header.
    pub compressed_len: u32,
    /// Bytes the payload expands to (last chunk may be < chunk size).
    pub uncompressed_len: u32,
}

impl ChunkHeader {
    pub const LEN: usize = 4  // compressed_len
        + 4;                  // uncompressed_len

    /// Build a header from buffer lengths, rejecting anything the format cannot carry.
    pub fn new(compressed_len: usize, uncompressed_len: usize) -> Result<Self, FrameError> {
        let header = Self {
            compressed_len: to_u32("compressed_len", compressed_len)?,
            uncompressed_len: to_u32("uncompressed_len", uncompressed_len)?,
        };
        header.validate()?;
        Ok(header)
    }

    /// Both lengths must be non-zero and within the chunk bounds.
    pub fn validate(&self) -> Result<(), FrameError> {
        check_bounds("compressed_len", self.compressed_len, MAX_COMPRESSED_CHUNK_SIZE)?;
        check_bounds("uncompressed_len", self.uncompressed_len, UNCOMPRESSED_CHUNK_SIZE)?;
        Ok(())
    }

    /// Header plus payload bytes on the wire.
    #[inline]
    pub fn record_len(&self) -> usize {
        Self::LEN + self.compressed_len as usize
    }
}

fn to_u32(field: &'static str, value: usize) -> Result<u32, FrameError> {
    u32::try_from(value).map_err(|_| FrameError::OutOfBounds {
        field,
        value: value as u64,
        max: u32::MAX as u64,
    })
}

fn check_bounds(field: &'static str, value: u32, max: usize) -> Result<(), FrameError> {
    if value == 0 || value as usize > max {
        return Err(FrameError::OutOfBounds { field, value: value as u64, max: max as u64 });
    }
    Ok(())
}

/// Borrowed record over a wire buffer.
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
    pub header: ChunkHeader,
    pub payload: &'a [u8],
}

/// Owned record, as produced by `RecordReader`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub header: ChunkHeader,
    pub payload: Bytes,
    /// Byte offset of the header within the stream.
    pub offset: u64,
}

#[derive(Debug)]
pub enum FrameError {
    OutOfBounds {
        field: &'static str,
        value: u64,
        max: u64,
    },
    LengthMismatch {
        expected: usize,
        actual: usize,
    },
    Truncated {
        offset: u64,
        needed: usize,
        got: usize,
    },
    Io(io::Error),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FrameError::*;
        match self {
            OutOfBounds { field, value, max } =>
                write!(f, "{} out of bounds: {} (allowed 1..={})", field, value, max),
            LengthMismatch { expected, actual } =>
                write!(f, "length mismatch: expected {}, got {}", expected, actual),
            Truncated { offset, needed, got } =>
                write!(f, "truncated record at offset {}: needed {} bytes, got {}", offset, needed, got),
            Io(e) =>
                write!(f, "read failed: {}", e),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FrameError {
    fn from(e: io::Error) -> Self {
        FrameError::Io(e)
    }
}
