//! telemetry/counters.rs
//! Mutable counters used during one codec call.
//!
//! Summary: collects chunk counts and byte counts while streaming.
//! Folded into an immutable `CodecReport` at the end of the call.
use std::ops::AddAssign;
use serde::{Deserialize, Serialize};

use crate::stream::framing::ChunkHeader;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Chunk records produced or consumed.
    pub chunks: u64,
    /// Uncompressed bytes across all chunks.
    pub bytes_raw: u64,
    /// DEFLATE payload bytes across all chunks.
    pub bytes_payload: u64,
    /// Framing bytes (8 per record).
    pub bytes_overhead: u64,
}

impl TelemetryCounters {
    /// Record one chunk.
    ///
    /// - `raw_len`: uncompressed chunk length
    /// - `payload_len`: compressed payload length
    pub fn add_chunk(&mut self, raw_len: usize, payload_len: usize) {
        self.chunks += 1;
        self.bytes_raw += raw_len as u64;
        self.bytes_payload += payload_len as u64;
        self.bytes_overhead += ChunkHeader::LEN as u64;
    }

    /// Size of the UZ2 side of the call: payloads plus framing.
    pub fn container_bytes(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.chunks         += rhs.chunks;
        self.bytes_raw      += rhs.bytes_raw;
        self.bytes_payload  += rhs.bytes_payload;
        self.bytes_overhead += rhs.bytes_overhead;
    }
}
