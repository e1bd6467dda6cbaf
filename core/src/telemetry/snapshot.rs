//! telemetry/snapshot.rs
//!
//! The immutable result of one codec call.
//!
//! Design notes:
//! - `CodecReport` is what `compress`/`decompress` return on success.
//! - `bytes_in`/`bytes_out` are what the call read and wrote, whichever side is UZ2.
//! - Both digests are always present: input side and output side.
//! - `summary()` renders the short human block redirect tooling prints in verbose mode.

use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::{Deserialize, Serialize};

use crate::hashing::ContentDigest;
use crate::paths::Operation;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};
use crate::utils::ratio;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecReport {
    pub operation: Operation,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub chunks: u64,
    pub counters: TelemetryCounters,
    pub input_digest: ContentDigest,
    pub output_digest: ContentDigest,
    /// UZ2 bytes over raw bytes; 0.0 for an empty raw side.
    pub compression_ratio: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl CodecReport {
    pub fn from_parts(
        operation: Operation,
        counters: TelemetryCounters,
        timer: &TelemetryTimer,
        input_digest: ContentDigest,
        output_digest: ContentDigest,
    ) -> Self {
        let (bytes_in, bytes_out) = match operation {
            Operation::Compress   => (counters.bytes_raw, counters.container_bytes()),
            Operation::Decompress => (counters.container_bytes(), counters.bytes_raw),
        };

        Self {
            operation,
            input: None,
            output: None,
            bytes_in,
            bytes_out,
            chunks: counters.chunks,
            counters,
            input_digest,
            output_digest,
            compression_ratio: ratio(counters.container_bytes(), counters.bytes_raw),
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Attach the file paths (stream-level calls leave them unset).
    pub fn with_paths(mut self, input: &Path, output: &Path) -> Self {
        self.input = Some(input.to_path_buf());
        self.output = Some(output.to_path_buf());
        self
    }

    /// Digest of the uncompressed content, whichever side of the call it was on.
    pub fn raw_digest(&self) -> &ContentDigest {
        match self.operation {
            Operation::Compress   => &self.input_digest,
            Operation::Decompress => &self.output_digest,
        }
    }

    /// Digest of the UZ2 stream.
    pub fn container_digest(&self) -> &ContentDigest {
        match self.operation {
            Operation::Compress   => &self.output_digest,
            Operation::Decompress => &self.input_digest,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal consistency:
    /// - byte totals agree with the counters
    /// - framing overhead is 8 bytes per chunk
    /// - stage time never exceeds wall time
    pub fn sanity_check(&self) -> bool {
        let c = &self.counters;
        self.chunks == c.chunks
            && c.bytes_overhead == c.chunks * 8
            && self.bytes_in + self.bytes_out == c.bytes_raw + c.container_bytes()
            && self.total_stage_time() <= self.elapsed
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        expected.iter().all(|s| self.stage_times.contains(*s))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Three-line human summary:
    ///
    /// ```text
    /// BitCore.u compressed in 334.3411ms
    /// |-- SHA1: ee5015514aa3f641017606521cce4a2994fbf065
    /// `-- Size 7491kb -> 5531kb (ratio 0.74), chunk count: 235
    /// ```
    pub fn summary(&self) -> String {
        let name = self
            .input
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<stream>".to_string());
        let done = match self.operation {
            Operation::Compress   => "compressed",
            Operation::Decompress => "decompressed",
        };
        let digest = self.raw_digest();

        format!(
            "{} {} in {:?}\n|-- {}: {}\n`-- Size {}kb -> {}kb (ratio {:.2}), chunk count: {}",
            name,
            done,
            self.elapsed,
            digest.alg().name().to_ascii_uppercase(),
            digest,
            self.bytes_in / 1024,
            self.bytes_out / 1024,
            ratio(self.bytes_out, self.bytes_in),
            self.chunks,
        )
    }
}
