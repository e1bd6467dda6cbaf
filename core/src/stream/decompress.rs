//! stream/decompress.rs
//! UZ2 records -> raw bytes.
//!
//! The tag lives inside the first payload, so it can only be checked after
//! chunk 0 is inflated. `TagGate` holds that state: nothing reaches the sink
//! until the gate is verified.
use std::io::{Read, Write};

use crate::compression::{Decompressor, DeflateDecompressor};
use crate::constants::{FORMAT_TAG, TAG_LEN, UNCOMPRESSED_CHUNK_SIZE};
use crate::paths::Operation;
use crate::stream::core::CodecConfig;
use crate::stream::framing::RecordReader;
use crate::stream::io::{HashingReader, HashingWriter};
use crate::telemetry::{CodecReport, Stage, TelemetryCounters, TelemetryTimer};
use crate::types::{PartialOutput, Uz2Error};
use crate::utils::tag_window;

/// Deferred format-tag check for decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagGate {
    #[default]
    Pending,
    Verified,
}

impl TagGate {
    /// Check an inflated chunk. Only the first chunk is inspected; it must
    /// start with the exact tag.
    pub fn admit(&mut self, chunk: &[u8]) -> Result<(), Uz2Error> {
        match self {
            TagGate::Verified => Ok(()),
            TagGate::Pending => {
                if chunk.len() >= TAG_LEN && chunk[..TAG_LEN] == FORMAT_TAG {
                    *self = TagGate::Verified;
                    Ok(())
                } else {
                    Err(Uz2Error::tag_mismatch(tag_window(chunk)))
                }
            }
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, TagGate::Verified)
    }

    /// End of stream. A gate that never saw a chunk fails.
    pub fn finish(self) -> Result<(), Uz2Error> {
        match self {
            TagGate::Verified => Ok(()),
            TagGate::Pending => Err(Uz2Error::tag_mismatch(&[])),
        }
    }
}

/// Decompress a UZ2 stream from `input` into `output`.
///
/// Corrupt framing or DEFLATE data fails with a codec error; a well-formed
/// stream of the wrong content fails with `InvalidFormatTag` before anything
/// is written.
pub fn decompress_stream<R: Read, W: Write>(
    input: R,
    output: W,
    config: &CodecConfig,
) -> Result<CodecReport, Uz2Error> {
    config.validate()?;

    let mut timer = TelemetryTimer::new();
    let mut records = RecordReader::new(HashingReader::new(input, config.digest));
    let mut writer = HashingWriter::new(output, config.digest);
    let mut counters = TelemetryCounters::default();

    let run = pump_records(&mut records, &mut writer, &mut counters, &mut timer);
    if let Err(e) = run {
        return Err(e.with_partial(PartialOutput::new(writer.bytes_written(), counters.chunks)));
    }

    let written = writer.bytes_written();
    let output_digest = match writer.finish() {
        Ok((_, d)) => d,
        Err(e) => return Err(Uz2Error::io(e).with_partial(PartialOutput::new(written, counters.chunks))),
    };
    timer.finish();

    Ok(CodecReport::from_parts(
        Operation::Decompress,
        counters,
        &timer,
        records.into_inner().finish(),
        output_digest,
    ))
}

fn pump_records<R: Read, W: Write>(
    records: &mut RecordReader<R>,
    writer: &mut W,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<(), Uz2Error> {
    let mut inflater = DeflateDecompressor::new();
    let mut gate = TagGate::Pending;
    let mut chunk = Vec::with_capacity(UNCOMPRESSED_CHUNK_SIZE);

    while let Some(record) = timer.time(Stage::Read, || records.next_record())? {
        let expected = record.header.uncompressed_len as usize;

        chunk.clear();
        timer.time(Stage::Decompress, || inflater.decompress_chunk(&record.payload, expected, &mut chunk))?;
        timer.time(Stage::Validate, || gate.admit(&chunk))?;
        timer.time(Stage::Write, || writer.write_all(&chunk))?;

        counters.add_chunk(chunk.len(), record.payload.len());
    }

    gate.finish()
}
