//! stream/compress.rs
//! Raw bytes -> UZ2 records.
//!
//! The first chunk is read and tag-checked in `ChunkEncoder::open`, before any
//! sink exists, so a rejected input never produces output.
use std::io::{Read, Write};
use bytes::Bytes;

use crate::compression::{Compressor, DeflateCompressor};
use crate::constants::{MAX_COMPRESSED_CHUNK_SIZE, UNCOMPRESSED_CHUNK_SIZE};
use crate::hashing::DigestAlg;
use crate::paths::Operation;
use crate::stream::core::CodecConfig;
use crate::stream::framing::{write_record, ChunkHeader};
use crate::stream::io::{read_exact_or_eof, HashingReader, HashingWriter};
use crate::telemetry::{CodecReport, Stage, TelemetryCounters, TelemetryTimer};
use crate::types::{PartialOutput, Uz2Error};
use crate::utils::{carries_format_tag, tag_window};

/// A compress job whose input has passed the tag check.
#[derive(Debug)]
pub struct ChunkEncoder<R: Read> {
    reader: HashingReader<R>,
    first: Bytes,
    compressor: DeflateCompressor,
    digest: DigestAlg,
    timer: TelemetryTimer,
}

impl<R: Read> ChunkEncoder<R> {
    /// Read the first chunk and check the format tag.
    ///
    /// Fails with `InvalidFormatTag` when the first `TAG_LEN` bytes do not
    /// contain the tag; inputs shorter than that always fail.
    pub fn open(input: R, config: &CodecConfig) -> Result<Self, Uz2Error> {
        config.validate()?;
        let compressor = DeflateCompressor::new(config.level)?;

        let mut timer = TelemetryTimer::new();
        let mut reader = HashingReader::new(input, config.digest);

        let first = timer.time(Stage::Read, || read_exact_or_eof(&mut reader, UNCOMPRESSED_CHUNK_SIZE))?;
        if !timer.time(Stage::Validate, || carries_format_tag(&first)) {
            return Err(Uz2Error::tag_mismatch(tag_window(&first)));
        }

        Ok(Self { reader, first, compressor, digest: config.digest, timer })
    }

    /// The already-read first chunk.
    pub fn first_chunk(&self) -> &[u8] {
        &self.first
    }

    /// Stream every chunk into `output`.
    ///
    /// On failure the error carries how much had reached `output`.
    pub fn encode_into<W: Write>(self, output: W) -> Result<CodecReport, Uz2Error> {
        let Self { mut reader, first, mut compressor, digest, mut timer } = self;
        let mut writer = HashingWriter::new(output, digest);
        let mut counters = TelemetryCounters::default();

        let run = pump_chunks(
            &mut reader,
            &mut writer,
            &mut compressor,
            &mut counters,
            &mut timer,
            first,
        );
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
            Operation::Compress,
            counters,
            &timer,
            reader.finish(),
            output_digest,
        ))
    }
}

fn pump_chunks<R: Read, W: Write>(
    reader: &mut HashingReader<R>,
    writer: &mut HashingWriter<W>,
    compressor: &mut DeflateCompressor,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
    first: Bytes,
) -> Result<(), Uz2Error> {
    let mut payload = Vec::with_capacity(MAX_COMPRESSED_CHUNK_SIZE);
    let mut chunk = first;

    while !chunk.is_empty() {
        payload.clear();
        timer.time(Stage::Compress, || compressor.compress_chunk(&chunk, &mut payload))?;

        let header = ChunkHeader::new(payload.len(), chunk.len())?;
        timer.time(Stage::Write, || write_record(&mut *writer, &header, &payload))?;
        counters.add_chunk(chunk.len(), payload.len());

        // read_exact_or_eof only comes back short at end of input
        if chunk.len() < UNCOMPRESSED_CHUNK_SIZE {
            break;
        }
        chunk = timer.time(Stage::Read, || read_exact_or_eof(&mut *reader, UNCOMPRESSED_CHUNK_SIZE))?;
    }

    Ok(())
}

/// Compress `input` into `output` as a UZ2 stream.
pub fn compress_stream<R: Read, W: Write>(
    input: R,
    output: W,
    config: &CodecConfig,
) -> Result<CodecReport, Uz2Error> {
    ChunkEncoder::open(input, config)?.encode_into(output)
}
