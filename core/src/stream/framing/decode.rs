use std::io::Read;
use byteorder::{ByteOrder, LittleEndian};

use crate::stream::framing::types::{ChunkHeader, FrameError, Record, RecordView};
use crate::stream::io::read_exact_or_eof;

/// Parse and validate the 8-byte header at the front of `wire`.
#[inline]
pub fn parse_chunk_header(wire: &[u8]) -> Result<ChunkHeader, FrameError> {
    if wire.len() < ChunkHeader::LEN {
        return Err(FrameError::Truncated {
            offset: 0,
            needed: ChunkHeader::LEN,
            got: wire.len(),
        });
    }

    let header = ChunkHeader {
        compressed_len: LittleEndian::read_u32(&wire[0..4]),
        uncompressed_len: LittleEndian::read_u32(&wire[4..8]),
    };
    header.validate()?;
    Ok(header)
}

/// Decode a single record from bytes.
///
/// Caller guarantees the buffer holds exactly one full record.
pub fn decode_record(wire: &[u8]) -> Result<RecordView<'_>, FrameError> {
    let header = parse_chunk_header(wire)?;

    let expected_len = header.record_len();
    if wire.len() != expected_len {
        return Err(FrameError::LengthMismatch {
            expected: expected_len,
            actual: wire.len(),
        });
    }

    Ok(RecordView {
        header,
        payload: &wire[ChunkHeader::LEN..expected_len],
    })
}

/// Pulls chunk records off a byte stream, in order.
///
/// End of input exactly at a record boundary ends iteration. Anything shorter
/// than a full header or a full payload is `FrameError::Truncated`.
#[derive(Debug)]
pub struct RecordReader<R: Read> {
    inner: R,
    offset: u64,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0, done: false }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next record, `Ok(None)` on clean end of stream.
    pub fn next_record(&mut self) -> Result<Option<Record>, FrameError> {
        let record_offset = self.offset;

        // ---- header ----
        let head = read_exact_or_eof(&mut self.inner, ChunkHeader::LEN)?;
        self.offset += head.len() as u64;
        if head.is_empty() {
            return Ok(None);
        }
        if head.len() < ChunkHeader::LEN {
            return Err(FrameError::Truncated {
                offset: record_offset,
                needed: ChunkHeader::LEN,
                got: head.len(),
            });
        }
        let header = parse_chunk_header(&head)?;

        // ---- payload ----
        let needed = header.compressed_len as usize;
        let payload = read_exact_or_eof(&mut self.inner, needed)?;
        self.offset += payload.len() as u64;
        if payload.len() < needed {
            return Err(FrameError::Truncated {
                offset: record_offset,
                needed: header.record_len(),
                got: ChunkHeader::LEN + payload.len(),
            });
        }

        Ok(Some(Record { header, payload, offset: record_offset }))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                // No resync after a bad record
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
