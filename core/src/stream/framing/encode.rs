use std::io::Write;
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::stream::framing::types::{ChunkHeader, FrameError};

/// Encode a chunk header into its 8 wire bytes.
pub fn encode_chunk_header(header: &ChunkHeader) -> [u8; ChunkHeader::LEN] {
    let mut buf = [0u8; ChunkHeader::LEN];
    LittleEndian::write_u32(&mut buf[0..4], header.compressed_len);
    LittleEndian::write_u32(&mut buf[4..8], header.uncompressed_len);
    buf
}

/// Encode a record into canonical wire format.
///
/// Layout:
///
/// ```text
/// [ compressed_len   (4, LE) ]
/// [ uncompressed_len (4, LE) ]
/// [ payload          (compressed_len) ]
/// ```
pub fn encode_record(header: &ChunkHeader, payload: &[u8]) -> Result<Vec<u8>, FrameError> {
    check_payload(header, payload)?;

    let mut out = Vec::with_capacity(header.record_len());
    out.extend_from_slice(&encode_chunk_header(header));
    out.extend_from_slice(payload);
    Ok(out)
}

/// Stream a record to `w`. Returns the bytes written.
pub fn write_record<W: Write>(
    w: &mut W,
    header: &ChunkHeader,
    payload: &[u8],
) -> Result<usize, FrameError> {
    check_payload(header, payload)?;

    w.write_u32::<LittleEndian>(header.compressed_len)?;
    w.write_u32::<LittleEndian>(header.uncompressed_len)?;
    w.write_all(payload)?;
    Ok(header.record_len())
}

fn check_payload(header: &ChunkHeader, payload: &[u8]) -> Result<(), FrameError> {
    header.validate()?;
    if payload.len() != header.compressed_len as usize {
        return Err(FrameError::LengthMismatch {
            expected: header.compressed_len as usize,
            actual: payload.len(),
        });
    }
    Ok(())
}
