//! Wire framing for UZ2 chunk records.
//!
//! Responsibilities:
//! - Define the chunk header and record views
//! - Encode records into the canonical byte layout
//! - Decode records with strict bounds validation
//!
//! Non-responsibilities:
//! - Compression
//! - Hashing
//! - Filesystem paths

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{
    ChunkHeader,
    Record,
    RecordView,
    FrameError,
};
pub use encode::{encode_chunk_header, encode_record, write_record};
pub use decode::{decode_record, parse_chunk_header, RecordReader};
