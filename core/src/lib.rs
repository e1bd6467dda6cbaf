//! uz2-core
//!
//! Pure Rust codec for the UZ2 chunked DEFLATE package container.
//! No CLI, no GUI, no global logger.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Shared and top level module
pub mod compression;
pub mod hashing;
pub mod paths;
pub mod stock;
pub mod telemetry;
pub mod journal;

// Stream layers
pub mod stream;

pub use types::{FailureKind, PartialOutput, Uz2Error};
pub use stream::{compress, decompress, CodecConfig, Uz2Codec};
pub use paths::{resolve, Operation};
pub use telemetry::CodecReport;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::hashing::{ContentDigest, DigestAlg};
    pub use crate::paths::{
        resolve, LegacyPathPolicy, Operation, OutputPathPolicy, SymmetricPathPolicy,
    };
    pub use crate::stream::{
        compress, compress_stream, decompress, decompress_stream, CodecConfig, Uz2Codec,
    };
    pub use crate::telemetry::CodecReport;
    pub use crate::types::{FailureKind, PartialOutput, Uz2Error};
}
