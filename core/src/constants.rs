//! constants.rs
//! Wire constants of the UZ2 container and the packages it carries.

/// Leading bytes of every package this redirect pipeline accepts.
///
/// The tag lives inside the first decompressed chunk, never in the framing.
pub const FORMAT_TAG: [u8; 4] = [0xC2, 0x83, 0x2A, 0x9E];

/// Tag written by the upstream engine. Differs from [`FORMAT_TAG`] only in the
/// first byte and is never accepted.
pub const UPSTREAM_TAG: [u8; 4] = [0xC1, 0x83, 0x2A, 0x9E];

/// Width of the tag check window.
pub const TAG_LEN: usize = FORMAT_TAG.len();

/// Uncompressed bytes per chunk. Only the last chunk may be shorter.
pub const UNCOMPRESSED_CHUNK_SIZE: usize = 32 * 1024; // 32 KiB

/// Largest payload a full chunk may deflate to (0-33096).
pub const MAX_COMPRESSED_CHUNK_SIZE: usize = 33_096;

/// Container extension, without the dot. Matched case-sensitively.
pub const CONTAINER_EXTENSION: &str = "uz2";

/// DEFLATE effort on a 0..=9 scale. Speed/ratio balance, not the maximum.
pub const DEFAULT_DEFLATE_LEVEL: u32 = 7;
pub const MAX_DEFLATE_LEVEL: u32 = 9;

/// Extensions game packages ship with.
pub const PACKAGE_EXTENSIONS: &[&str] = &["u", "utx", "usx", "ukx", "uax", "rom"];
