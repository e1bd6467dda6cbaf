use std::{fmt, io, path::PathBuf};
use serde::{Deserialize, Serialize};

use crate::{compression::CompressionError, stream::framing::FrameError};

/// Failure classes surfaced to callers.
/// - Stable tags an orchestrator can match on, log, and move on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    InputNotFound,
    AlreadyCompressed,
    NotCompressedFile,
    InvalidFormatTag,
    CodecFailure,
    Io,
    UnsupportedExtension,
    StockPackage,
    InvalidPath,
    InvalidConfig,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::InputNotFound        => "input-not-found",
            FailureKind::AlreadyCompressed    => "already-compressed",
            FailureKind::NotCompressedFile    => "not-compressed-file",
            FailureKind::InvalidFormatTag     => "invalid-format-tag",
            FailureKind::CodecFailure         => "codec-failure",
            FailureKind::Io                   => "io-error",
            FailureKind::UnsupportedExtension => "unsupported-extension",
            FailureKind::StockPackage         => "stock-package",
            FailureKind::InvalidPath          => "invalid-path",
            FailureKind::InvalidConfig        => "invalid-config",
        };
        f.write_str(name)
    }
}

/// What a failed call had already emitted before it stopped.
///
/// File-level calls write into a staging file beside the destination. On
/// failure that staging file is deleted and the destination is left as it was.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialOutput {
    /// Staging file the bytes went to (unset for stream-level calls).
    pub path: Option<PathBuf>,
    /// Bytes handed to the writer.
    pub bytes_written: u64,
    /// Complete chunks handed to the writer.
    pub chunks_written: u64,
    /// Whether the staging file was deleted.
    pub removed: bool,
}

impl PartialOutput {
    pub fn new(bytes_written: u64, chunks_written: u64) -> Self {
        Self { path: None, bytes_written, chunks_written, removed: false }
    }
}

/// Unified codec error.
/// - `From<T>` impls let `?` cross every layer.
/// - `kind()` maps each variant to its [`FailureKind`] tag.
#[derive(Debug, thiserror::Error)]
pub enum Uz2Error {
    #[error("input `{}` does not exist or is not a file", .0.display())]
    InputNotFound(PathBuf),

    #[error("input `{}` is already compressed", .0.display())]
    AlreadyCompressed(PathBuf),

    #[error("input `{}` is not a .uz2 file", .0.display())]
    NotCompressedFile(PathBuf),

    #[error("input `{}` is not a game package extension", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("input `{}` ships with the game, skipping it", .0.display())]
    StockPackage(PathBuf),

    #[error("cannot derive a destination from `{}`", .0.display())]
    InvalidPath(PathBuf),

    #[error("leading bytes {found:02X?} do not carry the package tag")]
    InvalidFormatTag {
        found: Vec<u8>,
        partial: Option<PartialOutput>,
    },

    #[error("compression error: {source}")]
    Compression {
        source: CompressionError,
        partial: Option<PartialOutput>,
    },

    #[error("frame error: {source}")]
    Frame {
        source: FrameError,
        partial: Option<PartialOutput>,
    },

    #[error("I/O error: {source}")]
    Io {
        source: io::Error,
        partial: Option<PartialOutput>,
    },

    #[error("invalid config: {0}")]
    Config(String),
}

impl Uz2Error {
    pub fn io(source: io::Error) -> Self {
        Uz2Error::Io { source, partial: None }
    }

    pub fn tag_mismatch(window: &[u8]) -> Self {
        Uz2Error::InvalidFormatTag { found: window.to_vec(), partial: None }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Uz2Error::InputNotFound(_)        => FailureKind::InputNotFound,
            Uz2Error::AlreadyCompressed(_)    => FailureKind::AlreadyCompressed,
            Uz2Error::NotCompressedFile(_)    => FailureKind::NotCompressedFile,
            Uz2Error::UnsupportedExtension(_) => FailureKind::UnsupportedExtension,
            Uz2Error::StockPackage(_)         => FailureKind::StockPackage,
            Uz2Error::InvalidPath(_)          => FailureKind::InvalidPath,
            Uz2Error::InvalidFormatTag { .. } => FailureKind::InvalidFormatTag,
            Uz2Error::Compression { .. }      => FailureKind::CodecFailure,
            Uz2Error::Frame { .. }            => FailureKind::CodecFailure,
            Uz2Error::Io { .. }               => FailureKind::Io,
            Uz2Error::Config(_)               => FailureKind::InvalidConfig,
        }
    }

    /// Partial output recorded on the failure, if any was emitted.
    pub fn partial(&self) -> Option<&PartialOutput> {
        match self {
            Uz2Error::InvalidFormatTag { partial, .. }
            | Uz2Error::Compression { partial, .. }
            | Uz2Error::Frame { partial, .. }
            | Uz2Error::Io { partial, .. } => partial.as_ref(),
            _ => None,
        }
    }

    /// Attach partial-output accounting. Precondition failures stay untouched.
    pub fn with_partial(self, output: PartialOutput) -> Self {
        match self {
            Uz2Error::InvalidFormatTag { found, .. } =>
                Uz2Error::InvalidFormatTag { found, partial: Some(output) },
            Uz2Error::Compression { source, .. } =>
                Uz2Error::Compression { source, partial: Some(output) },
            Uz2Error::Frame { source, .. } =>
                Uz2Error::Frame { source, partial: Some(output) },
            Uz2Error::Io { source, .. } =>
                Uz2Error::Io { source, partial: Some(output) },
            other => other,
        }
    }

    pub(crate) fn partial_mut(&mut self) -> Option<&mut PartialOutput> {
        match self {
            Uz2Error::InvalidFormatTag { partial, .. }
            | Uz2Error::Compression { partial, .. }
            | Uz2Error::Frame { partial, .. }
            | Uz2Error::Io { partial, .. } => partial.as_mut(),
            _ => None,
        }
    }
}

impl From<io::Error> for Uz2Error {
    fn from(e: io::Error) -> Self {
        Uz2Error::io(e)
    }
}

impl From<CompressionError> for Uz2Error {
    fn from(e: CompressionError) -> Self {
        Uz2Error::Compression { source: e, partial: None }
    }
}

impl From<FrameError> for Uz2Error {
    fn from(e: FrameError) -> Self {
        match e {
            // Reader failures below the framing are filesystem problems, not bad data.
            FrameError::Io(source) => Uz2Error::io(source),
            other => Uz2Error::Frame { source: other, partial: None },
        }
    }
}
