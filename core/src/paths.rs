//! paths.rs
//! Output path resolution for compress and decompress.
//!
//! Rules (legacy policy):
//! - compress, no dir:      `name.ext`      -> `name.ext.uz2` beside the input
//! - compress, dir:         `name.ext`      -> `dir/name.ext.uz2`
//! - decompress, no dir:    `name.ext.uz2`  -> `name.ext` beside the input
//! - decompress, dir:       `name.ext.uz2`  -> `dir/name` (inner extension dropped)
//!
//! The only side effect is creating `dir` (one level) when it is missing.
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::CONTAINER_EXTENSION;
use crate::types::Uz2Error;

/// Which way a codec call transforms its input.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Compress   = 0x01,
    Decompress = 0x02,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Compress   => f.write_str("compress"),
            Operation::Decompress => f.write_str("decompress"),
        }
    }
}

/// Maps an input path to the file a codec call writes.
///
/// Implementations may create `output_dir` but must not touch file contents.
pub trait OutputPathPolicy: Send + Sync {
    fn destination(
        &self,
        input: &Path,
        op: Operation,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf, Uz2Error>;
}

/// The historical naming rules, including the asymmetric decompress-to-dir case.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyPathPolicy;

/// Like [`LegacyPathPolicy`] but decompress-to-dir keeps the inner extension
/// (`name.u.uz2` -> `dir/name.u`), so a round trip through a directory restores
/// the original file name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetricPathPolicy;

impl OutputPathPolicy for LegacyPathPolicy {
    fn destination(
        &self,
        input: &Path,
        op: Operation,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf, Uz2Error> {
        match (op, usable_dir(output_dir)) {
            (Operation::Compress, None) => Ok(append_container_ext(input.as_os_str().to_owned())),
            (Operation::Compress, Some(dir)) => {
                let name = file_name(input)?;
                ensure_dir(dir)?;
                Ok(dir.join(append_container_ext(name)))
            }
            (Operation::Decompress, None) => strip_container_ext(input),
            (Operation::Decompress, Some(dir)) => {
                let inner = strip_container_ext(input)?;
                let stem = inner
                    .file_stem()
                    .ok_or_else(|| Uz2Error::InvalidPath(input.to_path_buf()))?
                    .to_owned();
                ensure_dir(dir)?;
                Ok(dir.join(stem))
            }
        }
    }
}

impl OutputPathPolicy for SymmetricPathPolicy {
    fn destination(
        &self,
        input: &Path,
        op: Operation,
        output_dir: Option<&Path>,
    ) -> Result<PathBuf, Uz2Error> {
        match (op, usable_dir(output_dir)) {
            (Operation::Decompress, Some(dir)) => {
                let inner = strip_container_ext(input)?;
                let name = file_name(&inner)?;
                ensure_dir(dir)?;
                Ok(dir.join(name))
            }
            _ => LegacyPathPolicy.destination(input, op, output_dir),
        }
    }
}

/// Destination for `input` under the legacy rules.
pub fn resolve(input: &Path, op: Operation, output_dir: Option<&Path>) -> Result<PathBuf, Uz2Error> {
    LegacyPathPolicy.destination(input, op, output_dir)
}

/// Case-sensitive `.uz2` extension test on the file name.
pub fn has_container_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CONTAINER_EXTENSION)
}

/// Create `dir` (single level). An existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<(), Uz2Error> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(Uz2Error::io(e)),
    }
}

// An empty directory string means "beside the input".
fn usable_dir(dir: Option<&Path>) -> Option<&Path> {
    dir.filter(|d| !d.as_os_str().is_empty())
}

fn file_name(path: &Path) -> Result<OsString, Uz2Error> {
    path.file_name()
        .map(|n| n.to_owned())
        .ok_or_else(|| Uz2Error::InvalidPath(path.to_path_buf()))
}

fn append_container_ext(mut name: OsString) -> PathBuf {
    name.push(".");
    name.push(CONTAINER_EXTENSION);
    PathBuf::from(name)
}

fn strip_container_ext(input: &Path) -> Result<PathBuf, Uz2Error> {
    if !has_container_extension(input) {
        return Err(Uz2Error::InvalidPath(input.to_path_buf()));
    }
    Ok(input.with_extension(""))
}
