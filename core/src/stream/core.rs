//! stream/core.rs
//! File-level entry points and codec configuration.
//!
//! Precondition order, short-circuiting on the first failure:
//! - compress:   input exists -> not already `.uz2` -> (stock filter) -> format tag
//! - decompress: input exists -> ends in `.uz2`
//!
//! The destination is resolved only after every precondition passes. Output
//! goes to a staging file beside it and replaces it only on success, so a
//! failed call leaves whatever was at the destination untouched.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DEFLATE_LEVEL, MAX_DEFLATE_LEVEL};
use crate::hashing::DigestAlg;
use crate::paths::{has_container_extension, LegacyPathPolicy, Operation, OutputPathPolicy};
use crate::stock::{is_package_extension, is_stock_package};
use crate::stream::compress::ChunkEncoder;
use crate::stream::decompress::decompress_stream;
use crate::stream::io::write_staged;
use crate::telemetry::CodecReport;
use crate::types::Uz2Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// DEFLATE level, 0..=9.
    pub level: u32,
    /// Algorithm for the input and output content hashes.
    pub digest: DigestAlg,
    /// Refuse non-package extensions and the game's own packages on compress.
    pub skip_stock_packages: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_DEFLATE_LEVEL,
            digest: DigestAlg::Sha1,
            skip_stock_packages: false,
        }
    }
}

impl CodecConfig {
    pub fn validate(&self) -> Result<(), Uz2Error> {
        if self.level > MAX_DEFLATE_LEVEL {
            return Err(Uz2Error::Config(format!(
                "deflate level {} out of range 0..={}",
                self.level, MAX_DEFLATE_LEVEL
            )));
        }
        Ok(())
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_digest(mut self, digest: DigestAlg) -> Self {
        self.digest = digest;
        self
    }

    pub fn skipping_stock_packages(mut self, skip: bool) -> Self {
        self.skip_stock_packages = skip;
        self
    }
}

/// File-level codec: a config plus an output naming policy.
///
/// Holds no per-call state, so one instance can serve many threads.
#[derive(Debug, Clone, Default)]
pub struct Uz2Codec<P: OutputPathPolicy = LegacyPathPolicy> {
    config: CodecConfig,
    policy: P,
}

impl Uz2Codec<LegacyPathPolicy> {
    pub fn new(config: CodecConfig) -> Self {
        Self { config, policy: LegacyPathPolicy }
    }
}

impl<P: OutputPathPolicy> Uz2Codec<P> {
    pub fn with_policy(config: CodecConfig, policy: P) -> Self {
        Self { config, policy }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Compress `input` to `<input>.uz2` (or into `output_dir`).
    pub fn compress(&self, input: &Path, output_dir: Option<&Path>) -> Result<CodecReport, Uz2Error> {
        self.config.validate()?;

        if !input.is_file() {
            return Err(Uz2Error::InputNotFound(input.to_path_buf()));
        }
        if has_container_extension(input) {
            return Err(Uz2Error::AlreadyCompressed(input.to_path_buf()));
        }
        if self.config.skip_stock_packages {
            if !is_package_extension(input) {
                return Err(Uz2Error::UnsupportedExtension(input.to_path_buf()));
            }
            if is_stock_package(input) {
                return Err(Uz2Error::StockPackage(input.to_path_buf()));
            }
        }

        let reader = BufReader::new(File::open(input)?);
        let encoder = ChunkEncoder::open(reader, &self.config)?;

        let dest = self.destination(input, Operation::Compress, output_dir)?;
        let report = write_staged(&dest, |writer| encoder.encode_into(writer))?;
        Ok(report.with_paths(input, &dest))
    }

    /// Decompress `input` (`*.uz2`) beside itself (or into `output_dir`).
    pub fn decompress(&self, input: &Path, output_dir: Option<&Path>) -> Result<CodecReport, Uz2Error> {
        self.config.validate()?;

        if !input.is_file() {
            return Err(Uz2Error::InputNotFound(input.to_path_buf()));
        }
        if !has_container_extension(input) {
            return Err(Uz2Error::NotCompressedFile(input.to_path_buf()));
        }

        let reader = BufReader::new(File::open(input)?);

        let dest = self.destination(input, Operation::Decompress, output_dir)?;
        let report = write_staged(&dest, |writer| decompress_stream(reader, writer, &self.config))?;
        Ok(report.with_paths(input, &dest))
    }

    fn destination(&self, input: &Path, op: Operation, output_dir: Option<&Path>) -> Result<PathBuf, Uz2Error> {
        let dest = self.policy.destination(input, op, output_dir)?;
        if dest == input {
            return Err(Uz2Error::InvalidPath(dest));
        }
        Ok(dest)
    }
}

/// Compress with the default config and legacy naming.
pub fn compress(input: &Path, output_dir: Option<&Path>) -> Result<CodecReport, Uz2Error> {
    Uz2Codec::new(CodecConfig::default()).compress(input, output_dir)
}

/// Decompress with the default config and legacy naming.
pub fn decompress(input: &Path, output_dir: Option<&Path>) -> Result<CodecReport, Uz2Error> {
    Uz2Codec::new(CodecConfig::default()).decompress(input, output_dir)
}
