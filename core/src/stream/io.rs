//! stream/io.rs
//! Normalized I/O for the codec: chunked reads and hash-while-you-go wrappers.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use bytes::Bytes;
use tempfile::Builder;

use crate::hashing::{ContentDigest, ContentHasher, DigestAlg};
use crate::types::Uz2Error;

/// Read up to `len` bytes, stopping early only at end of input.
///
/// A plain `read` may return short on pipes and sockets; chunk boundaries must
/// not depend on that, so this loops until the buffer is full or EOF.
pub fn read_exact_or_eof<R: Read>(r: &mut R, len: usize) -> io::Result<Bytes> {
    let mut buf = vec![0u8; len];
    let mut off = 0;

    while off < len {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    buf.truncate(off);
    Ok(Bytes::from(buf))
}

/// Reader that hashes and counts every byte it hands out.
#[derive(Debug)]
pub struct HashingReader<R: Read> {
    inner: R,
    hasher: ContentHasher,
}

impl<R: Read> HashingReader<R> {
    pub fn new(inner: R, alg: DigestAlg) -> Self {
        Self { inner, hasher: ContentHasher::new(alg) }
    }

    pub fn bytes_read(&self) -> u64 {
        self.hasher.bytes_hashed()
    }

    /// Drop the reader and return the digest of everything read.
    pub fn finish(self) -> ContentDigest {
        self.hasher.finalize()
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }
}

/// Writer that hashes and counts every byte accepted by the inner writer.
#[derive(Debug)]
pub struct HashingWriter<W: Write> {
    inner: W,
    hasher: ContentHasher,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W, alg: DigestAlg) -> Self {
        Self { inner, hasher: ContentHasher::new(alg) }
    }

    pub fn bytes_written(&self) -> u64 {
        self.hasher.bytes_hashed()
    }

    /// Flush, then return the inner writer and the digest of everything written.
    pub fn finish(mut self) -> io::Result<(W, ContentDigest)> {
        self.inner.flush()?;
        Ok((self.inner, self.hasher.finalize()))
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Run `write` against a staging file beside `dest`, then move it onto `dest`.
///
/// `dest` is only touched on success. On failure the staging file is deleted
/// and the error's `PartialOutput` (if any) points at it.
pub fn write_staged<T, F>(dest: &Path, write: F) -> Result<T, Uz2Error>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<T, Uz2Error>,
{
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    // umask permissions, not tempfile's 0600
    let staging = Builder::new()
        .prefix(".uz2-")
        .suffix(".part")
        .make_in(dir, |path| OpenOptions::new().write(true).create_new(true).open(path))?;

    let result = {
        let mut writer = BufWriter::new(staging.as_file());
        write(&mut writer).and_then(|value| {
            writer.flush()?;
            Ok(value)
        })
    };

    match result {
        Ok(value) => {
            staging.persist(dest).map_err(|e| Uz2Error::io(e.error))?;
            Ok(value)
        }
        Err(mut err) => {
            let path = staging.path().to_path_buf();
            let removed = staging.close().is_ok();
            if let Some(partial) = err.partial_mut() {
                partial.path = Some(path);
                partial.removed = removed;
            }
            Err(err)
        }
    }
}
