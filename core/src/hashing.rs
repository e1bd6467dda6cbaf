//! hashing.rs
//! Running content hashes for change detection and logging.
//!
//! Notes:
//! - SHA-1 by default, matching the sums redirect tooling publishes.
//!   Not a security boundary.
//! - Hashes never gate success or failure of a codec call.
use std::fmt;
use digest::Digest;
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha1::Sha1;
use sha2::Sha256;

/// Digest-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    UnknownAlgorithm(u16),
    InvalidLength { expected: usize, actual: usize },
    InvalidHex(String),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::UnknownAlgorithm(raw) =>
                write!(f, "unknown digest algorithm: 0x{:04x}", raw),
            DigestError::InvalidLength { expected, actual } =>
                write!(f, "digest length mismatch: expected {}, got {}", expected, actual),
            DigestError::InvalidHex(msg) =>
                write!(f, "invalid hex digest: {}", msg),
        }
    }
}

impl std::error::Error for DigestError {}

/// Supported digest algorithms (stable u16 ids).
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlg {
    Sha1   = 0x0001,
    Sha256 = 0x0002,
    Blake3 = 0x0003, // UNKEYED Blake3
}

impl Default for DigestAlg {
    fn default() -> Self {
        DigestAlg::Sha1
    }
}

impl DigestAlg {
    pub fn from_id(raw: u16) -> Result<Self, DigestError> {
        Self::try_from_primitive(raw).map_err(|_| DigestError::UnknownAlgorithm(raw))
    }

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            DigestAlg::Sha1   => "sha1",
            DigestAlg::Sha256 => "sha256",
            DigestAlg::Blake3 => "blake3",
        }
    }

    /// Digest size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            DigestAlg::Sha1   => 20,
            DigestAlg::Sha256 => 32,
            DigestAlg::Blake3 => 32,
        }
    }
}

impl fmt::Display for DigestAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Internal hashing state.
enum DigestState {
    Sha1(Sha1),
    Sha256(Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl DigestState {
    fn new(alg: DigestAlg) -> Self {
        match alg {
            DigestAlg::Sha1   => DigestState::Sha1(Sha1::new()),
            DigestAlg::Sha256 => DigestState::Sha256(Sha256::new()),
            DigestAlg::Blake3 => DigestState::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        match self {
            DigestState::Sha1(h) => h.update(data),
            DigestState::Sha256(h) => h.update(data),
            // Blake3 update returns &mut Hasher, we ignore it here
            DigestState::Blake3(h) => { h.update(data); },
        }
    }

    #[inline]
    fn finalize(self) -> Vec<u8> {
        match self {
            DigestState::Sha1(h) => h.finalize().to_vec(),
            DigestState::Sha256(h) => h.finalize().to_vec(),
            DigestState::Blake3(h) => h.finalize().as_bytes().to_vec(),
        }
    }
}

/// Incremental hasher over a byte stream, fed in write/read order.
pub struct ContentHasher {
    alg: DigestAlg,
    state: DigestState,
    bytes: u64,
}

impl ContentHasher {
    #[inline]
    pub fn new(alg: DigestAlg) -> Self {
        Self { alg, state: DigestState::new(alg), bytes: 0 }
    }

    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.state.update(data);
        self.bytes += data.len() as u64;
    }

    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    /// Bytes fed so far.
    pub fn bytes_hashed(&self) -> u64 {
        self.bytes
    }

    pub fn finalize(self) -> ContentDigest {
        ContentDigest { alg: self.alg, bytes: self.state.finalize() }
    }
}

impl fmt::Debug for ContentHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentHasher")
            .field("alg", &self.alg)
            .field("bytes", &self.bytes)
            .finish()
    }
}

/// Finished digest. Displays as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest {
    alg: DigestAlg,
    #[serde(rename = "hex", with = "hex_bytes")]
    bytes: Vec<u8>,
}

impl ContentDigest {
    pub fn from_hex(alg: DigestAlg, hex_str: &str) -> Result<Self, DigestError> {
        let bytes = hex::decode(hex_str).map_err(|e| DigestError::InvalidHex(e.to_string()))?;
        if bytes.len() != alg.output_len() {
            return Err(DigestError::InvalidLength { expected: alg.output_len(), actual: bytes.len() });
        }
        Ok(Self { alg, bytes })
    }

    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alg, self.to_hex())
    }
}

/// One-shot digest of a buffer.
pub fn digest_bytes(alg: DigestAlg, data: &[u8]) -> ContentDigest {
    let mut hasher = ContentHasher::new(alg);
    hasher.update(data);
    hasher.finalize()
}

mod hex_bytes {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(d)?;
        hex::decode(raw).map_err(serde::de::Error::custom)
    }
}
