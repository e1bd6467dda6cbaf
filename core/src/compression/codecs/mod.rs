//! compression/codecs/mod.rs
//! Concrete codecs. UZ2 only ever carries DEFLATE (zlib-wrapped) payloads.

pub mod deflate;

pub use deflate::*;
