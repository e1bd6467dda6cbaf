//! telemetry/mod.rs
//! Per-call counters, stage timers, and the immutable report a codec call returns.
//!
//! Notes:
//! - No global logger: every call hands its numbers back in a `CodecReport`
//!   and the caller decides whether and where to log them.
//! - Counters are plain values, so batch drivers can sum them without locks.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
