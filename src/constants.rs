//! Line buffer size constants.
//!
//! The line buffer of a [`LineSource`](crate::source::LineSource) has a fixed capacity. A line
//! longer than that capacity is handed out in pieces, each flagged as truncated, so the capacity is
//! the only line-length limit this crate imposes.
//!
//! # Invariant
//!
//! - `DEFAULT_CAPACITY` is a power of 2 and a multiple of 1 KiB (1024 bytes)
//! - `MIN_CAPACITY` is a power of 2 and `MIN_CAPACITY < DEFAULT_CAPACITY`
//! - `MIN_CAPACITY >= 2`, so a held back `\r` never fills the whole buffer

/// Default line buffer capacity (8 KiB).
///
/// The size matches [`std::io::BufReader`]'s internal buffer size.
pub const DEFAULT_CAPACITY: usize =
    // 2^13 = 8192 = 8 * 1024 = 8 KiB
    1 << 13;

/// Smallest line buffer capacity a reader will be built with.
///
/// Requested capacities below this are raised to it.
pub const MIN_CAPACITY: usize = 16;
