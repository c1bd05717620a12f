//! Positional decoding of host-owned, length-prefixed UDT chunks.

/// Byte-order resolution, chunk readers, and record decoding.
pub mod input;
