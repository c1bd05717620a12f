use std::fs;
use std::io::Read;
use std::path::Path;

use crate::input::{ChunkError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 64 * 1024 * 1024;
/// zstd frame magic marking a compressed chunk dump.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a chunk dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw chunk bytes.
	None,
	/// zstd-compressed chunk bytes.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Read a chunk dump from disk, returning `(mode, chunk_bytes)`.
pub fn load_chunk(path: impl AsRef<Path>) -> Result<(Compression, Vec<u8>)> {
	let raw = fs::read(path)?;
	decode_bytes(raw)
}

/// Detect and undo compression. Anything not starting with the zstd magic is raw.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		tracing::debug!(compressed = raw.len(), decompressed = out.len(), "decompressed chunk dump");
		return Ok((Compression::Zstd, out));
	}

	Ok((Compression::None, raw))
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(ChunkError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
