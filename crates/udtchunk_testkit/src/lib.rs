//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to a scratch file under the target directory and return its path.
pub fn scratch_file(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("udtchunk-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("scratch file is writable");
	path
}

/// Encoder for positional chunks in a fixed byte order.
#[derive(Debug, Clone)]
pub struct ChunkBuilder {
	big_endian: bool,
	bytes: Vec<u8>,
}

impl ChunkBuilder {
	/// Encode multi-byte fields big-endian.
	pub fn big_endian() -> Self {
		Self { big_endian: true, bytes: Vec::new() }
	}

	/// Encode multi-byte fields little-endian.
	pub fn little_endian() -> Self {
		Self { big_endian: false, bytes: Vec::new() }
	}

	/// Encode multi-byte fields in the platform order.
	pub fn native() -> Self {
		if cfg!(target_endian = "big") { Self::big_endian() } else { Self::little_endian() }
	}

	/// Append a 1-byte boolean.
	pub fn boolean(self, value: bool) -> Self {
		self.raw(&[u8::from(value)])
	}

	/// Append a 1-byte integer.
	pub fn byte(self, value: i8) -> Self {
		self.raw(&value.to_ne_bytes())
	}

	/// Append a 2-byte integer.
	pub fn short(self, value: i16) -> Self {
		let bytes = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		self.raw(&bytes)
	}

	/// Append a 4-byte integer.
	pub fn int(self, value: i32) -> Self {
		let bytes = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		self.raw(&bytes)
	}

	/// Append an 8-byte integer (also dates, times and timestamps).
	pub fn long(self, value: i64) -> Self {
		let bytes = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		self.raw(&bytes)
	}

	/// Append a 4-byte float.
	pub fn float(self, value: f32) -> Self {
		let bytes = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		self.raw(&bytes)
	}

	/// Append an 8-byte float.
	pub fn double(self, value: f64) -> Self {
		let bytes = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		self.raw(&bytes)
	}

	/// Append only a 2-byte length prefix.
	pub fn prefix(self, len: u16) -> Self {
		let bytes = if self.big_endian { len.to_be_bytes() } else { len.to_le_bytes() };
		self.raw(&bytes)
	}

	/// Append a length-prefixed byte field.
	pub fn bytes(self, value: &[u8]) -> Self {
		let len = u16::try_from(value.len()).expect("field fits a 2-byte prefix");
		self.prefix(len).raw(value)
	}

	/// Append a length-prefixed UTF-8 text field.
	pub fn string(self, value: &str) -> Self {
		self.bytes(value.as_bytes())
	}

	/// Append bytes verbatim.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Finish encoding.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}
