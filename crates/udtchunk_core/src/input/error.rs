use std::str::Utf8Error;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Coarse failure category every [`ChunkError`] funnels into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Byte-order setting missing, unrecognized, or no resolver available.
	Config,
	/// Read attempted after the reader was invalidated.
	Closed,
	/// Chunk bytes could not be decoded into the requested value.
	MalformedData,
	/// Read operation this format deliberately does not decode.
	Unsupported,
	/// Chunk file could not be loaded from disk.
	Io,
}

impl ErrorKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Config => "config",
			Self::Closed => "closed",
			Self::MalformedData => "malformed_data",
			Self::Unsupported => "unsupported",
			Self::Io => "io",
		}
	}
}

/// Errors produced while resolving byte order and decoding chunks.
#[derive(Debug, Error)]
pub enum ChunkError {
	/// Byte-order setting is absent or holds an unrecognized value.
	#[error("setting {key} must be big_endian, little_endian, or native (got {})", .value.as_deref().unwrap_or("<unset>"))]
	ByteOrderSetting {
		/// Setting key consulted.
		key: &'static str,
		/// Raw value found, if any.
		value: Option<String>,
	},
	/// No process-wide resolver was installed before constructing a reader.
	#[error("no byte order resolver installed for this process")]
	ResolverNotInstalled,
	/// A process-wide resolver was already installed.
	#[error("byte order resolver already installed for this process")]
	ResolverAlreadyInstalled,
	/// Read attempted after invalidation.
	#[error("attempted read from chunk input after closing it")]
	Closed,
	/// Not enough bytes remained for a requested read.
	#[error("could not read binary representation ({op}): eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Decode step that failed.
		op: &'static str,
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Text field bytes were not valid UTF-8.
	#[error("could not read binary representation (read_string): invalid utf-8 in {len} bytes at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first text byte.
		at: usize,
		/// Declared text length.
		len: usize,
		/// Underlying decode failure.
		#[source]
		source: Utf8Error,
	},
	/// Decoded text is not a decimal literal.
	#[error("could not read binary representation (read_decimal): {text:?} is not a decimal")]
	InvalidDecimal {
		/// Decoded text.
		text: String,
		/// Underlying parse failure.
		#[source]
		source: bigdecimal::ParseBigDecimalError,
	},
	/// Decoded text is not a well-formed resource locator.
	#[error("could not read binary representation (read_url): {text:?} is not a url")]
	InvalidUrl {
		/// Decoded text.
		text: String,
		/// Underlying parse failure.
		#[source]
		source: url::ParseError,
	},
	/// Read operation is not implemented by this format.
	#[error("{op}() not implemented yet")]
	NotImplemented {
		/// Unsupported operation name.
		op: &'static str,
	},
	/// Filesystem or stream IO failure while loading a chunk.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed chunk exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
}

impl ChunkError {
	/// Category this error belongs to.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::ByteOrderSetting { .. } | Self::ResolverNotInstalled | Self::ResolverAlreadyInstalled => ErrorKind::Config,
			Self::Closed => ErrorKind::Closed,
			Self::UnexpectedEof { .. } | Self::InvalidUtf8 { .. } | Self::InvalidDecimal { .. } | Self::InvalidUrl { .. } => ErrorKind::MalformedData,
			Self::NotImplemented { .. } => ErrorKind::Unsupported,
			Self::Io(_) | Self::DecompressedTooLarge { .. } => ErrorKind::Io,
		}
	}

	/// Five-character SQLSTATE class code reported to the host.
	pub fn sqlstate(&self) -> &'static str {
		match self.kind() {
			ErrorKind::Config => "F0000",
			ErrorKind::Closed => "55000",
			ErrorKind::MalformedData => "22P03",
			ErrorKind::Unsupported => "0A000",
			ErrorKind::Io => "58030",
		}
	}

	/// Whether retrying the same call could succeed. Always false here.
	pub fn is_transient(&self) -> bool {
		false
	}
}
