use std::fmt;

/// Concrete byte order applied to multi-byte fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
	/// Little-endian byte order.
	Little,
	/// Big-endian byte order.
	Big,
}

impl Endianness {
	/// Byte order of the platform this process runs on.
	pub const fn native() -> Self {
		if cfg!(target_endian = "big") { Self::Big } else { Self::Little }
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

impl fmt::Display for Endianness {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which party produced the bytes of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrderMode {
	/// Value produced natively by this runtime.
	Scalar,
	/// Value produced by the host runtime and reflected back.
	Mirror,
}

impl ByteOrderMode {
	/// Both modes, in resolution order.
	pub const ALL: [Self; 2] = [Self::Scalar, Self::Mirror];

	/// Setting key that selects this mode's byte order.
	pub fn setting_key(self) -> &'static str {
		match self {
			Self::Scalar => "UDTCHUNK_BYTEORDER_SCALAR",
			Self::Mirror => "UDTCHUNK_BYTEORDER_MIRROR",
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Scalar => "scalar",
			Self::Mirror => "mirror",
		}
	}

	/// Parse a lowercase mode label.
	pub fn from_label(label: &str) -> Option<Self> {
		match label {
			"scalar" => Some(Self::Scalar),
			"mirror" => Some(Self::Mirror),
			_ => None,
		}
	}
}

impl fmt::Display for ByteOrderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Accepted byte-order setting values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderSetting {
	/// `big_endian`.
	BigEndian,
	/// `little_endian`.
	LittleEndian,
	/// `native`: whatever the platform uses.
	Native,
}

impl ByteOrderSetting {
	/// Parse a raw setting value. Matching is exact and case-sensitive.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"big_endian" => Some(Self::BigEndian),
			"little_endian" => Some(Self::LittleEndian),
			"native" => Some(Self::Native),
			_ => None,
		}
	}

	/// Setting value as written in configuration.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::BigEndian => "big_endian",
			Self::LittleEndian => "little_endian",
			Self::Native => "native",
		}
	}

	/// Concrete byte order this setting selects.
	pub fn endianness(self) -> Endianness {
		match self {
			Self::BigEndian => Endianness::Big,
			Self::LittleEndian => Endianness::Little,
			Self::Native => Endianness::native(),
		}
	}
}
