use crate::input::{ChunkError, Endianness, Result};

/// Bounded forward-only cursor over a host-owned byte region.
///
/// A `Chunk` borrows its bytes for `'a` and never copies or frees them. It is
/// deliberately not `Clone`: one chunk feeds exactly one reader.
pub struct Chunk<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Chunk<'a> {
	/// Create a chunk at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return total chunk length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether the chunk holds no bytes at all.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes for decode step `op` and advance the cursor.
	///
	/// On failure the cursor does not move.
	pub fn read_exact(&mut self, n: usize, op: &'static str) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(ChunkError::UnexpectedEof {
				op,
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read a fixed-size array.
	pub fn read_fixed<const N: usize>(&mut self, op: &'static str) -> Result<[u8; N]> {
		let raw = self.read_exact(N, op)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a `u8`.
	pub fn read_u8(&mut self, op: &'static str) -> Result<u8> {
		let [byte] = self.read_fixed::<1>(op)?;
		Ok(byte)
	}

	/// Read a `u16` using the selected endianness.
	pub fn read_u16(&mut self, endianness: Endianness, op: &'static str) -> Result<u16> {
		let buf = self.read_fixed(op)?;
		Ok(match endianness {
			Endianness::Little => u16::from_le_bytes(buf),
			Endianness::Big => u16::from_be_bytes(buf),
		})
	}

	/// Read an `i16` using the selected endianness.
	pub fn read_i16(&mut self, endianness: Endianness, op: &'static str) -> Result<i16> {
		let buf = self.read_fixed(op)?;
		Ok(match endianness {
			Endianness::Little => i16::from_le_bytes(buf),
			Endianness::Big => i16::from_be_bytes(buf),
		})
	}

	/// Read an `i32` using the selected endianness.
	pub fn read_i32(&mut self, endianness: Endianness, op: &'static str) -> Result<i32> {
		let buf = self.read_fixed(op)?;
		Ok(match endianness {
			Endianness::Little => i32::from_le_bytes(buf),
			Endianness::Big => i32::from_be_bytes(buf),
		})
	}

	/// Read an `i64` using the selected endianness.
	pub fn read_i64(&mut self, endianness: Endianness, op: &'static str) -> Result<i64> {
		let buf = self.read_fixed(op)?;
		Ok(match endianness {
			Endianness::Little => i64::from_le_bytes(buf),
			Endianness::Big => i64::from_be_bytes(buf),
		})
	}

	/// Read an `f32` using the selected endianness.
	pub fn read_f32(&mut self, endianness: Endianness, op: &'static str) -> Result<f32> {
		let buf = self.read_fixed(op)?;
		Ok(match endianness {
			Endianness::Little => f32::from_le_bytes(buf),
			Endianness::Big => f32::from_be_bytes(buf),
		})
	}

	/// Read an `f64` using the selected endianness.
	pub fn read_f64(&mut self, endianness: Endianness, op: &'static str) -> Result<f64> {
		let buf = self.read_fixed(op)?;
		Ok(match endianness {
			Endianness::Little => f64::from_le_bytes(buf),
			Endianness::Big => f64::from_be_bytes(buf),
		})
	}

	/// Read a 2-byte unsigned length prefix followed by that many bytes.
	///
	/// If the prefix itself is readable but the body is truncated, the cursor
	/// has already moved past the prefix.
	pub fn read_prefixed(&mut self, endianness: Endianness, op: &'static str) -> Result<&'a [u8]> {
		let len = self.read_u16(endianness, op)?;
		self.read_exact(usize::from(len), op)
	}
}

#[cfg(test)]
mod tests {
	use super::Chunk;
	use crate::input::{ChunkError, Endianness};

	#[test]
	fn reads_advance_cursor_by_field_width() {
		let bytes = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03];
		let mut chunk = Chunk::new(&bytes);

		assert_eq!(chunk.read_u8("t").expect("u8"), 1);
		assert_eq!(chunk.read_i16(Endianness::Big, "t").expect("i16"), 2);
		assert_eq!(chunk.pos(), 3);
		assert_eq!(chunk.read_i32(Endianness::Big, "t").expect("i32"), 3);
		assert_eq!(chunk.remaining(), 0);
	}

	#[test]
	fn short_read_reports_step_and_keeps_position() {
		let bytes = [0xAA, 0xBB, 0xCC];
		let mut chunk = Chunk::new(&bytes);
		chunk.read_u8("lead").expect("first byte");

		let err = chunk.read_i32(Endianness::Little, "read_int").expect_err("too short");
		assert!(matches!(
			err,
			ChunkError::UnexpectedEof {
				op: "read_int",
				at: 1,
				need: 4,
				rem: 2
			}
		));
		assert_eq!(chunk.pos(), 1);
	}

	#[test]
	fn length_prefix_is_unsigned() {
		let mut bytes = vec![0xFF, 0xFF];
		bytes.resize(2 + 0xFFFF, b'x');
		let mut chunk = Chunk::new(&bytes);

		let body = chunk.read_prefixed(Endianness::Big, "read_bytes").expect("max length body");
		assert_eq!(body.len(), 65535);
		assert_eq!(chunk.remaining(), 0);
	}

	#[test]
	fn chunk_over_subslice_stops_at_its_end() {
		let host = [0x00, 0x01, 0x02, 0x03, 0x04];
		let mut chunk = Chunk::new(&host[1..3]);
		assert_eq!(chunk.len(), 2);

		assert!(matches!(chunk.read_i32(Endianness::Big, "read_int"), Err(ChunkError::UnexpectedEof { need: 4, rem: 2, .. })));
		assert_eq!(chunk.read_exact(2, "t").expect("window"), &[0x01, 0x02]);
		assert!(chunk.read_u8("t").is_err());
	}
}
