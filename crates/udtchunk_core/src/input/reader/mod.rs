use crate::input::{
	ByteOrderMode, ByteOrderResolver, Chunk, ChunkError, Endianness, Result, SqlDate, SqlTime, SqlTimestamp, StructuredInput,
};

enum State<'a> {
	Open(Chunk<'a>),
	Invalidated,
}

/// Positional decoder over one host-owned chunk.
///
/// The byte order is fixed at construction. A reader starts open and moves
/// to invalidated exactly once, through [`ChunkReader::invalidate`]; every
/// read after that fails with [`ChunkError::Closed`].
pub struct ChunkReader<'a> {
	state: State<'a>,
	order: Endianness,
	mode: ByteOrderMode,
}

impl<'a> ChunkReader<'a> {
	/// Bind `chunk` to the byte order the installed resolver picks for `mode`.
	pub fn new(chunk: Chunk<'a>, mode: ByteOrderMode) -> Result<Self> {
		Self::with_resolver(chunk, mode, ByteOrderResolver::installed()?)
	}

	/// Bind `chunk` to the byte order `resolver` picks for `mode`.
	pub fn with_resolver(chunk: Chunk<'a>, mode: ByteOrderMode, resolver: &ByteOrderResolver) -> Result<Self> {
		let order = resolver.resolve(mode)?;
		Ok(Self::with_order(chunk, mode, order))
	}

	/// Bind `chunk` to an already resolved byte order.
	pub fn with_order(chunk: Chunk<'a>, mode: ByteOrderMode, order: Endianness) -> Self {
		tracing::trace!(mode = mode.as_str(), order = order.as_str(), len = chunk.len(), "opened chunk reader");
		Self {
			state: State::Open(chunk),
			order,
			mode,
		}
	}

	/// Run `f` over a reader for the span of one host call, then invalidate it.
	///
	/// The reader is invalidated whether `f` succeeds or fails.
	pub fn scoped<T>(
		chunk: Chunk<'a>,
		mode: ByteOrderMode,
		resolver: &ByteOrderResolver,
		f: impl FnOnce(&mut ChunkReader<'a>) -> Result<T>,
	) -> Result<T> {
		let mut reader = Self::with_resolver(chunk, mode, resolver)?;
		let out = f(&mut reader);
		reader.invalidate();
		out
	}

	/// Byte order bound at construction.
	pub fn byte_order(&self) -> Endianness {
		self.order
	}

	/// Mode this reader was opened for.
	pub fn mode(&self) -> ByteOrderMode {
		self.mode
	}

	/// Whether reads are still permitted.
	pub fn is_open(&self) -> bool {
		matches!(self.state, State::Open(_))
	}

	/// Cursor offset, or `None` once invalidated.
	pub fn position(&self) -> Option<usize> {
		match &self.state {
			State::Open(chunk) => Some(chunk.pos()),
			State::Invalidated => None,
		}
	}

	/// Unread bytes, or `None` once invalidated.
	pub fn remaining(&self) -> Option<usize> {
		match &self.state {
			State::Open(chunk) => Some(chunk.remaining()),
			State::Invalidated => None,
		}
	}

	/// Permanently sever the reader from its chunk. Idempotent.
	pub fn invalidate(&mut self) {
		if let State::Open(chunk) = &self.state {
			tracing::trace!(mode = self.mode.as_str(), pos = chunk.pos(), rem = chunk.remaining(), "invalidated chunk reader");
		}
		self.state = State::Invalidated;
	}

	/// Length-prefixed bytes, borrowed from the chunk.
	pub fn read_slice(&mut self) -> Result<&'a [u8]> {
		let order = self.order;
		self.chunk()?.read_prefixed(order, "read_bytes")
	}

	/// Length-prefixed UTF-8 text, borrowed from the chunk.
	///
	/// Exactly the declared bytes are consumed, so the cursor lands on the
	/// next field even when decoding fails.
	pub fn read_str(&mut self) -> Result<&'a str> {
		let order = self.order;
		let chunk = self.chunk()?;
		let raw = chunk.read_prefixed(order, "read_string")?;
		std::str::from_utf8(raw).map_err(|source| ChunkError::InvalidUtf8 {
			at: chunk.pos() - raw.len(),
			len: raw.len(),
			source,
		})
	}

	fn chunk(&mut self) -> Result<&mut Chunk<'a>> {
		match &mut self.state {
			State::Open(chunk) => Ok(chunk),
			State::Invalidated => Err(ChunkError::Closed),
		}
	}
}

impl StructuredInput for ChunkReader<'_> {
	fn ensure_open(&self) -> Result<()> {
		if self.is_open() { Ok(()) } else { Err(ChunkError::Closed) }
	}

	fn read_boolean(&mut self) -> Result<bool> {
		Ok(self.chunk()?.read_u8("read_boolean")? != 0)
	}

	fn read_byte(&mut self) -> Result<i8> {
		Ok(i8::from_ne_bytes([self.chunk()?.read_u8("read_byte")?]))
	}

	fn read_short(&mut self) -> Result<i16> {
		let order = self.order;
		self.chunk()?.read_i16(order, "read_short")
	}

	fn read_int(&mut self) -> Result<i32> {
		let order = self.order;
		self.chunk()?.read_i32(order, "read_int")
	}

	fn read_long(&mut self) -> Result<i64> {
		let order = self.order;
		self.chunk()?.read_i64(order, "read_long")
	}

	fn read_float(&mut self) -> Result<f32> {
		let order = self.order;
		self.chunk()?.read_f32(order, "read_float")
	}

	fn read_double(&mut self) -> Result<f64> {
		let order = self.order;
		self.chunk()?.read_f64(order, "read_double")
	}

	fn read_date(&mut self) -> Result<SqlDate> {
		let order = self.order;
		self.chunk()?.read_i64(order, "read_date").map(SqlDate)
	}

	fn read_time(&mut self) -> Result<SqlTime> {
		let order = self.order;
		self.chunk()?.read_i64(order, "read_time").map(SqlTime)
	}

	fn read_timestamp(&mut self) -> Result<SqlTimestamp> {
		let order = self.order;
		self.chunk()?.read_i64(order, "read_timestamp").map(SqlTimestamp)
	}

	fn read_bytes(&mut self) -> Result<Vec<u8>> {
		self.read_slice().map(<[u8]>::to_vec)
	}

	fn read_string(&mut self) -> Result<String> {
		self.read_str().map(str::to_owned)
	}
}
