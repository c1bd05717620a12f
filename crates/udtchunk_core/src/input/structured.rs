use std::str::FromStr;

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use url::Url;

use crate::input::{ByteStream, CharStream, ChunkError, NotDecoded, Result, SqlDate, SqlTime, SqlTimestamp};

/// Sequential reader of positional, typed fields.
///
/// The caller must know the record layout: each call decodes the next field
/// as the requested type, with no tag to check it against. Once any read
/// fails, the position of later fields is unknown and the record should be
/// abandoned.
///
/// Derived and unsupported reads are provided in terms of the primitives and
/// [`StructuredInput::ensure_open`], so closed-state checks always win.
pub trait StructuredInput {
	/// Fail with [`ChunkError::Closed`] once the input has been invalidated.
	fn ensure_open(&self) -> Result<()>;

	/// 1-byte boolean: zero is false, anything else is true.
	fn read_boolean(&mut self) -> Result<bool>;
	/// 1-byte signed integer.
	fn read_byte(&mut self) -> Result<i8>;
	/// 2-byte signed integer.
	fn read_short(&mut self) -> Result<i16>;
	/// 4-byte signed integer.
	fn read_int(&mut self) -> Result<i32>;
	/// 8-byte signed integer.
	fn read_long(&mut self) -> Result<i64>;
	/// 4-byte float.
	fn read_float(&mut self) -> Result<f32>;
	/// 8-byte float.
	fn read_double(&mut self) -> Result<f64>;
	/// 8-byte date.
	fn read_date(&mut self) -> Result<SqlDate>;
	/// 8-byte time.
	fn read_time(&mut self) -> Result<SqlTime>;
	/// 8-byte timestamp.
	fn read_timestamp(&mut self) -> Result<SqlTimestamp>;
	/// Length-prefixed raw bytes.
	fn read_bytes(&mut self) -> Result<Vec<u8>>;
	/// Length-prefixed UTF-8 text.
	fn read_string(&mut self) -> Result<String>;

	/// Whether the last value read was SQL NULL.
	///
	/// Always `false`: nullability travels out of band, above this layer.
	fn was_null(&self) -> Result<bool> {
		Ok(false)
	}

	/// Decimal parsed from the next text field.
	///
	/// Accepts an optional sign, digits with an optional fraction, and an
	/// optional `e`/`E` exponent. Digit separators are rejected.
	fn read_big_decimal(&mut self) -> Result<BigDecimal> {
		let text = self.read_string()?;
		if !is_decimal_literal(&text) {
			let source = ParseBigDecimalError::Other(format!("{text:?} is not a plain decimal literal"));
			return Err(ChunkError::InvalidDecimal { text, source });
		}
		BigDecimal::from_str(&text).map_err(|source| ChunkError::InvalidDecimal { text, source })
	}

	/// Resource locator parsed from the next text field.
	fn read_url(&mut self) -> Result<Url> {
		let text = self.read_string()?;
		Url::parse(&text).map_err(|source| ChunkError::InvalidUrl { text, source })
	}

	/// Byte stream over the next byte field.
	fn read_binary_stream(&mut self) -> Result<ByteStream> {
		Ok(ByteStream::new(self.read_bytes()?))
	}

	/// Character stream over the next text field.
	fn read_character_stream(&mut self) -> Result<CharStream> {
		Ok(CharStream::new(self.read_string()?))
	}

	/// Structured array. Not decoded.
	fn read_array(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_array")
	}

	/// ASCII byte stream. Not decoded.
	fn read_ascii_stream(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_ascii_stream")
	}

	/// Large binary object. Not decoded.
	fn read_blob(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_blob")
	}

	/// Large character object. Not decoded.
	fn read_clob(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_clob")
	}

	/// Generic object graph. Not decoded.
	fn read_object(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_object")
	}

	/// Opaque reference. Not decoded.
	fn read_ref(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_ref")
	}

	/// Row identifier. Not decoded.
	fn read_row_id(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_row_id")
	}

	/// XML value. Not decoded.
	fn read_sqlxml(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_sqlxml")
	}

	/// National-character text. Not decoded.
	fn read_nstring(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_nstring")
	}

	/// Large national-character object. Not decoded.
	fn read_nclob(&mut self) -> Result<NotDecoded> {
		not_implemented(self, "read_nclob")
	}
}

fn not_implemented<I: StructuredInput + ?Sized>(input: &I, op: &'static str) -> Result<NotDecoded> {
	input.ensure_open()?;
	Err(ChunkError::NotImplemented { op })
}

fn is_decimal_literal(text: &str) -> bool {
	let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
	let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
	let (significand, exponent) = match unsigned.split_once(['e', 'E']) {
		Some((significand, exponent)) => (significand, Some(exponent)),
		None => (unsigned, None),
	};

	let (int, frac) = significand.split_once('.').unwrap_or((significand, ""));
	if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
		return false;
	}

	match exponent {
		None => true,
		Some(exponent) => {
			let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
			!digits.is_empty() && all_digits(digits)
		}
	}
}
