use std::io;

use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer};
use url::Url;

/// Date-only point in time: milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlDate(pub i64);

/// Time-only point in time: milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlTime(pub i64);

/// Date-and-time point in time: milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqlTimestamp(pub i64);

macro_rules! epoch_millis {
	($($ty:ident),*) => {
		$(
			impl $ty {
				/// Milliseconds since the Unix epoch.
				pub fn millis(self) -> i64 {
					self.0
				}
			}
		)*
	};
}

epoch_millis!(SqlDate, SqlTime, SqlTimestamp);

/// Uninhabited result of reads this format never decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotDecoded {}

/// In-memory byte stream over a decoded byte field.
pub type ByteStream = io::Cursor<Vec<u8>>;

/// Character stream over a decoded text field.
#[derive(Debug, Clone)]
pub struct CharStream {
	text: String,
	pos: usize,
}

impl CharStream {
	/// Wrap decoded text.
	pub fn new(text: String) -> Self {
		Self { text, pos: 0 }
	}

	/// Return the text not yet consumed.
	pub fn rest(&self) -> &str {
		&self.text[self.pos..]
	}

	/// Consume the stream and return the unread text.
	pub fn into_rest(mut self) -> String {
		self.text.split_off(self.pos)
	}
}

impl Iterator for CharStream {
	type Item = char;

	fn next(&mut self) -> Option<char> {
		let ch = self.rest().chars().next()?;
		self.pos += ch.len_utf8();
		Some(ch)
	}
}

/// One decoded field of a positional record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
	/// 1-byte boolean.
	Bool(bool),
	/// 1-byte signed integer.
	I8(i8),
	/// 2-byte signed integer.
	I16(i16),
	/// 4-byte signed integer.
	I32(i32),
	/// 8-byte signed integer.
	I64(i64),
	/// 4-byte float. Non-finite values serialize as `"NaN"`, `"inf"`, `"-inf"`.
	#[serde(serialize_with = "serialize_float")]
	F32(f32),
	/// 8-byte float. Non-finite values serialize as `"NaN"`, `"inf"`, `"-inf"`.
	#[serde(serialize_with = "serialize_float")]
	F64(f64),
	/// Date in epoch milliseconds.
	Date(i64),
	/// Time in epoch milliseconds.
	Time(i64),
	/// Timestamp in epoch milliseconds.
	Timestamp(i64),
	/// Length-prefixed raw bytes.
	Bytes(Vec<u8>),
	/// Length-prefixed UTF-8 text.
	String(String),
	/// Decimal parsed from text, kept in its canonical string form.
	Decimal(String),
	/// Resource locator parsed from text.
	Url(String),
}

impl Value {
	/// Label of the field kind that produced this value.
	pub fn kind_str(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::I8(_) => "i8",
			Self::I16(_) => "i16",
			Self::I32(_) => "i32",
			Self::I64(_) => "i64",
			Self::F32(_) => "f32",
			Self::F64(_) => "f64",
			Self::Date(_) => "date",
			Self::Time(_) => "time",
			Self::Timestamp(_) => "timestamp",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "string",
			Self::Decimal(_) => "decimal",
			Self::Url(_) => "url",
		}
	}
}

fn serialize_float<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
	T: Copy + Into<f64> + Serialize,
	S: Serializer,
{
	let wide: f64 = (*value).into();
	if wide.is_nan() {
		serializer.serialize_str("NaN")
	} else if wide.is_infinite() {
		serializer.serialize_str(if wide > 0.0 { "inf" } else { "-inf" })
	} else {
		value.serialize(serializer)
	}
}

impl From<BigDecimal> for Value {
	fn from(value: BigDecimal) -> Self {
		Self::Decimal(value.to_string())
	}
}

impl From<Url> for Value {
	fn from(value: Url) -> Self {
		Self::Url(value.into())
	}
}
