use std::fmt;

use crate::input::{Result, StructuredInput, Value};

/// Field kinds a positional layout can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
	/// `bool`
	Bool,
	/// `i8`
	I8,
	/// `i16`
	I16,
	/// `i32`
	I32,
	/// `i64`
	I64,
	/// `f32`
	F32,
	/// `f64`
	F64,
	/// `date`
	Date,
	/// `time`
	Time,
	/// `timestamp`
	Timestamp,
	/// `bytes`
	Bytes,
	/// `string`
	String,
	/// `decimal`
	Decimal,
	/// `url`
	Url,
}

impl FieldKind {
	/// Every kind, in label order.
	pub const ALL: [Self; 14] = [
		Self::Bool,
		Self::I8,
		Self::I16,
		Self::I32,
		Self::I64,
		Self::F32,
		Self::F64,
		Self::Date,
		Self::Time,
		Self::Timestamp,
		Self::Bytes,
		Self::String,
		Self::Decimal,
		Self::Url,
	];

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::Date => "date",
			Self::Time => "time",
			Self::Timestamp => "timestamp",
			Self::Bytes => "bytes",
			Self::String => "string",
			Self::Decimal => "decimal",
			Self::Url => "url",
		}
	}

	/// Parse a lowercase label.
	pub fn from_label(label: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.as_str() == label)
	}

	/// Read one field of this kind from `input`.
	pub fn read<I: StructuredInput + ?Sized>(self, input: &mut I) -> Result<Value> {
		Ok(match self {
			Self::Bool => Value::Bool(input.read_boolean()?),
			Self::I8 => Value::I8(input.read_byte()?),
			Self::I16 => Value::I16(input.read_short()?),
			Self::I32 => Value::I32(input.read_int()?),
			Self::I64 => Value::I64(input.read_long()?),
			Self::F32 => Value::F32(input.read_float()?),
			Self::F64 => Value::F64(input.read_double()?),
			Self::Date => Value::Date(input.read_date()?.millis()),
			Self::Time => Value::Time(input.read_time()?.millis()),
			Self::Timestamp => Value::Timestamp(input.read_timestamp()?.millis()),
			Self::Bytes => Value::Bytes(input.read_bytes()?),
			Self::String => Value::String(input.read_string()?),
			Self::Decimal => input.read_big_decimal()?.into(),
			Self::Url => input.read_url()?.into(),
		})
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a layout string names an unknown field kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field kind {label:?} at position {index}")]
pub struct LayoutParseError {
	/// Offending label.
	pub label: String,
	/// Zero-based position in the layout.
	pub index: usize,
}

/// Ordered field kinds describing one positional record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
	fields: Vec<FieldKind>,
}

impl Layout {
	/// Build a layout from kinds.
	pub fn new(fields: Vec<FieldKind>) -> Self {
		Self { fields }
	}

	/// Parse a comma-separated list of kind labels, e.g. `"i32,string"`.
	///
	/// Whitespace around labels is ignored; an empty string is an empty layout.
	pub fn parse(text: &str) -> std::result::Result<Self, LayoutParseError> {
		if text.trim().is_empty() {
			return Ok(Self::default());
		}

		let fields = text
			.split(',')
			.enumerate()
			.map(|(index, label)| {
				let label = label.trim();
				FieldKind::from_label(label).ok_or_else(|| LayoutParseError {
					label: label.to_owned(),
					index,
				})
			})
			.collect::<std::result::Result<Vec<_>, _>>()?;
		Ok(Self { fields })
	}

	/// Field kinds in read order.
	pub fn fields(&self) -> &[FieldKind] {
		&self.fields
	}
}

/// Decode every field of `layout` in order, stopping at the first failure.
pub fn decode_record<I: StructuredInput + ?Sized>(input: &mut I, layout: &Layout) -> Result<Vec<Value>> {
	let mut out = Vec::with_capacity(layout.fields.len());
	for kind in &layout.fields {
		out.push(kind.read(input)?);
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
