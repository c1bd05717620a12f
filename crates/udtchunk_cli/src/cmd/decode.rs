use std::io;
use std::path::PathBuf;

use serde::Serialize;
use udtchunk::input::{ByteOrderMode, ByteOrderResolver, Chunk, ChunkReader, Layout, Result, Value, decode_record, load_chunk};

use crate::cmd::util::{OrderArgs, parse_mode, render_hex, write_json};

#[derive(clap::Args)]
pub struct Args {
	/// Chunk dump to decode, raw or zstd-compressed.
	pub path: PathBuf,
	/// Comma-separated field kinds, e.g. `i32,string,timestamp`.
	#[arg(long, value_parser = Layout::parse)]
	pub layout: Layout,
	/// Which party produced the chunk.
	#[arg(long, default_value = "scalar", value_parser = parse_mode)]
	pub mode: ByteOrderMode,
	#[command(flatten)]
	pub orders: OrderArgs,
	/// Print one JSON object instead of text.
	#[arg(long)]
	pub json: bool,
}

#[derive(Serialize)]
struct DecodeReport {
	path: String,
	mode: &'static str,
	byte_order: &'static str,
	compression: &'static str,
	fields: Vec<Value>,
	remaining: usize,
}

/// Decode a chunk dump against a positional layout and print the fields.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		layout,
		mode,
		orders,
		json,
	} = args;

	let resolver = ByteOrderResolver::install(orders.resolver())?;
	let (compression, bytes) = load_chunk(&path)?;
	tracing::debug!(path = %path.display(), len = bytes.len(), fields = layout.fields().len(), "loaded chunk");

	let (byte_order, fields, remaining) = ChunkReader::scoped(Chunk::new(&bytes), mode, resolver, |input| {
		let fields = decode_record(input, &layout)?;
		Ok((input.byte_order(), fields, input.remaining().unwrap_or(0)))
	})?;

	if remaining > 0 {
		tracing::warn!(remaining, "chunk has bytes beyond the layout");
	}

	let report = DecodeReport {
		path: path.display().to_string(),
		mode: mode.as_str(),
		byte_order: byte_order.as_str(),
		compression: compression.as_str(),
		fields,
		remaining,
	};

	if json {
		return write_json(io::stdout().lock(), &report);
	}

	println!("path: {}", report.path);
	println!("mode: {}", report.mode);
	println!("byte_order: {}", report.byte_order);
	println!("compression: {}", report.compression);
	println!("fields:");
	for (index, value) in report.fields.iter().enumerate() {
		println!("  {index}: {} = {}", value.kind_str(), render_value(value));
	}
	println!("remaining: {}", report.remaining);

	Ok(())
}

fn render_value(value: &Value) -> String {
	match value {
		Value::Bool(v) => v.to_string(),
		Value::I8(v) => v.to_string(),
		Value::I16(v) => v.to_string(),
		Value::I32(v) => v.to_string(),
		Value::I64(v) | Value::Date(v) | Value::Time(v) | Value::Timestamp(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::Bytes(v) => format!("0x{}", render_hex(v)),
		Value::String(v) => format!("{v:?}"),
		Value::Decimal(v) | Value::Url(v) => v.clone(),
	}
}

#[cfg(test)]
mod tests {
	use udtchunk::input::Value;

	use super::render_value;

	#[test]
	fn renders_values_for_text_output() {
		assert_eq!(render_value(&Value::Bytes(vec![1, 0xAB])), "0x01ab");
		assert_eq!(render_value(&Value::String("a\"b".to_owned())), "\"a\\\"b\"");
		assert_eq!(render_value(&Value::Timestamp(-5)), "-5");
		assert_eq!(render_value(&Value::Decimal("1.10".to_owned())), "1.10");
	}
}
