use udtchunk_testkit::ChunkBuilder;

use crate::input::{ByteOrderMode, Chunk, ChunkError, ChunkReader, Endianness, FieldKind, Layout, StructuredInput, Value, decode_record};

#[test]
fn parses_layout_labels_with_whitespace() {
	let layout = Layout::parse(" i32, string ,bool").expect("layout parses");
	assert_eq!(layout.fields(), &[FieldKind::I32, FieldKind::String, FieldKind::Bool]);
}

#[test]
fn empty_layout_decodes_nothing() {
	let layout = Layout::parse("").expect("empty layout");
	assert!(layout.fields().is_empty());

	let mut input = ChunkReader::with_order(Chunk::new(&[]), ByteOrderMode::Scalar, Endianness::Big);
	assert!(decode_record(&mut input, &layout).expect("nothing to read").is_empty());
}

#[test]
fn rejects_unknown_label_with_position() {
	let err = Layout::parse("i32,int64").expect_err("unknown label");
	assert_eq!(err.label, "int64");
	assert_eq!(err.index, 1);
}

#[test]
fn every_label_round_trips() {
	for kind in FieldKind::ALL {
		assert_eq!(FieldKind::from_label(kind.as_str()), Some(kind));
	}
}

#[test]
fn decodes_record_in_layout_order() {
	let bytes = ChunkBuilder::little_endian()
		.short(-1)
		.string("k")
		.long(1_700_000_000_000)
		.string("3.50")
		.string("file:///tmp/x")
		.bytes(&[9])
		.build();
	let layout = Layout::parse("i16,string,timestamp,decimal,url,bytes").expect("layout");
	let mut input = ChunkReader::with_order(Chunk::new(&bytes), ByteOrderMode::Mirror, Endianness::Little);

	let values = decode_record(&mut input, &layout).expect("record decodes");
	assert_eq!(
		values,
		vec![
			Value::I16(-1),
			Value::String("k".to_owned()),
			Value::Timestamp(1_700_000_000_000),
			Value::Decimal("3.50".to_owned()),
			Value::Url("file:///tmp/x".to_owned()),
			Value::Bytes(vec![9]),
		]
	);
	assert_eq!(input.remaining(), Some(0));
}

#[test]
fn decode_stops_at_first_failure() {
	let bytes = ChunkBuilder::big_endian().int(1).prefix(4).raw(b"ab").build();
	let layout = Layout::parse("i32,string,i32").expect("layout");
	let mut input = ChunkReader::with_order(Chunk::new(&bytes), ByteOrderMode::Scalar, Endianness::Big);

	let err = decode_record(&mut input, &layout).expect_err("truncated string");
	assert!(matches!(err, ChunkError::UnexpectedEof { op: "read_string", .. }));
}

#[test]
fn decodes_through_trait_object() {
	let bytes = ChunkBuilder::big_endian().boolean(false).float(0.5).build();
	let layout = Layout::new(vec![FieldKind::Bool, FieldKind::F32]);
	let mut reader = ChunkReader::with_order(Chunk::new(&bytes), ByteOrderMode::Scalar, Endianness::Big);
	let input: &mut dyn StructuredInput = &mut reader;

	let values = decode_record(input, &layout).expect("record decodes");
	assert_eq!(values, vec![Value::Bool(false), Value::F32(0.5)]);
}
