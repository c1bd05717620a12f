mod byte_order;
mod chunk;
mod compression;
mod error;
mod layout;
mod reader;
mod resolver;
mod settings;
mod structured;
mod value;

/// Byte-order enums and setting values.
pub use byte_order::{ByteOrderMode, ByteOrderSetting, Endianness};
/// Bounded cursor over host-owned bytes.
pub use chunk::Chunk;
/// Chunk dump loading.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes, load_chunk};
/// Error, category, and result aliases.
pub use error::{ChunkError, ErrorKind, Result};
/// Positional record layouts.
pub use layout::{FieldKind, Layout, LayoutParseError, decode_record};
/// Chunk reader.
pub use reader::ChunkReader;
/// Process-wide byte-order resolution.
pub use resolver::ByteOrderResolver;
/// Named setting sources.
pub use settings::{EnvSettings, MapSettings, SettingSource};
/// Structured input abstraction.
pub use structured::StructuredInput;
/// Decoded value types.
pub use value::{ByteStream, CharStream, NotDecoded, SqlDate, SqlTime, SqlTimestamp, Value};
