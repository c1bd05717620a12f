/// Chunk decode command.
pub mod decode;
/// Byte-order resolution command.
pub mod resolve;

mod util;
