use std::io::{self, Write};

use serde::Serialize;
use udtchunk::input::{ByteOrderMode, ByteOrderResolver, ByteOrderSetting, EnvSettings, MapSettings, Result};

/// Byte-order overrides shared by commands; unset flags fall back to the environment.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OrderArgs {
	/// Byte order for scalar-mode chunks (big_endian, little_endian, native).
	#[arg(long, value_parser = parse_setting)]
	pub scalar_order: Option<ByteOrderSetting>,
	/// Byte order for mirror-mode chunks (big_endian, little_endian, native).
	#[arg(long, value_parser = parse_setting)]
	pub mirror_order: Option<ByteOrderSetting>,
}

impl OrderArgs {
	/// Build a resolver with flag values layered over the environment.
	pub fn resolver(&self) -> ByteOrderResolver {
		let mut settings = MapSettings::new();
		for (mode, setting) in [(ByteOrderMode::Scalar, self.scalar_order), (ByteOrderMode::Mirror, self.mirror_order)] {
			if let Some(setting) = setting {
				settings = settings.with(mode.setting_key(), setting.as_str());
			}
		}
		ByteOrderResolver::new(settings.over(EnvSettings))
	}
}

pub(crate) fn parse_setting(value: &str) -> std::result::Result<ByteOrderSetting, String> {
	ByteOrderSetting::parse(value).ok_or_else(|| format!("{value:?} is not one of big_endian, little_endian, native"))
}

pub(crate) fn parse_mode(value: &str) -> std::result::Result<ByteOrderMode, String> {
	ByteOrderMode::from_label(value).ok_or_else(|| format!("{value:?} is not one of scalar, mirror"))
}

/// Render bytes as lowercase hex.
pub(crate) fn render_hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(mut out: impl Write, value: &T) -> Result<()> {
	serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
	writeln!(out)?;
	Ok(())
}
