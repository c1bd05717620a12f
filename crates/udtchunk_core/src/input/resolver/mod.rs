use std::sync::OnceLock;

use crate::input::{ByteOrderMode, ByteOrderSetting, ChunkError, EnvSettings, Endianness, Result, SettingSource};

static INSTALLED: OnceLock<ByteOrderResolver> = OnceLock::new();

/// Resolves each [`ByteOrderMode`] to a concrete byte order at most once.
///
/// The first successful resolution of a mode is cached for the lifetime of
/// the resolver; later changes to the underlying setting are not observed.
/// Failed resolutions are not cached, so a missing setting keeps failing.
pub struct ByteOrderResolver {
	source: Box<dyn SettingSource>,
	scalar: OnceLock<Endianness>,
	mirror: OnceLock<Endianness>,
}

impl ByteOrderResolver {
	/// Create a resolver over `source`. Nothing is read until first use.
	pub fn new(source: impl SettingSource + 'static) -> Self {
		Self {
			source: Box::new(source),
			scalar: OnceLock::new(),
			mirror: OnceLock::new(),
		}
	}

	/// Create a resolver reading the process environment.
	pub fn from_env() -> Self {
		Self::new(EnvSettings)
	}

	/// Install `resolver` as the process-wide instance used by [`crate::input::ChunkReader::new`].
	pub fn install(resolver: Self) -> Result<&'static Self> {
		INSTALLED.set(resolver).map_err(|_| ChunkError::ResolverAlreadyInstalled)?;
		INSTALLED.get().ok_or(ChunkError::ResolverNotInstalled)
	}

	/// Return the process-wide instance.
	pub fn installed() -> Result<&'static Self> {
		INSTALLED.get().ok_or(ChunkError::ResolverNotInstalled)
	}

	/// Resolve `mode`, reading its setting only if it was never resolved before.
	pub fn resolve(&self, mode: ByteOrderMode) -> Result<Endianness> {
		let cell = self.cell(mode);
		if let Some(order) = cell.get() {
			return Ok(*order);
		}

		// Concurrent first resolutions compute the same value; the first write wins.
		let order = self.lookup(mode)?;
		Ok(*cell.get_or_init(|| {
			tracing::debug!(mode = mode.as_str(), key = mode.setting_key(), order = order.as_str(), "resolved byte order");
			order
		}))
	}

	/// Return the cached order for `mode` without reading settings.
	pub fn cached(&self, mode: ByteOrderMode) -> Option<Endianness> {
		self.cell(mode).get().copied()
	}

	fn cell(&self, mode: ByteOrderMode) -> &OnceLock<Endianness> {
		match mode {
			ByteOrderMode::Scalar => &self.scalar,
			ByteOrderMode::Mirror => &self.mirror,
		}
	}

	fn lookup(&self, mode: ByteOrderMode) -> Result<Endianness> {
		let key = mode.setting_key();
		let value = self.source.setting(key);
		match value.as_deref().and_then(ByteOrderSetting::parse) {
			Some(setting) => Ok(setting.endianness()),
			None => {
				tracing::warn!(mode = mode.as_str(), key, value = ?value, "unrecognized byte order setting");
				Err(ChunkError::ByteOrderSetting { key, value })
			}
		}
	}
}
