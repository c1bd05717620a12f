use std::collections::HashMap;

/// Read-only source of named configuration settings.
pub trait SettingSource: Send + Sync {
	/// Return the raw value of `key`, or `None` when unset.
	fn setting(&self, key: &str) -> Option<String>;
}

/// Settings read from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingSource for EnvSettings {
	fn setting(&self, key: &str) -> Option<String> {
		std::env::var(key).ok()
	}
}

/// In-memory settings, optionally layered over a fallback source.
#[derive(Default)]
pub struct MapSettings {
	values: HashMap<String, String>,
	fallback: Option<Box<dyn SettingSource>>,
}

impl MapSettings {
	/// Create an empty map with no fallback.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set `key` to `value`, replacing any earlier value.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(key.into(), value.into());
		self
	}

	/// Consult `fallback` for keys this map does not hold.
	pub fn over(mut self, fallback: impl SettingSource + 'static) -> Self {
		self.fallback = Some(Box::new(fallback));
		self
	}
}

impl SettingSource for MapSettings {
	fn setting(&self, key: &str) -> Option<String> {
		if let Some(value) = self.values.get(key) {
			return Some(value.clone());
		}
		self.fallback.as_ref().and_then(|source| source.setting(key))
	}
}
