use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber; `RUST_LOG` overrides the default filter.
pub fn init(verbose: bool) {
	let default = if verbose { "udtchunk=debug,udtchunk_cli=debug" } else { "udtchunk=info,udtchunk_cli=info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().compact().with_writer(std::io::stderr).with_ansi(false))
		.init();
}
