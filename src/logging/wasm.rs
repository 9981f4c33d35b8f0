use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

#[derive(Clone, Debug)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}

impl Config {
	/// Prefix messages with the log target instead of the module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}

	fn format(&self, record: &Record) -> String {
		let origin = match (self.prefer_target, record.module_path()) {
			(false, Some(module_path)) => module_path,
			_ => record.target(),
		};
		format!("[{}] {origin}: {}", record.level(), record.args())
	}
}

/// Writes log records to the browser's developer console.
struct ConsoleLogger(Config);

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.0.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let message = JsValue::from(self.0.format(record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&message),
			Level::Warn => web_sys::console::warn_1(&message),
			Level::Info => web_sys::console::info_1(&message),
			Level::Debug => web_sys::console::log_1(&message),
			Level::Trace => web_sys::console::debug_1(&message),
		}
	}

	fn flush(&self) {}
}

/// Installs the console logger. Does nothing if a logger is already installed.
pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
		log::set_max_level(level);
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn format_module_path() {
		let config = Config::default();
		let message = config.format(
			&Record::builder()
				.args(format_args!("rendered"))
				.level(Level::Info)
				.target("skill_bar")
				.module_path(Some("skill_progress::components"))
				.build(),
		);
		assert_eq!(message, "[INFO] skill_progress::components: rendered");
	}

	#[test]
	fn format_prefer_target() {
		let config = Config::default().prefer_target();
		let message = config.format(
			&Record::builder()
				.args(format_args!("no level"))
				.level(Level::Trace)
				.target("skill_bar")
				.module_path(Some("skill_progress::components"))
				.build(),
		);
		assert_eq!(message, "[TRACE] skill_bar: no level");
	}

	#[test]
	fn level_filter() {
		let logger = ConsoleLogger(Config {
			level: LevelFilter::Warn,
			prefer_target: false,
		});
		let warn = Metadata::builder().level(Level::Warn).build();
		let info = Metadata::builder().level(Level::Info).build();
		assert!(logger.enabled(&warn));
		assert!(!logger.enabled(&info));
	}
}
