use log::{Level, Record, debug, log_enabled};
use std::panic::Location;

const TARGET: &str = "audio_base";
const DEFAULT_LOG_FILTER: &str = "warn,audio_base=info";

/// Installs the process-wide logger, configured through `RUST_LOG`.
pub fn setup() {
	let env = env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER);

	if env_logger::Builder::from_env(env)
		.format_target(false)
		.try_init()
		.is_err()
	{
		debug!("logger already installed");
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
	Debug,
	Info,
	Warning,
	Critical,
	Error,
}

impl Severity {
	#[must_use]
	pub const fn level(self) -> Level {
		match self {
			Self::Debug => Level::Debug,
			Self::Info => Level::Info,
			Self::Warning => Level::Warn,
			Self::Critical | Self::Error => Level::Error,
		}
	}

	const fn prefix(self) -> &'static str {
		match self {
			Self::Critical => "critical: ",
			_ => "",
		}
	}
}

/// Logs `message` at `severity`, attributed to `location` instead of this module.
pub fn emit(severity: Severity, message: &str, location: &Location<'_>) {
	let level = severity.level();

	if !log_enabled!(target: TARGET, level) {
		return;
	}

	log::logger().log(
		&Record::builder()
			.args(format_args!("{}{message}", severity.prefix()))
			.level(level)
			.target(TARGET)
			.file(Some(location.file()))
			.line(Some(location.line()))
			.build(),
	);
}

#[track_caller]
pub fn debug(message: &str) {
	emit(Severity::Debug, message, Location::caller());
}

#[track_caller]
pub fn info(message: &str) {
	emit(Severity::Info, message, Location::caller());
}

#[track_caller]
pub fn warning(message: &str) {
	emit(Severity::Warning, message, Location::caller());
}

#[track_caller]
pub fn critical(message: &str) {
	emit(Severity::Critical, message, Location::caller());
}

#[track_caller]
pub fn error(message: &str) {
	emit(Severity::Error, message, Location::caller());
}
