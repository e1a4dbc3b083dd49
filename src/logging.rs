//! File-backed `tracing` subscriber.
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Environment variable holding a filter directive that beats the config.
pub(crate) const LOG_FILTER_ENV: &str = "INSTATAG_LOG";

/// Append-only log file shared by every event.
#[derive(Clone)]
struct LogFile {
	inner: Arc<Mutex<File>>,
}

impl LogFile {
	fn open(path: &Path) -> io::Result<Self> {
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}
		let file = OpenOptions::new().create(true).append(true).open(path)?;
		Ok(Self {
			inner: Arc::new(Mutex::new(file)),
		})
	}
}

impl Write for LogFile {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut file = self
			.inner
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner());
		file.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		self.inner
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.flush()
	}
}

impl<'a> MakeWriter<'a> for LogFile {
	type Writer = LogFile;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

/// Build the filter from `INSTATAG_LOG`, falling back to `level`.
pub(crate) fn build_filter(env_value: Option<&str>, level: &str) -> EnvFilter {
	env_value
		.and_then(|directive| EnvFilter::try_new(directive).ok())
		.or_else(|| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
pub(crate) fn initialize(path: &Path, level: &str) -> Result<()> {
	let writer = LogFile::open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;
	let env_value = env::var(LOG_FILTER_ENV).ok();

	tracing_subscriber::fmt()
		.with_env_filter(build_filter(env_value.as_deref(), level))
		.with_writer(writer)
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;

	tracing::debug!(path = %path.display(), "logging initialised");
	Ok(())
}
