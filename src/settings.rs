use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use instatag_core::service::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use instatag_tui::UiLabels;
use serde::Deserialize;

use crate::app_dirs;
use crate::cli::CliArgs;

const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_FILE_NAME: &str = "instatag.log";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	service: ServiceSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServiceSection {
	api_key: Option<String>,
	model: Option<String>,
	base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
	subtitle: Option<String>,
	initial_post: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// Settings after merging config files, environment, and flags.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// Key from the flag or a config file. The environment is consulted later.
	pub api_key: Option<String>,
	pub model: String,
	pub base_url: String,
	pub theme: Option<String>,
	pub labels: UiLabels,
	pub initial_post: String,
	pub log_level: String,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!(
			"  API key: {}",
			if self.api_key.is_some() {
				"(set)"
			} else {
				"(from environment)"
			}
		);
		println!("  Model: {}", self.model);
		println!("  Base URL: {}", self.base_url);
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		println!("  Title: {}", self.labels.title);
		println!("  Subtitle: {}", self.labels.subtitle);
		if !self.initial_post.is_empty() {
			println!("  Initial post: {}", self.initial_post);
		}
		println!("  Log level: {}", self.log_level);
		if let Some(path) = &self.log_file {
			println!("  Log file: {}", path.display());
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve())
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("instatag")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".instatag.toml"));
		files.push(current_dir.join("instatag.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		// A blank flag or GEMINI_API_KEY must not mask a key from a config file.
		if let Some(key) = non_blank(cli.api_key.clone()) {
			self.service.api_key = Some(key);
		}
		if let Some(model) = non_blank(cli.model.clone()) {
			self.service.model = Some(model);
		}
		if let Some(base_url) = non_blank(cli.base_url.clone()) {
			self.service.base_url = Some(base_url);
		}

		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(subtitle) = cli.subtitle.clone() {
			self.ui.subtitle = Some(subtitle);
		}
		if let Some(post) = cli.post.clone() {
			self.ui.initial_post = Some(post);
		}

		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	fn resolve(self) -> ResolvedConfig {
		let RawConfig {
			service,
			ui,
			logging,
		} = self;

		let mut labels = UiLabels::default();
		if let Some(title) = ui.title {
			labels = labels.with_title(title);
		}
		if let Some(subtitle) = ui.subtitle {
			labels = labels.with_subtitle(subtitle);
		}

		ResolvedConfig {
			api_key: non_blank(service.api_key),
			model: non_blank(service.model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
			base_url: non_blank(service.base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			theme: non_blank(ui.theme),
			labels,
			initial_post: ui.initial_post.unwrap_or_default(),
			log_level: non_blank(logging.level).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
			log_file: logging.file,
		}
	}
}

fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Log file path: explicit setting, else `instatag.log` in the data directory.
pub fn log_file_path(config: &ResolvedConfig) -> Result<PathBuf> {
	match &config.log_file {
		Some(path) => Ok(path.clone()),
		None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
	}
}
