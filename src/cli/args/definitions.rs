use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `instatag` binary.
#[derive(Parser, Debug)]
#[command(
	name = "instatag",
	version,
	long_version = long_version(),
	about = "Turn a post draft into Instagram hashtags with Gemini",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "INSTATAG_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "api-key",
		value_name = "KEY",
		env = "GEMINI_API_KEY",
		hide_env_values = true,
		help = "Gemini API key (default: API_KEY from the environment)"
	)]
	pub(crate) api_key: Option<String>,
	#[arg(
		short = 'm',
		long,
		value_name = "MODEL",
		help = "Gemini model to call (default: gemini-2.5-flash)"
	)]
	pub(crate) model: Option<String>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Override the Gemini API base URL (default: Google endpoint)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'P',
		long,
		value_name = "TEXT",
		help = "Pre-fill the post editor (default: empty)"
	)]
	pub(crate) post: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Override the header title (default: InstaTag AI)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Override the header tagline (default: Your personal hashtag assistant)"
	)]
	pub(crate) subtitle: Option<String>,
	#[arg(
		long,
		help = "Generate once for --post or stdin and print without the UI (default: disabled)"
	)]
	pub(crate) headless: bool,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: instatag.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
