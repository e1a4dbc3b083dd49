mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use instatag_core::SessionOutcome;
use settings::ResolvedConfig;
use workflow::ComposerWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in instatag_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let log_path = settings::log_file_path(&resolved)?;
	logging::initialize(&log_path, &resolved.log_level)?;

	let outcome = if cli.headless {
		run_headless(&cli, &resolved)?
	} else {
		ComposerWorkflow::from_config(resolved)?.run()?
	};

	print_outcome(cli.output, &outcome)
}

/// Take the post from `--post`, or read it from stdin when piped.
fn run_headless(cli: &CliArgs, config: &ResolvedConfig) -> Result<SessionOutcome> {
	let post = match &cli.post {
		Some(post) => post.clone(),
		None if !io::stdin().is_terminal() => {
			let mut buffer = String::new();
			io::stdin()
				.read_to_string(&mut buffer)
				.context("failed to read post from stdin")?;
			buffer
		}
		None => config.initial_post.clone(),
	};
	workflow::run_headless(config, &post)
}

fn print_outcome(format: OutputFormat, outcome: &SessionOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
