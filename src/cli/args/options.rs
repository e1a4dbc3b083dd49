use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Hashtags on one line, space separated.
	#[default]
	Plain,
	/// The full session outcome as a JSON document.
	Json,
}
