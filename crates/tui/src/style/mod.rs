//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the composer screen. They are
//! bundled as TOML documents and looked up by name or alias.

pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}
