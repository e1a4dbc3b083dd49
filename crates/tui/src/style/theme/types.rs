use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the composer screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for the title bar at the top of the screen.
	pub header: Style,
	/// Style for the focused button and other highlighted chrome.
	pub accent: Style,
	/// Style for the post input border and text.
	pub input: Style,
	/// Style for placeholders, hints, and the footer.
	pub muted: Style,
	/// Style for the error banner.
	pub error: Style,
	/// Style for individual hashtags.
	pub hashtag: Style,
}

impl Theme {
	/// Returns the style for the generate button.
	#[must_use]
	pub fn button_style(&self, focused: bool, busy: bool) -> Style {
		if busy {
			return self.muted.add_modifier(Modifier::DIM);
		}
		if focused {
			Style::new()
				.fg(self.accent.bg.unwrap_or(Color::Black))
				.bg(self.accent.fg.unwrap_or(Color::Reset))
				.add_modifier(Modifier::BOLD)
		} else {
			self.accent
		}
	}

	/// Returns the border style for the input, dimmed while it is disabled.
	#[must_use]
	pub fn input_border_style(&self, focused: bool, disabled: bool) -> Style {
		if disabled {
			self.muted
		} else if focused {
			self.input.add_modifier(Modifier::BOLD)
		} else {
			self.input
		}
	}
}

/// A named theme plus the aliases it answers to.
#[derive(Debug, Clone)]
pub(crate) struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
