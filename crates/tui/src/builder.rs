use anyhow::{Result, anyhow};
use instatag_core::{HashtagService, SessionOutcome};

use crate::App;
use crate::config::UiLabels;
use crate::style::{Theme, by_name, names};

/// Configures and launches the hashtag composer.
pub struct Composer<S> {
	service: S,
	labels: UiLabels,
	theme: Option<Theme>,
	initial_post: Option<String>,
}

impl<S: HashtagService> Composer<S> {
	/// Start a composer that sends posts to `service`.
	pub fn new(service: S) -> Self {
		Self {
			service,
			labels: UiLabels::default(),
			theme: None,
			initial_post: None,
		}
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Look up a registered theme by name or alias.
	pub fn with_theme_name(self, name: &str) -> Result<Self> {
		let theme = by_name(name).ok_or_else(|| {
			anyhow!(
				"unknown theme '{name}' (available: {})",
				names().join(", ")
			)
		})?;
		Ok(self.with_theme(theme))
	}

	/// Pre-fill the post editor.
	#[must_use]
	pub fn with_initial_post(mut self, post: impl Into<String>) -> Self {
		self.initial_post = Some(post.into());
		self
	}

	/// Build the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> Result<App<'a>> {
		let mut app = App::new(self.service)?;
		app.set_labels(self.labels);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(post) = self.initial_post {
			app.set_post(post);
		}
		Ok(app)
	}

	/// Run the interactive composer until the user accepts or cancels.
	pub fn run(self) -> Result<SessionOutcome> {
		let mut app = self.build()?;
		app.run()
	}
}
