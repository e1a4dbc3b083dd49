//! Core state container for the composer screen.

use anyhow::{Context, Result};
use instatag_core::{GenerationRuntime, HashtagService, Lifecycle, SessionOutcome};
use throbber_widgets_tui::ThrobberState;

use crate::components::PostInput;
use crate::config::UiLabels;
use crate::style::{StyleConfig, Theme};

/// Which control receives `Enter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	Input,
	Button,
}

impl Focus {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Input => Self::Button,
			Self::Button => Self::Input,
		}
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) post_input: PostInput<'a>,
	pub(crate) lifecycle: Lifecycle,
	pub(crate) generation: GenerationRuntime,
	pub(crate) ui: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) focus: Focus,
	pub(crate) status: Option<String>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] whose generate button calls `service`.
	pub fn new<S: HashtagService>(service: S) -> Result<Self> {
		let generation =
			GenerationRuntime::new(service).context("failed to start generation worker")?;

		Ok(Self {
			post_input: PostInput::new(String::new()),
			lifecycle: Lifecycle::new(),
			generation,
			ui: UiLabels::default(),
			style: StyleConfig::default(),
			throbber_state: ThrobberState::default(),
			focus: Focus::default(),
			status: None,
		})
	}

	/// Replace the post draft.
	pub fn set_post(&mut self, post: impl Into<String>) {
		self.post_input = PostInput::new(post);
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.ui = labels;
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
	}

	/// Current post text.
	#[must_use]
	pub fn post(&self) -> String {
		self.post_input.text()
	}

	/// Hashtags from the last successful request.
	#[must_use]
	pub fn hashtags(&self) -> &[String] {
		self.lifecycle.hashtags()
	}

	#[must_use]
	pub fn lifecycle(&self) -> &Lifecycle {
		&self.lifecycle
	}

	#[must_use]
	pub fn focus(&self) -> Focus {
		self.focus
	}

	pub(crate) fn accept(&self) -> SessionOutcome {
		SessionOutcome {
			accepted: true,
			post: self.post(),
			hashtags: self.lifecycle.succeeded().cloned().unwrap_or_default(),
		}
	}

	pub(crate) fn cancel(&self) -> SessionOutcome {
		SessionOutcome::cancelled(self.post())
	}
}
