use anyhow::Result;
use instatag_core::SessionOutcome;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, Focus};
use crate::components::copy_to_clipboard;

impl<'a> App<'a> {
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancel())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.cancel())),
			KeyCode::Char('s') if ctrl => return Ok(Some(self.accept())),
			KeyCode::Char('g') if ctrl => self.request_generation(),
			KeyCode::F(5) => self.request_generation(),
			KeyCode::Char('y') if ctrl => self.copy_hashtags(),
			KeyCode::Tab | KeyCode::BackTab => {
				self.focus = self.focus.toggled();
			}
			KeyCode::Enter if self.focus == Focus::Button => self.request_generation(),
			_ if self.focus == Focus::Input => {
				self.post_input.input(key);
			}
			_ => {}
		}
		Ok(None)
	}

	fn copy_hashtags(&mut self) {
		let Some(set) = self.lifecycle.succeeded().filter(|set| !set.is_empty()) else {
			self.status = Some("Nothing to copy yet".to_string());
			return;
		};

		let count = set.len();
		let joined = set.joined();
		self.status = Some(match copy_to_clipboard(&joined) {
			Ok(()) => format!("Copied {count} hashtags"),
			Err(err) => {
				tracing::warn!(error = %err, "clipboard copy failed");
				format!("Copy failed: {err}")
			}
		});
	}
}
