use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType};
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// Argument bundle for rendering the post input.
pub struct PostInputView<'a> {
	/// Box title.
	pub title: &'a str,
	/// Placeholder text shown when the input is empty.
	pub placeholder: &'a str,
	/// Whether keyboard focus is on the input.
	pub focused: bool,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Multi-line editor holding the post draft.
///
/// While disabled the editor keeps rendering its text but ignores every key.
pub struct PostInput<'a> {
	textarea: TextArea<'a>,
	disabled: bool,
}

impl<'a> PostInput<'a> {
	/// Create an editor pre-filled with `initial`, cursor at the end.
	pub fn new(initial: impl Into<String>) -> Self {
		let initial = initial.into();
		let mut textarea = if initial.is_empty() {
			TextArea::default()
		} else {
			TextArea::new(initial.lines().map(str::to_owned).collect())
		};
		textarea.move_cursor(CursorMove::Bottom);
		textarea.move_cursor(CursorMove::End);

		Self {
			textarea,
			disabled: false,
		}
	}

	/// Full text of the draft, lines joined with `\n`.
	#[must_use]
	pub fn text(&self) -> String {
		self.textarea.lines().join("\n")
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
	}

	/// Forward a key to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if self.disabled {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&mut self, frame: &mut Frame, area: Rect, view: PostInputView<'_>) {
		let PostInputView {
			title,
			placeholder,
			focused,
			theme,
		} = view;

		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.title(format!(" {title} "))
			.border_style(theme.input_border_style(focused, self.disabled));

		let cursor_style = if focused && !self.disabled {
			Style::new().add_modifier(Modifier::REVERSED)
		} else {
			Style::new()
		};

		self.textarea.set_block(block);
		self.textarea.set_style(if self.disabled {
			theme.muted
		} else {
			theme.input
		});
		self.textarea.set_cursor_line_style(Style::new());
		self.textarea.set_cursor_style(cursor_style);
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(theme.muted);

		frame.render_widget(&self.textarea, area);
	}
}
