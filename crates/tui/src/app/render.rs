use instatag_core::Phase;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};

use super::{App, Focus};
use crate::components::post_input::PostInputView;
use crate::components::{
	render_alert, render_button, render_footer, render_hashtags, render_header, render_loader,
};

const HEADER_HEIGHT: u16 = 2;
const INPUT_HEIGHT: u16 = 6;
const BUTTON_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

impl App<'_> {
	/// Draw the whole screen. Below the button at most one of the error
	/// banner, the loader, or the hashtag display is shown.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let [header, _, input, button, result, footer] = Layout::vertical([
			Constraint::Length(HEADER_HEIGHT),
			Constraint::Length(1),
			Constraint::Length(INPUT_HEIGHT),
			Constraint::Length(BUTTON_HEIGHT),
			Constraint::Min(0),
			Constraint::Length(FOOTER_HEIGHT),
		])
		.areas(area);

		let theme = self.style.theme;
		let busy = self.lifecycle.is_loading();

		render_header(frame, header, &self.ui.title, &self.ui.subtitle, &theme);
		self.post_input.render(
			frame,
			input,
			PostInputView {
				title: &self.ui.input_title,
				placeholder: &self.ui.placeholder,
				focused: self.focus == Focus::Input,
				theme: &theme,
			},
		);
		render_button(
			frame,
			button,
			self.ui.button_text(busy),
			self.focus == Focus::Button,
			busy,
			&theme,
		);
		self.render_result(frame, result);
		render_footer(frame, footer, &self.ui.footer, self.status.as_deref(), &theme);
	}

	fn render_result(&self, frame: &mut Frame, area: Rect) {
		if area.height == 0 {
			return;
		}

		let theme = &self.style.theme;
		match self.lifecycle.phase() {
			Phase::Idle => {}
			Phase::Loading { .. } => {
				render_loader(frame, area, &self.ui.loading_label, &self.throbber_state, theme);
			}
			Phase::Failed(notice) => {
				render_alert(frame, area, &self.ui.error_heading, notice.message(), theme);
			}
			Phase::Succeeded(set) if set.is_empty() => {}
			Phase::Succeeded(set) => {
				render_hashtags(frame, area, &self.ui.hashtags_title, set.as_slice(), theme);
			}
		}
	}
}
