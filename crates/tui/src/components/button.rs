use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::style::Theme;

/// Render the generate button.
///
/// A busy button is drawn dimmed and shows the busy label instead.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, focused: bool, busy: bool, theme: &Theme) {
	let style = theme.button_style(focused, busy);
	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(style);
	let paragraph = Paragraph::new(label.to_string())
		.style(style)
		.alignment(Alignment::Center)
		.block(block);
	frame.render_widget(paragraph, area);
}
