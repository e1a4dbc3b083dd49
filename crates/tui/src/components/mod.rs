//! UI building blocks shared across rendering and state modules.

/// Error banner.
pub mod alert;
/// Generate button.
pub mod button;
/// Clipboard integration for copying hashtags.
pub mod clipboard;
/// Key hints and attribution line.
pub mod footer;
/// Hashtag display with wrapped chips.
pub mod hashtags;
/// Title bar.
pub mod header;
/// Spinner shown while a request is outstanding.
pub mod loader;
/// Multi-line post editor.
pub mod post_input;

pub use alert::render_alert;
pub use button::render_button;
pub use clipboard::copy_to_clipboard;
pub use footer::render_footer;
pub use hashtags::{hashtag_lines, render_hashtags};
pub use header::render_header;
pub use loader::render_loader;
pub use post_input::PostInput;
