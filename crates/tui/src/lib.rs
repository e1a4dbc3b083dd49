//! Interactive terminal UI for composing a post and generating hashtags.
//!
//! This crate contains the builder, event loop, rendering pipeline, and the
//! reusable widgets and themes that make up the composer screen.

mod app;
mod builder;
pub mod components;
mod config;
mod runtime;
pub mod style;

#[cfg(test)]
mod test_support;

pub use app::{App, Focus};
pub use builder::Composer;
pub use config::UiLabels;
pub use runtime::run;

pub use crate::style::{StyleConfig, Theme, default_theme};
