//! Core application state and behavior for the hashtag composer.
//!
//! The [`App`] type aggregates the post draft, the request lifecycle, and
//! rendering state. Supporting modules split the implementation into key
//! handling, generation plumbing, and rendering.

mod actions;
mod generation;
mod render;
mod state;

pub use state::{App, Focus};
