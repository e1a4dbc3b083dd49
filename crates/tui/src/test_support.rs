//! Fake services and key helpers shared by the crate's tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use instatag_core::{HashtagService, ServiceError, ServiceResult};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;

/// Answers every request with the same reply, or fails when none is set.
pub(crate) struct ScriptedService {
	reply: Option<String>,
	calls: Arc<AtomicUsize>,
}

impl ScriptedService {
	pub(crate) fn replying(reply: &str) -> Self {
		Self {
			reply: Some(reply.to_string()),
			calls: Arc::default(),
		}
	}

	pub(crate) fn failing() -> Self {
		Self {
			reply: None,
			calls: Arc::default(),
		}
	}

	pub(crate) fn calls(&self) -> Arc<AtomicUsize> {
		Arc::clone(&self.calls)
	}
}

impl HashtagService for ScriptedService {
	async fn generate(&self, _post: &str) -> ServiceResult<String> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.reply
			.clone()
			.ok_or_else(|| ServiceError::InvalidResponse("scripted failure".into()))
	}
}

/// Never answers, which keeps the app in its loading state.
pub(crate) struct PendingService;

impl HashtagService for PendingService {
	async fn generate(&self, _post: &str) -> ServiceResult<String> {
		std::future::pending().await
	}
}

/// Panics inside the worker, taking the worker thread down with it.
pub(crate) struct PanickingService;

impl HashtagService for PanickingService {
	async fn generate(&self, _post: &str) -> ServiceResult<String> {
		panic!("generation crashed")
	}
}

pub(crate) fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

pub(crate) fn ctrl(ch: char) -> KeyEvent {
	KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub(crate) fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		let code = if ch == '\n' {
			KeyCode::Enter
		} else {
			KeyCode::Char(ch)
		};
		app.handle_key(key(code)).unwrap();
	}
}

pub(crate) fn wait_for_completion(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while app.lifecycle().is_loading() {
		assert!(Instant::now() < deadline, "generation did not finish");
		app.pump_generation_results();
		thread::sleep(Duration::from_millis(10));
	}
}
