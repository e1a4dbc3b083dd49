use std::sync::mpsc::TryRecvError;

use instatag_core::{ServiceError, Submission};

use super::App;

impl<'a> App<'a> {
	/// Submit the current draft, dispatching it to the worker when valid.
	pub(crate) fn request_generation(&mut self) {
		self.status = None;
		match self.lifecycle.submit(&self.post_input.text()) {
			Submission::Dispatched(ticket) => {
				tracing::info!(id = ticket.id, chars = ticket.post.len(), "requesting hashtags");
				self.generation.request(ticket);
				self.post_input.set_disabled(true);
			}
			Submission::Rejected(notice) => {
				tracing::debug!(%notice, "submission rejected");
			}
			Submission::Busy => {}
		}
	}

	/// Drain finished requests from the worker into the lifecycle.
	pub fn pump_generation_results(&mut self) {
		loop {
			match self.generation.try_recv() {
				Ok(result) => {
					if self.lifecycle.complete(result.id, result.outcome) {
						self.post_input.set_disabled(false);
					}
				}
				Err(TryRecvError::Empty) => break,
				Err(TryRecvError::Disconnected) => {
					if let Some(id) = self.lifecycle.loading_id() {
						let lost = ServiceError::Runtime("generation worker disconnected".into());
						self.lifecycle.complete(id, Err(lost));
						self.post_input.set_disabled(false);
					}
					break;
				}
			}
		}
	}
}
