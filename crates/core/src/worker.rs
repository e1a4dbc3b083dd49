//! Background worker that performs hashtag requests.
//!
//! The worker owns the [`HashtagService`] and a current-thread tokio runtime
//! so the UI thread only ever touches channels. Requests are processed in
//! arrival order; the lifecycle guarantees there is at most one in flight.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::lifecycle::Ticket;
use crate::service::{HashtagService, ServiceError, ServiceResult};

/// Commands sent to the generation worker thread.
pub enum GenerationCommand {
	Generate(Ticket),
	Shutdown,
}

/// Result sent back from the generation worker thread.
#[derive(Debug)]
pub struct GenerationResult {
	/// Id of the ticket this result answers.
	pub id: u64,
	pub outcome: ServiceResult<String>,
}

/// Spawn the worker thread and return its channels.
pub fn spawn<S>(service: S) -> io::Result<(Sender<GenerationCommand>, Receiver<GenerationResult>)>
where
	S: HashtagService,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::Builder::new()
		.name("generation-worker".into())
		.spawn(move || worker_loop(service, command_rx, result_tx))?;

	Ok((command_tx, result_rx))
}

fn worker_loop<S>(
	service: S,
	command_rx: Receiver<GenerationCommand>,
	result_tx: Sender<GenerationResult>,
) where
	S: HashtagService,
{
	let runtime = tokio::runtime::Builder::new_current_thread()
		.enable_all()
		.build();

	let runtime = match runtime {
		Ok(runtime) => Some(runtime),
		Err(err) => {
			tracing::error!(error = %err, "Failed to start generation runtime");
			None
		}
	};

	while let Ok(command) = command_rx.recv() {
		match command {
			GenerationCommand::Generate(Ticket { id, post }) => {
				let outcome = match &runtime {
					Some(runtime) => runtime.block_on(service.generate(&post)),
					None => Err(ServiceError::Runtime(
						"tokio runtime failed to start".to_string(),
					)),
				};

				// If the receiver is gone, just exit gracefully
				if result_tx.send(GenerationResult { id, outcome }).is_err() {
					break;
				}
			}
			GenerationCommand::Shutdown => break,
		}
	}

	tracing::debug!("Generation worker stopped");
}

/// Handle to the background generation worker.
pub struct GenerationRuntime {
	tx: Sender<GenerationCommand>,
	rx: Receiver<GenerationResult>,
}

impl GenerationRuntime {
	/// Start a worker that answers requests with `service`.
	pub fn new<S>(service: S) -> io::Result<Self>
	where
		S: HashtagService,
	{
		let (tx, rx) = spawn(service)?;
		Ok(Self { tx, rx })
	}

	/// Queue `ticket` for the worker.
	pub fn request(&self, ticket: Ticket) {
		if self.tx.send(GenerationCommand::Generate(ticket)).is_err() {
			tracing::warn!("Generation worker is gone; request dropped");
		}
	}

	/// Try to receive a completed result.
	pub fn try_recv(&self) -> Result<GenerationResult, TryRecvError> {
		self.rx.try_recv()
	}

	/// Block until the next result arrives.
	pub fn recv(&self) -> Result<GenerationResult, mpsc::RecvError> {
		self.rx.recv()
	}

	pub fn shutdown(&self) {
		let _ = self.tx.send(GenerationCommand::Shutdown);
	}
}

impl Drop for GenerationRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
