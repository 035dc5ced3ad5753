use async_channel::{Receiver, Sender};
use log::trace;
use std::{
	error::Error,
	fmt::{Display, Formatter},
	sync::LazyLock,
};

pub type IdleTask = Box<dyn FnOnce() + Send>;

static GLOBAL: LazyLock<IdleQueue> = LazyLock::new(IdleQueue::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IdleError {
	Closed,
}

impl Display for IdleError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Closed => f.write_str("the idle queue was dropped"),
		}
	}
}

impl Error for IdleError {}

/// Work handed to the thread that owns the UI.
///
/// Any thread can queue tasks through an [`IdleHandle`]; the owning thread runs them with
/// [`IdleQueue::run_pending`] or awaits them with [`IdleQueue::next_task`].
#[derive(Debug)]
pub struct IdleQueue {
	sender: Sender<IdleTask>,
	receiver: Receiver<IdleTask>,
}

impl Default for IdleQueue {
	fn default() -> Self {
		Self::new()
	}
}

impl IdleQueue {
	#[must_use]
	pub fn new() -> Self {
		let (sender, receiver) = async_channel::unbounded();

		Self { sender, receiver }
	}

	/// The process-wide queue, drained by [`run_idle_tasks`].
	#[must_use]
	pub fn global() -> &'static Self {
		&GLOBAL
	}

	#[must_use]
	pub fn handle(&self) -> IdleHandle {
		IdleHandle {
			sender: self.sender.clone(),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.receiver.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.receiver.is_empty()
	}

	/// Runs every task queued so far on the calling thread, returning how many ran.
	#[must_use = "the count tells whether any UI work happened"]
	pub fn run_pending(&self) -> usize {
		let mut ran = 0;

		while let Ok(task) = self.receiver.try_recv() {
			task();
			ran += 1;
		}

		if ran != 0 {
			trace!("ran {ran} idle tasks");
		}

		ran
	}

	/// Waits for the next task without running it.
	pub async fn next_task(&self) -> Option<IdleTask> {
		self.receiver.recv().await.ok()
	}
}

/// A cloneable sender for an [`IdleQueue`].
#[derive(Clone, Debug)]
pub struct IdleHandle {
	sender: Sender<IdleTask>,
}

impl IdleHandle {
	/// Queues `task` for the thread draining the queue.
	///
	/// # Errors
	///
	/// Returns [`IdleError::Closed`] if the [`IdleQueue`] was dropped.
	pub fn idle_add(&self, task: impl FnOnce() + Send + 'static) -> Result<(), IdleError> {
		self.sender
			.try_send(Box::new(task))
			.map_err(|_| IdleError::Closed)
	}
}

/// Queues `task` on the process-wide queue.
pub fn idle_add(task: impl FnOnce() + Send + 'static) {
	// the global queue owns a sender, so it can't be closed or full
	if GLOBAL.sender.try_send(Box::new(task)).is_err() {
		trace!("global idle queue rejected a task");
	}
}

/// Runs every task queued on the process-wide queue. Call this from the UI thread.
#[must_use = "the count tells whether any UI work happened"]
pub fn run_idle_tasks() -> usize {
	GLOBAL.run_pending()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{
		sync::{
			Arc, Mutex,
			atomic::{AtomicUsize, Ordering},
		},
		thread,
	};

	#[test]
	fn runs_in_submission_order() {
		let queue = IdleQueue::new();
		let handle = queue.handle();
		let order = Arc::new(Mutex::new(Vec::new()));

		for i in 0..5 {
			let order = order.clone();
			handle.idle_add(move || order.lock().unwrap().push(i)).unwrap();
		}

		assert_eq!(queue.len(), 5);
		assert_eq!(queue.run_pending(), 5);
		assert!(queue.is_empty());
		assert_eq!(*order.lock().unwrap(), [0, 1, 2, 3, 4]);
		assert_eq!(queue.run_pending(), 0);
	}

	#[test]
	fn tasks_from_other_threads_run_on_the_draining_thread() {
		let queue = IdleQueue::new();
		let owner = thread::current().id();
		let ran_on_owner = Arc::new(AtomicUsize::new(0));

		let workers = (0..4)
			.map(|_| {
				let handle = queue.handle();
				let ran_on_owner = ran_on_owner.clone();

				thread::spawn(move || {
					for _ in 0..25 {
						let ran_on_owner = ran_on_owner.clone();
						handle
							.idle_add(move || {
								if thread::current().id() == owner {
									ran_on_owner.fetch_add(1, Ordering::Relaxed);
								}
							})
							.unwrap();
					}
				})
			})
			.collect::<Vec<_>>();

		for worker in workers {
			worker.join().unwrap();
		}

		assert_eq!(queue.run_pending(), 100);
		assert_eq!(ran_on_owner.load(Ordering::Relaxed), 100);
	}

	#[test]
	fn dropped_queue_closes_handles() {
		let queue = IdleQueue::new();
		let handle = queue.handle();
		drop(queue);

		assert_eq!(handle.idle_add(|| {}), Err(IdleError::Closed));
		assert_eq!(IdleError::Closed.to_string(), "the idle queue was dropped");
	}

	#[test]
	fn next_task_waits_for_work() {
		let queue = IdleQueue::new();
		let hit = Arc::new(AtomicUsize::new(0));

		let sender = {
			let handle = queue.handle();
			let hit = hit.clone();
			thread::spawn(move || {
				handle
					.idle_add(move || {
						hit.fetch_add(1, Ordering::Relaxed);
					})
					.unwrap();
			})
		};

		let task = smol::block_on(queue.next_task()).unwrap();
		sender.join().unwrap();
		task();

		assert_eq!(hit.load(Ordering::Relaxed), 1);
	}

	#[test]
	fn global_queue() {
		let hit = Arc::new(AtomicUsize::new(0));

		{
			let hit = hit.clone();
			idle_add(move || {
				hit.fetch_add(1, Ordering::Relaxed);
			});
		}

		assert!(run_idle_tasks() >= 1);
		assert_eq!(hit.load(Ordering::Relaxed), 1);
		assert!(IdleQueue::global().handle().idle_add(|| {}).is_ok());
	}
}
