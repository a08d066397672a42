// Copyright 2025 Irreducible Inc.

use std::{
	num::NonZero,
	panic,
	sync::{Arc, Condvar, Mutex, OnceLock},
	thread::{self, JoinHandle},
};

use crate::{
	JobHandle,
	queue::JobQueue,
	task::promise,
};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Shared {
	queue: JobQueue<Job>,
	// The flag guarded by the condvar mutex; set exactly once, on shutdown.
	closing: Mutex<bool>,
	signal: Condvar,
}

impl Shared {
	fn worker_loop(&self) {
		loop {
			{
				let mut closing = self.closing.lock().expect("pool state poisoned");
				while self.queue.is_empty() && !*closing {
					closing = self.signal.wait(closing).expect("pool state poisoned");
				}
				if *closing {
					return;
				}
			}

			// Another worker may have raced us to the job; just go back to
			// waiting if the queue turned out empty.
			if let Some(job) = self.queue.pop() {
				// A panicking job drops its promise mid-unwind, which flags
				// the handle as abandoned; the worker itself survives.
				let _ = panic::catch_unwind(panic::AssertUnwindSafe(job));
				let _guard = self.closing.lock().expect("pool state poisoned");
				self.signal.notify_all();
			}
		}
	}
}

/// A fixed set of worker threads executing submitted closures.
///
/// The worker count is rounded up to the next power of two so that pair-wise
/// reductions over per-worker results stay balanced. Submission returns a
/// [`JobHandle`] that resolves once a worker has run the closure. Dropping
/// the pool sets the shutdown flag, wakes every worker, and joins them;
/// jobs still queued at that point never run and their handles report
/// [`Error::Abandoned`](crate::Error::Abandoned).
pub struct ThreadPool {
	shared: Arc<Shared>,
	workers: Vec<JoinHandle<()>>,
	worker_count: u32,
}

impl ThreadPool {
	/// Spawns `capacity.max(1).next_power_of_two()` workers.
	pub fn new(capacity: u32) -> Self {
		let worker_count = capacity.max(1).next_power_of_two();
		let shared = Arc::new(Shared {
			queue: JobQueue::new(),
			closing: Mutex::new(false),
			signal: Condvar::new(),
		});

		let workers = (0..worker_count)
			.map(|_| {
				let shared = Arc::clone(&shared);
				thread::spawn(move || shared.worker_loop())
			})
			.collect();

		Self {
			shared,
			workers,
			worker_count,
		}
	}

	/// The process-wide pool, sized from the hardware concurrency hint.
	///
	/// Initialized on first access and never torn down: the workers of the
	/// shared instance park on the condvar until the process exits. Pools
	/// that must join their workers are constructed with [`ThreadPool::new`]
	/// and dropped.
	pub fn instance() -> &'static Self {
		static INSTANCE: OnceLock<ThreadPool> = OnceLock::new();
		INSTANCE.get_or_init(|| {
			let hint = thread::available_parallelism().map_or(1, NonZero::get);
			Self::new(hint as u32)
		})
	}

	pub fn worker_count(&self) -> u32 {
		self.worker_count
	}

	/// Queues `job` and returns the handle to its eventual result.
	pub fn run<T, F>(&self, job: F) -> JobHandle<T>
	where
		T: Send + 'static,
		F: FnOnce() -> T + Send + 'static,
	{
		let (promise, handle) = promise();
		let guard = self.shared.closing.lock().expect("pool state poisoned");
		self.shared.queue.push(Box::new(move || promise.fulfill(job())));
		self.shared.signal.notify_all();
		drop(guard);
		handle
	}

	/// Blocks until the queue is observed empty.
	///
	/// Jobs a worker has already popped may still be running; await their
	/// individual handles to wait for completion.
	pub fn wait_all_jobs(&self) {
		let mut closing = self.shared.closing.lock().expect("pool state poisoned");
		while !self.shared.queue.is_empty() {
			closing = self.shared.signal.wait(closing).expect("pool state poisoned");
		}
	}
}

impl Drop for ThreadPool {
	fn drop(&mut self) {
		*self.shared.closing.lock().expect("pool state poisoned") = true;
		self.shared.signal.notify_all();
		for worker in self.workers.drain(..) {
			let _ = worker.join();
		}
	}
}
