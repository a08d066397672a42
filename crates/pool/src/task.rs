// Copyright 2025 Irreducible Inc.

use std::sync::{Arc, Condvar, Mutex};

use crate::Error;

struct Slot<T> {
	value: Option<T>,
	abandoned: bool,
}

struct Inner<T> {
	slot: Mutex<Slot<T>>,
	ready: Condvar,
}

/// Write-once producer half of a job result.
///
/// Fulfilling consumes the promise; a promise dropped without a value marks
/// the paired [`JobHandle`] abandoned so its `join` does not block forever.
pub struct Promise<T> {
	inner: Option<Arc<Inner<T>>>,
}

/// Blocking consumer half of a job result.
pub struct JobHandle<T> {
	inner: Arc<Inner<T>>,
}

/// Creates a connected promise/handle pair.
///
/// The write happens-before the read: the fulfilling thread releases the
/// slot mutex before the joining thread observes the value.
pub fn promise<T>() -> (Promise<T>, JobHandle<T>) {
	let inner = Arc::new(Inner {
		slot: Mutex::new(Slot {
			value: None,
			abandoned: false,
		}),
		ready: Condvar::new(),
	});
	(
		Promise {
			inner: Some(Arc::clone(&inner)),
		},
		JobHandle { inner },
	)
}

impl<T> Promise<T> {
	pub fn fulfill(mut self, value: T) {
		let inner = self.inner.take().expect("promise fulfilled twice");
		let mut slot = inner.slot.lock().expect("result slot poisoned");
		slot.value = Some(value);
		inner.ready.notify_all();
	}
}

impl<T> Drop for Promise<T> {
	fn drop(&mut self) {
		if let Some(inner) = self.inner.take() {
			let mut slot = inner.slot.lock().expect("result slot poisoned");
			slot.abandoned = true;
			inner.ready.notify_all();
		}
	}
}

impl<T> JobHandle<T> {
	/// Blocks until the paired promise is fulfilled or dropped.
	pub fn join(self) -> Result<T, Error> {
		let mut slot = self.inner.slot.lock().expect("result slot poisoned");
		loop {
			if let Some(value) = slot.value.take() {
				return Ok(value);
			}
			if slot.abandoned {
				return Err(Error::Abandoned);
			}
			slot = self.inner.ready.wait(slot).expect("result slot poisoned");
		}
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;

	#[test]
	fn fulfill_then_join() {
		let (promise, handle) = promise();
		promise.fulfill(17u32);
		assert_eq!(handle.join(), Ok(17));
	}

	#[test]
	fn join_blocks_until_fulfilled() {
		let (promise, handle) = promise();
		let producer = thread::spawn(move || promise.fulfill("done"));
		assert_eq!(handle.join(), Ok("done"));
		producer.join().expect("producer thread panicked");
	}

	#[test]
	fn dropped_promise_abandons_handle() {
		let (promise, handle) = promise::<u32>();
		drop(promise);
		assert_eq!(handle.join(), Err(Error::Abandoned));
	}
}
