// Copyright 2025 Irreducible Inc.

use std::{
	ptr,
	sync::atomic::{AtomicPtr, Ordering},
};

struct Node<T> {
	next: *mut Node<T>,
	value: T,
}

/// Linked queue with atomic head and tail pointers.
///
/// `push` CAS-inserts at the head, so concurrent producers are served in
/// LIFO order. Nodes are freed by the thread that pops them; whatever is
/// still linked when the queue drops is freed there. Intended for the
/// pool's submit-side/worker-side handoff — consumers that need strict
/// FIFO ordering must sequence results elsewhere (the pool does, through
/// job handles).
pub struct JobQueue<T> {
	head: AtomicPtr<Node<T>>,
	tail: AtomicPtr<Node<T>>,
}

unsafe impl<T: Send> Send for JobQueue<T> {}
unsafe impl<T: Send> Sync for JobQueue<T> {}

impl<T> JobQueue<T> {
	pub const fn new() -> Self {
		Self {
			head: AtomicPtr::new(ptr::null_mut()),
			tail: AtomicPtr::new(ptr::null_mut()),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.head.load(Ordering::Acquire).is_null()
	}

	pub fn push(&self, value: T) {
		let node = Box::into_raw(Box::new(Node {
			next: self.head.load(Ordering::Relaxed),
			value,
		}));

		loop {
			// The observed head travels in node.next: on a lost race the
			// failed CAS hands back the new head and we relink and retry.
			let observed = unsafe { (*node).next };
			match self
				.head
				.compare_exchange_weak(observed, node, Ordering::Release, Ordering::Relaxed)
			{
				Ok(_) => {
					if observed.is_null() {
						self.tail.store(node, Ordering::Release);
					}
					return;
				}
				Err(current) => unsafe { (*node).next = current },
			}
		}
	}

	pub fn pop(&self) -> Option<T> {
		let mut current = self.head.load(Ordering::Acquire);

		loop {
			if current.is_null() {
				return None;
			}

			let next = unsafe { (*current).next };
			match self
				.head
				.compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
			{
				Ok(_) => break,
				Err(observed) => current = observed,
			}
		}

		// If the unlinked node was also the tail, the queue is now empty.
		let _ = self.tail.compare_exchange(
			current,
			ptr::null_mut(),
			Ordering::AcqRel,
			Ordering::Relaxed,
		);

		let node = unsafe { Box::from_raw(current) };
		Some(node.value)
	}
}

impl<T> Default for JobQueue<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Drop for JobQueue<T> {
	fn drop(&mut self) {
		let mut current = *self.head.get_mut();
		while !current.is_null() {
			let node = unsafe { Box::from_raw(current) };
			current = node.next;
		}
	}
}
