use std::time::Duration;

use crate::prelude::*;

/// The id of a toast in the queue.
pub type ToastId = u64;

/// One toast in the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastData {
	/// The id of the toast
	pub id: ToastId,
	/// The message to show
	pub message: String,
}

/// The toast queue. Lives in the context of the logged in shell so that any
/// page or background component can announce something.
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
	/// The toasts currently on screen, oldest first
	pub queue: RwSignal<Vec<ToastData>>,
	/// The id the next toast gets
	next_id: RwSignal<ToastId>,
}

/// At most this many toasts are kept on screen; older ones are dropped.
const MAX_TOASTS: usize = 5;

impl Default for Toaster {
	fn default() -> Self {
		Toaster {
			queue: create_rw_signal(Vec::new()),
			next_id: create_rw_signal(0),
		}
	}
}

impl Toaster {
	/// Adds a toast to the queue and schedules its dismissal.
	pub fn toast(&self, message: impl Into<String>, duration: u32) {
		let id = self.next_id.get_untracked();
		self.next_id.set(id + 1);

		self.queue.update(|queue| {
			if queue.len() >= MAX_TOASTS {
				queue.remove(0);
			}
			queue.push(ToastData {
				id,
				message: message.into(),
			});
		});

		let toaster = *self;
		set_timeout(
			move || toaster.remove(id),
			Duration::from_millis(u64::from(duration)),
		);
	}

	/// Removes the toast with the given id, if it is still on screen.
	pub fn remove(&self, id: ToastId) {
		self.queue
			.update(|queue| queue.retain(|toast| toast.id != id));
	}
}

/// Puts a [`Toaster`] into the context if none is there yet.
pub fn provide_toaster() {
	if use_context::<Toaster>().is_none() {
		provide_context(Toaster::default());
	}
}

/// The [`Toaster`] from the context.
pub fn expect_toaster() -> Toaster {
	expect_context::<Toaster>()
}
