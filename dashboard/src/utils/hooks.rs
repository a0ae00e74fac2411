use std::{future::Future, pin::Pin, rc::Rc};

use crate::prelude::*;

/// The boxed future a list fetcher produces.
type ListFuture<T> = Pin<Box<dyn Future<Output = Result<PaginatedList<T>, ApiErrorResponse>>>>;

/// A paginated list query. Holds the rows, the pagination meta and the
/// in-flight state for one list view.
///
/// Every reload bumps an epoch and tags the request with it. A response is
/// applied only when its tag still matches the current epoch, so when the
/// user changes a filter or flips pages while an older request is still in
/// flight, the older response is discarded instead of overwriting newer
/// rows.
pub struct ListQuery<T: 'static> {
	/// The rows of the current page
	pub data: RwSignal<Vec<T>>,
	/// The pagination meta of the last applied response
	pub meta: RwSignal<ListMeta>,
	/// Whether a request is in flight
	pub loading: RwSignal<bool>,
	/// The display message of the last failed request, if any
	pub error: RwSignal<Option<String>>,
	/// The tag of the most recent reload
	epoch: RwSignal<u64>,
	/// Builds the request for the current filter and page
	fetch: StoredValue<Rc<dyn Fn() -> ListFuture<T>>>,
}

impl<T: 'static> Clone for ListQuery<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: 'static> Copy for ListQuery<T> {}

impl<T> ListQuery<T> {
	/// Creates the query and issues the initial load. The fetcher reads
	/// whatever filter and page signals the page owns, untracked; the page
	/// calls [`reload`](Self::reload) when any of them change.
	pub fn new<F>(fetch: impl Fn() -> F + 'static) -> Self
	where
		F: Future<Output = Result<PaginatedList<T>, ApiErrorResponse>> + 'static,
	{
		let query = Self {
			data: create_rw_signal(Vec::new()),
			meta: create_rw_signal(ListMeta::default()),
			loading: create_rw_signal(false),
			error: create_rw_signal(None),
			epoch: create_rw_signal(0),
			fetch: store_value(Rc::new(move || {
				Box::pin(fetch()) as ListFuture<T>
			}) as Rc<dyn Fn() -> ListFuture<T>>),
		};
		query.reload();
		query
	}

	/// Issues a fresh request, invalidating whatever is still in flight.
	pub fn reload(&self) {
		let epoch = self.epoch.get_untracked() + 1;
		self.epoch.set(epoch);
		self.loading.set(true);

		let query = *self;
		let future = self.fetch.with_value(|fetch| fetch());
		spawn_local(async move {
			let result = future.await;
			if query.epoch.get_untracked() != epoch {
				// a newer reload owns the view now
				return;
			}
			match result {
				Ok(list) => {
					query.data.set(list.data);
					query.meta.set(list.meta);
					query.error.set(None);
				}
				Err(error) => {
					query.error.set(Some(error.to_string()));
				}
			}
			query.loading.set(false);
		});
	}
}
