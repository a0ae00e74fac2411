use serde::{Deserialize, Serialize};

/// The query parameters for a paginated list endpoint. Any endpoint-specific
/// filters are flattened alongside the page number and page size, so a filter
/// struct can be dropped in as `Paginated<ReportFilter>` and the whole thing
/// serializes to a single flat query string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T = ()> {
	/// Any other query parameters that should be included in the request.
	#[serde(flatten)]
	pub data: T,
	/// The page to return, one-indexed. Changing any filter on a list view
	/// resets this to 1.
	#[serde(default = "default_page")]
	pub page: usize,
	/// The number of items to return per page.
	#[serde(default = "default_page_size")]
	pub limit: usize,
}

impl<T> Paginated<T> {
	/// The default page size used when none is specified.
	pub const DEFAULT_PAGE_SIZE: usize = 10;

	/// The first page of results for the given filters, with the default
	/// page size.
	pub fn first_page(data: T) -> Self {
		Self {
			data,
			page: 1,
			limit: Self::DEFAULT_PAGE_SIZE,
		}
	}
}

/// The first page, for use as a serde default.
const fn default_page() -> usize {
	1
}

/// The default page size, for use as a serde default.
const fn default_page_size() -> usize {
	Paginated::<()>::DEFAULT_PAGE_SIZE
}

impl<T> Default for Paginated<T>
where
	T: Default,
{
	fn default() -> Self {
		Self::first_page(T::default())
	}
}

/// The metadata returned alongside every paginated list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
	/// The page that was returned, one-indexed
	pub page: usize,
	/// The total number of pages available for the query
	pub total_pages: usize,
	/// The total number of items available for the query
	pub total: usize,
}

/// A page of results from a list endpoint, in the API's
/// `{ data: [...], meta: { ... } }` shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaginatedList<T> {
	/// The items on the requested page
	pub data: Vec<T>,
	/// Pagination metadata for the query
	pub meta: ListMeta,
}

impl<T> Default for PaginatedList<T> {
	fn default() -> Self {
		Self {
			data: Vec::new(),
			meta: ListMeta::default(),
		}
	}
}

#[cfg(test)]
mod test {
	use serde::Serialize;

	use super::Paginated;

	#[derive(Debug, Default, Serialize)]
	struct StatusFilter {
		#[serde(skip_serializing_if = "Option::is_none")]
		status: Option<String>,
	}

	#[test]
	fn filters_flatten_into_the_query() {
		let query = serde_urlencoded::to_string(Paginated {
			data: StatusFilter {
				status: Some("pending".to_string()),
			},
			page: 3,
			limit: 10,
		})
		.unwrap();
		assert_eq!(query, "status=pending&page=3&limit=10");
	}

	#[test]
	fn absent_filters_leave_no_query_keys() {
		let query = serde_urlencoded::to_string(Paginated::first_page(StatusFilter::default()))
			.unwrap();
		assert_eq!(query, "page=1&limit=10");
	}
}
