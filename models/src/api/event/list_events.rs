use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Event, EventPriority};
use crate::{
	api::ApiEndpoint,
	utils::{Paginated, PaginatedList},
};

/// The path for the event list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEventsPath;

impl Display for ListEventsPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/event")
	}
}

/// The filters the events list accepts. Absent filters are left out of the
/// query string entirely.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
	/// Only return events with this priority
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub priority: Option<EventPriority>,
	/// Only return events of this event type
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub event_type: Option<Uuid>,
}

/// Route to list events, filtered and paginated.
pub struct ListEvents;

impl ApiEndpoint for ListEvents {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListEventsPath;
	type RequestQuery = Paginated<EventFilter>;
	type ResponseBody = PaginatedList<Event>;
}
