use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::ApiEndpoint;

/// A reference entry events are classified under. The full list is small and
/// fetched once per form session to populate the type dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
	/// The id of the event type
	pub id: Uuid,
	/// The display name of the event type
	pub name: String,
	/// The broader category the type belongs to ("security",
	/// "maintenance", etc)
	pub category: String,
}

/// The path for the event type list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListEventTypesPath;

impl Display for ListEventTypesPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/event-type")
	}
}

/// The full event type reference list, unpaginated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListEventTypesResponse {
	/// Every event type on the platform
	pub event_types: Vec<EventType>,
}

/// Route to fetch the event type reference enumeration.
pub struct ListEventTypes;

impl ApiEndpoint for ListEventTypes {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListEventTypesPath;
	type RequestQuery = ();
	type ResponseBody = ListEventTypesResponse;
}
