use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Event, EventPriority};
use crate::{api::ApiEndpoint, utils::GeoLocation};

/// The path for the event creation endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateEventPath;

impl Display for CreateEventPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/event")
	}
}

/// The fields of a new event. Title and description are sent trimmed;
/// optional fields are left out of the payload entirely when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
	/// The title of the event
	pub title: String,
	/// The description of the event
	pub description: String,
	/// The priority of the event
	pub priority: EventPriority,
	/// The event type the event is classified under
	pub event_type_id: Uuid,
	/// Where the incident happened, if known
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<GeoLocation>,
	/// A free-text description of the location
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location_details: Option<String>,
	/// Free-text operator notes
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

/// The response of the event creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateEventResponse {
	/// The event as the server created it
	pub event: Event,
}

/// Route to create a new event.
pub struct CreateEvent;

impl ApiEndpoint for CreateEvent {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = CreateEventRequest;
	type RequestPath = CreateEventPath;
	type RequestQuery = ();
	type ResponseBody = CreateEventResponse;
}
