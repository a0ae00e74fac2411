use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CreateEventRequest, Event};
use crate::api::ApiEndpoint;

/// The path for updating an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateEventPath {
	/// The id of the event to update
	pub event_id: Uuid,
}

impl Display for UpdateEventPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/event/{}", self.event_id)
	}
}

/// The response of the event update endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateEventResponse {
	/// The event as the server stored it
	pub event: Event,
}

/// Route to update an existing event. The body is the same full field set as
/// a create; the server replaces the event wholesale.
pub struct UpdateEvent;

impl ApiEndpoint for UpdateEvent {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::PATCH;

	type RequestBody = CreateEventRequest;
	type RequestPath = UpdateEventPath;
	type RequestQuery = ();
	type ResponseBody = UpdateEventResponse;
}
