use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Event;
use crate::api::ApiEndpoint;

/// The path for fetching a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEventInfoPath {
	/// The id of the event to fetch
	pub event_id: Uuid,
}

impl Display for GetEventInfoPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/event/{}", self.event_id)
	}
}

/// The response for a single event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetEventInfoResponse {
	/// The requested event
	pub event: Event,
}

/// Route to get the details of one event.
pub struct GetEventInfo;

impl ApiEndpoint for GetEventInfo {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = GetEventInfoPath;
	type RequestQuery = ();
	type ResponseBody = GetEventInfoResponse;
}
