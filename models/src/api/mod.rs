use std::fmt::Display;

use http::Method;
use serde::{de::DeserializeOwned, Serialize};

/// Authentication: login, registration and logout.
pub mod auth;
/// Live camera feeds.
pub mod camera;
/// Companies and their settings.
pub mod company;
/// Operator-created events.
pub mod event;
/// The event type reference enumeration.
pub mod event_type;
/// The push notifications delivered over the websocket channel.
pub mod notification;
/// Citizen reports and their verification workflow.
pub mod report;
/// Platform users and role management.
pub mod user;

pub use self::{
	auth::*,
	camera::*,
	company::*,
	event::*,
	event_type::*,
	notification::*,
	report::*,
	user::*,
};

/// A trait that defines an API endpoint: its method, path, query, body and
/// response types, and whether it needs the access token. The client builds
/// requests from these definitions so that every call in the console is
/// typed end to end.
pub trait ApiEndpoint {
	/// The HTTP method used for this endpoint
	const METHOD: Method;
	/// Whether the endpoint requires the bearer access token. Protected
	/// endpoints are never called without a session.
	const IS_PROTECTED: bool;

	/// The path of the endpoint, with any URL parameters baked into the
	/// struct's `Display` impl
	type RequestPath: Display + Clone + Send + Sync + 'static;
	/// The query parameters of the endpoint
	type RequestQuery: Serialize + Clone + Send + 'static;
	/// The body of the request
	type RequestBody: Serialize + Clone + Send + 'static;
	/// The data inside the success envelope of the response
	type ResponseBody: DeserializeOwned + 'static;
}

/// Everything needed to issue one call to the given endpoint.
#[derive(Debug, Clone)]
pub struct ApiRequest<E>
where
	E: ApiEndpoint,
{
	/// The path of the request
	pub path: E::RequestPath,
	/// The query parameters of the request
	pub query: E::RequestQuery,
	/// The body of the request
	pub body: E::RequestBody,
}

impl<E> ApiRequest<E>
where
	E: ApiEndpoint,
{
	/// Builds a request for the endpoint from its parts.
	pub fn new(path: E::RequestPath, query: E::RequestQuery, body: E::RequestBody) -> Self {
		Self { path, query, body }
	}
}
