use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};

use crate::api::ApiEndpoint;

/// The path for the logout endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogoutPath;

impl Display for LogoutPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/auth/sign-out")
	}
}

/// The (empty) response of the logout endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResponse {}

/// Route to invalidate the current session server-side. The client clears
/// its stored tokens regardless of whether this call succeeds.
pub struct Logout;

impl ApiEndpoint for Logout {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::POST;

	type RequestBody = ();
	type RequestPath = LogoutPath;
	type RequestQuery = ();
	type ResponseBody = LogoutResponse;
}
