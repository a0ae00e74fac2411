use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};

use crate::api::{ApiEndpoint, LoginResponse};

/// The path for the registration endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateAccountPath;

impl Display for CreateAccountPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/auth/sign-up")
	}
}

/// The details a citizen registers with. Every new account starts with the
/// citizen role; other roles are assigned by an admin afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
	/// The email to register with
	pub email: String,
	/// The password for the new account
	pub password: String,
	/// The first name of the user
	pub first_name: String,
	/// The last name of the user
	pub last_name: String,
}

/// Route to register a new citizen account. Registration logs the user
/// straight in, so the response is the same token pair as a login.
pub struct CreateAccount;

impl ApiEndpoint for CreateAccount {
	const IS_PROTECTED: bool = false;
	const METHOD: Method = Method::POST;

	type RequestBody = CreateAccountRequest;
	type RequestPath = CreateAccountPath;
	type RequestQuery = ();
	type ResponseBody = LoginResponse;
}
