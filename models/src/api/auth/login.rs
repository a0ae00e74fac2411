use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};

use crate::{api::ApiEndpoint, UserIdentity};

/// The path for the login endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginPath;

impl Display for LoginPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/auth/sign-in")
	}
}

/// The credentials to start a session with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
	/// The email of the user
	pub email: String,
	/// The password of the user
	pub password: String,
}

/// The tokens and cached identity a successful login returns. The access
/// token authenticates every further request; the refresh token renews it
/// when it expires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
	/// The JWT access token
	pub access_token: String,
	/// The refresh token used to renew the access token
	pub refresh_token: String,
	/// The identity and role of the user that logged in
	pub user: UserIdentity,
}

/// Route to login and start a new user session.
pub struct Login;

impl ApiEndpoint for Login {
	const IS_PROTECTED: bool = false;
	const METHOD: Method = Method::POST;

	type RequestBody = LoginRequest;
	type RequestPath = LoginPath;
	type RequestQuery = ();
	type ResponseBody = LoginResponse;
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::LoginRequest;

	#[test]
	fn assert_request_types() {
		assert_tokens(
			&LoginRequest {
				email: "citizen@example.com".to_string(),
				password: "hunter2".to_string(),
			},
			&[
				Token::Struct {
					name: "LoginRequest",
					len: 2,
				},
				Token::Str("email"),
				Token::Str("citizen@example.com"),
				Token::Str("password"),
				Token::Str("hunter2"),
				Token::StructEnd,
			],
		);
	}
}
