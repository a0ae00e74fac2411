use std::fmt::{Display, Formatter};

use http::StatusCode;
use serde::{Deserialize, Serialize};

use super::{False, True};
use crate::ErrorType;

/// The body of every API response: either the endpoint's response data
/// flattened next to `"success": true`, or an error code and message next to
/// `"success": false`. The untagged representation means deserialization
/// picks whichever side the marker bool matches.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponseBody<T> {
	/// The request succeeded and the endpoint's data follows
	Success(ApiSuccessResponseBody<T>),
	/// The request failed with an error code
	Error(ApiErrorResponseBody),
}

/// The success side of [`ApiResponseBody`].
#[derive(Debug, Deserialize)]
pub struct ApiSuccessResponseBody<T> {
	/// Always `true`
	pub success: True,
	/// The endpoint's response data, flattened into the envelope
	#[serde(flatten)]
	pub response: T,
}

/// The error side of [`ApiResponseBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponseBody {
	/// Always `false`
	pub success: False,
	/// The machine-readable error code
	pub error: ErrorType,
	/// The human-readable message to surface in the UI
	pub message: String,
}

/// A failed API call: the HTTP status it came back with plus the error body.
/// Network and decode failures are folded into this shape too, with a
/// generic internal error, so every call site handles exactly one error
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorResponse {
	/// The HTTP status code of the response
	pub status_code: StatusCode,
	/// The error body of the response
	pub body: ApiErrorResponseBody,
}

impl ApiErrorResponse {
	/// Folds a transport or decode failure into the error shape, with the
	/// given message as both code context and display text.
	pub fn internal_error(message: impl Display) -> Self {
		let message = message.to_string();
		Self {
			status_code: StatusCode::INTERNAL_SERVER_ERROR,
			body: ApiErrorResponseBody {
				success: False,
				error: ErrorType::server_error(&message),
				message,
			},
		}
	}
}

impl Display for ApiErrorResponse {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		// fall back to the error code's message when the server sent none
		if self.body.message.is_empty() {
			write!(f, "{}", self.body.error)
		} else {
			write!(f, "{}", self.body.message)
		}
	}
}

#[cfg(test)]
mod test {
	use serde_json::json;

	use super::ApiResponseBody;
	use crate::ErrorType;

	#[derive(Debug, serde::Deserialize)]
	#[serde(rename_all = "camelCase")]
	struct TokenPair {
		access_token: String,
		refresh_token: String,
	}

	#[test]
	fn success_envelope_flattens_the_response() {
		let body: ApiResponseBody<TokenPair> = serde_json::from_value(json!({
			"success": true,
			"accessToken": "abc",
			"refreshToken": "def",
		}))
		.unwrap();
		let ApiResponseBody::Success(success) = body else {
			panic!("expected the success side");
		};
		assert_eq!(success.response.access_token, "abc");
		assert_eq!(success.response.refresh_token, "def");
	}

	#[test]
	fn error_envelope_carries_code_and_message() {
		let body: ApiResponseBody<TokenPair> = serde_json::from_value(json!({
			"success": false,
			"error": "invalidPassword",
			"message": "Invalid Password",
		}))
		.unwrap();
		let ApiResponseBody::Error(error) = body else {
			panic!("expected the error side");
		};
		assert_eq!(error.error, ErrorType::InvalidPassword);
		assert_eq!(error.message, "Invalid Password");
	}
}
