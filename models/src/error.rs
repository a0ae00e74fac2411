use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use http::StatusCode;
use serde::{de::Error, Deserialize, Serialize};

/// A list of all the possible errors that can be returned by the API
#[derive(Debug)]
pub enum ErrorType {
	/// The email provided is invalid
	InvalidEmail,
	/// The user was not found
	UserNotFound,
	/// The password provided is invalid
	InvalidPassword,
	/// The email provided is not available. It is being used by another account
	EmailUnavailable,
	/// The parameters sent with the request is invalid. This would ideally not
	/// happen unless there is a bug in the client
	WrongParameters,
	/// The access token (JWT) provided is malformed
	MalformedAccessToken,
	/// The refresh token provided is malformed
	MalformedRefreshToken,
	/// The authentication token provided is not authorized to perform the
	/// requested action
	Unauthorized,
	/// The access token (JWT) provided is invalid
	AuthorizationTokenInvalid,
	/// The resource that the user is trying to access does not exist.
	ResourceDoesNotExist,
	/// The company the user belongs to is suspended, and mutations are
	/// disabled for its members until it is reactivated.
	CompanySuspended,
	/// The report has already been verified or rejected and its status can no
	/// longer be changed.
	ReportAlreadyReviewed,
	/// An internal server error occurred. This should not happen unless there
	/// is a bug in the server
	InternalServerError(anyhow::Error),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can
	/// override this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::InvalidEmail => StatusCode::BAD_REQUEST,
			Self::UserNotFound => StatusCode::BAD_REQUEST,
			Self::InvalidPassword => StatusCode::UNAUTHORIZED,
			Self::EmailUnavailable => StatusCode::CONFLICT,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::MalformedAccessToken => StatusCode::BAD_REQUEST,
			Self::MalformedRefreshToken => StatusCode::BAD_REQUEST,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::AuthorizationTokenInvalid => StatusCode::UNAUTHORIZED,
			Self::ResourceDoesNotExist => StatusCode::NOT_FOUND,
			Self::CompanySuspended => StatusCode::FORBIDDEN,
			Self::ReportAlreadyReviewed => StatusCode::CONFLICT,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::InvalidEmail => "Invalid email",
			Self::UserNotFound => "No user exists with those credentials",
			Self::InvalidPassword => "Invalid Password",
			Self::EmailUnavailable => "An account already exists with that email",
			Self::WrongParameters => "The parameters sent with that request is invalid",
			Self::MalformedAccessToken => "Your access token is invalid. Please login again",
			Self::MalformedRefreshToken => "Your refresh token is invalid. Please login again",
			Self::Unauthorized => "You are not authorized to perform that action",
			Self::AuthorizationTokenInvalid => "Your access token has expired. Please login again",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::CompanySuspended => "Your company is currently suspended",
			Self::ReportAlreadyReviewed => "That report has already been reviewed",
			Self::InternalServerError(_) => "An internal server error has occured",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::InvalidEmail => Self::InvalidEmail,
			Self::UserNotFound => Self::UserNotFound,
			Self::InvalidPassword => Self::InvalidPassword,
			Self::EmailUnavailable => Self::EmailUnavailable,
			Self::WrongParameters => Self::WrongParameters,
			Self::MalformedAccessToken => Self::MalformedAccessToken,
			Self::MalformedRefreshToken => Self::MalformedRefreshToken,
			Self::Unauthorized => Self::Unauthorized,
			Self::AuthorizationTokenInvalid => Self::AuthorizationTokenInvalid,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::CompanySuspended => Self::CompanySuspended,
			Self::ReportAlreadyReviewed => Self::ReportAlreadyReviewed,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::InvalidEmail => serializer.serialize_str("invalidEmail"),
			Self::UserNotFound => serializer.serialize_str("userNotFound"),
			Self::InvalidPassword => serializer.serialize_str("invalidPassword"),
			Self::EmailUnavailable => serializer.serialize_str("emailUnavailable"),
			Self::WrongParameters => serializer.serialize_str("wrongParameters"),
			Self::MalformedAccessToken => serializer.serialize_str("malformedAccessToken"),
			Self::MalformedRefreshToken => serializer.serialize_str("malformedRefreshToken"),
			Self::Unauthorized => serializer.serialize_str("unauthorized"),
			Self::AuthorizationTokenInvalid => {
				serializer.serialize_str("authorizationTokenInvalid")
			}
			Self::ResourceDoesNotExist => serializer.serialize_str("resourceDoesNotExist"),
			Self::CompanySuspended => serializer.serialize_str("companySuspended"),
			Self::ReportAlreadyReviewed => serializer.serialize_str("reportAlreadyReviewed"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"invalidEmail" => Self::InvalidEmail,
			"userNotFound" => Self::UserNotFound,
			"invalidPassword" => Self::InvalidPassword,
			"emailUnavailable" => Self::EmailUnavailable,
			"wrongParameters" => Self::WrongParameters,
			"malformedAccessToken" => Self::MalformedAccessToken,
			"malformedRefreshToken" => Self::MalformedRefreshToken,
			"unauthorized" => Self::Unauthorized,
			"authorizationTokenInvalid" => Self::AuthorizationTokenInvalid,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"companySuspended" => Self::CompanySuspended,
			"reportAlreadyReviewed" => Self::ReportAlreadyReviewed,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => return Err(Error::custom(format!("unknown variant: {unknown}"))),
		})
	}
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Token};

	use super::ErrorType;

	#[test]
	fn assert_error_codes() {
		assert_tokens(&ErrorType::Unauthorized, &[Token::Str("unauthorized")]);
		assert_tokens(
			&ErrorType::ReportAlreadyReviewed,
			&[Token::Str("reportAlreadyReviewed")],
		);
	}

	#[test]
	fn assert_unknown_code_is_rejected() {
		let result = serde_json::from_str::<ErrorType>("\"notARealCode\"");
		assert!(result.is_err());
	}
}
