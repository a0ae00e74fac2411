use models::api::auth::*;

use crate::prelude::*;

/// Authenticates the user and returns the token pair along with the user's
/// identity.
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiErrorResponse> {
	make_request::<Login>(
		ApiRequest::new(LoginPath, (), LoginRequest { email, password }),
		None,
	)
	.await
}

/// Registers a new citizen account. Registration logs the user straight in.
pub async fn create_account(
	email: String,
	password: String,
	first_name: String,
	last_name: String,
) -> Result<LoginResponse, ApiErrorResponse> {
	make_request::<CreateAccount>(
		ApiRequest::new(
			CreateAccountPath,
			(),
			CreateAccountRequest {
				email,
				password,
				first_name,
				last_name,
			},
		),
		None,
	)
	.await
}

/// Invalidates the session on the server. The local session is cleared by
/// the caller regardless of the outcome.
pub async fn logout(access_token: Option<String>) -> Result<LogoutResponse, ApiErrorResponse> {
	make_request::<Logout>(ApiRequest::new(LogoutPath, (), ()), access_token).await
}
