use std::str::FromStr;

use models::prelude::*;
use url::Url;

use super::constants;

/// Makes a request to the platform API. Requires an [`ApiRequest`] for a
/// specific endpoint and returns that endpoint's response data, with every
/// failure folded into [`ApiErrorResponse`].
///
/// Protected endpoints get the bearer access token; callers never reach them
/// without a session, so a missing token is surfaced as an unauthorized
/// error rather than a panic.
pub async fn make_request<E>(
	ApiRequest { path, query, body }: ApiRequest<E>,
	access_token: Option<String>,
) -> Result<E::ResponseBody, ApiErrorResponse>
where
	E: ApiEndpoint,
{
	let url = Url::from_str(constants::API_BASE_URL)
		.and_then(|url| url.join(path.to_string().as_str()))
		.map_err(ApiErrorResponse::internal_error)?;

	let body = serde_json::to_value(&body).map_err(ApiErrorResponse::internal_error)?;

	let mut builder = reqwest::Client::new()
		.request(E::METHOD, url)
		.query(&query);

	if E::IS_PROTECTED {
		let Some(token) = access_token else {
			return Err(ApiErrorResponse {
				status_code: reqwest::StatusCode::UNAUTHORIZED,
				body: ApiErrorResponseBody {
					success: False,
					error: ErrorType::Unauthorized,
					message: ErrorType::Unauthorized.message().into(),
				},
			});
		};
		builder = builder.bearer_auth(token);
	}

	let response = if body.is_null() {
		builder
	} else {
		builder.json(&body)
	}
	.send()
	.await
	.map_err(ApiErrorResponse::internal_error)?;

	let status_code = response.status();

	match response.json::<ApiResponseBody<E::ResponseBody>>().await {
		Ok(ApiResponseBody::Success(ApiSuccessResponseBody {
			success: _,
			response,
		})) => Ok(response),
		Ok(ApiResponseBody::Error(error)) => Err(ApiErrorResponse {
			status_code,
			body: error,
		}),
		Err(error) => {
			log::error!("cannot decode response: {}", error);
			Err(ApiErrorResponse::internal_error(error))
		}
	}
}
