use models::api::event_type::*;

use crate::prelude::*;

/// Fetches the catalogue of event types used to classify events.
pub async fn list_event_types(
	access_token: Option<String>,
) -> Result<ListEventTypesResponse, ApiErrorResponse> {
	make_request::<ListEventTypes>(ApiRequest::new(ListEventTypesPath, (), ()), access_token).await
}
