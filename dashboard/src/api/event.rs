use models::api::event::*;

use crate::prelude::*;

/// Lists events for the given page and filter.
pub async fn list_events(
	access_token: Option<String>,
	query: Paginated<EventFilter>,
) -> Result<PaginatedList<Event>, ApiErrorResponse> {
	make_request::<ListEvents>(ApiRequest::new(ListEventsPath, query, ()), access_token).await
}

/// Fetches a single event by id.
pub async fn get_event_info(
	access_token: Option<String>,
	event_id: Uuid,
) -> Result<GetEventInfoResponse, ApiErrorResponse> {
	make_request::<GetEventInfo>(
		ApiRequest::new(GetEventInfoPath { event_id }, (), ()),
		access_token,
	)
	.await
}

/// Creates a new event.
pub async fn create_event(
	access_token: Option<String>,
	request: CreateEventRequest,
) -> Result<CreateEventResponse, ApiErrorResponse> {
	make_request::<CreateEvent>(ApiRequest::new(CreateEventPath, (), request), access_token).await
}

/// Updates an existing event with the full set of editable fields.
pub async fn update_event(
	access_token: Option<String>,
	event_id: Uuid,
	request: CreateEventRequest,
) -> Result<UpdateEventResponse, ApiErrorResponse> {
	make_request::<UpdateEvent>(
		ApiRequest::new(UpdateEventPath { event_id }, (), request),
		access_token,
	)
	.await
}
