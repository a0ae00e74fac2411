use models::api::camera::*;

use crate::prelude::*;

/// Fetches the cameras visible to the current user.
pub async fn list_cameras(
	access_token: Option<String>,
) -> Result<ListCamerasResponse, ApiErrorResponse> {
	make_request::<ListCameras>(ApiRequest::new(ListCamerasPath, (), ()), access_token).await
}
