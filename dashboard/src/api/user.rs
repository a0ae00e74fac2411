use models::api::user::*;

use crate::prelude::*;

/// Lists platform users for the given page and filter.
pub async fn list_users(
	access_token: Option<String>,
	query: Paginated<UserFilter>,
) -> Result<PaginatedList<PlatformUser>, ApiErrorResponse> {
	make_request::<ListUsers>(ApiRequest::new(ListUsersPath, query, ()), access_token).await
}

/// Assigns a new role to a user.
pub async fn update_user_role(
	access_token: Option<String>,
	user_id: Uuid,
	role: UserRole,
) -> Result<UpdateUserRoleResponse, ApiErrorResponse> {
	make_request::<UpdateUserRole>(
		ApiRequest::new(
			UpdateUserRolePath { user_id },
			(),
			UpdateUserRoleRequest { role },
		),
		access_token,
	)
	.await
}
