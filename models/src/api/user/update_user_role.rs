use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PlatformUser;
use crate::{api::ApiEndpoint, rbac::UserRole};

/// The path for changing a user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateUserRolePath {
	/// The id of the user whose role is changing
	pub user_id: Uuid,
}

impl Display for UpdateUserRolePath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/user/{}/role", self.user_id)
	}
}

/// The role to assign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
	/// The new role for the user
	pub role: UserRole,
}

/// The response of the role change endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateUserRoleResponse {
	/// The user with their new role
	pub user: PlatformUser,
}

/// Route to assign a different role to a user. The server rejects changes
/// the caller's own role does not allow it to make.
pub struct UpdateUserRole;

impl ApiEndpoint for UpdateUserRole {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::PATCH;

	type RequestBody = UpdateUserRoleRequest;
	type RequestPath = UpdateUserRolePath;
	type RequestQuery = ();
	type ResponseBody = UpdateUserRoleResponse;
}
