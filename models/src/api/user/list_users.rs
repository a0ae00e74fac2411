use std::fmt::{Display, Formatter};

use http::Method;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PlatformUser;
use crate::{
	api::ApiEndpoint,
	utils::{Paginated, PaginatedList},
};

/// The path for the user list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListUsersPath;

impl Display for ListUsersPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "/user")
	}
}

/// The filters the user list accepts. Company admins are scoped to their own
/// company by the server regardless of this filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
	/// Only return users belonging to this company
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company_id: Option<Uuid>,
}

/// Route to list user accounts, paginated.
pub struct ListUsers;

impl ApiEndpoint for ListUsers {
	const IS_PROTECTED: bool = true;
	const METHOD: Method = Method::GET;

	type RequestBody = ();
	type RequestPath = ListUsersPath;
	type RequestQuery = Paginated<UserFilter>;
	type ResponseBody = PaginatedList<PlatformUser>;
}
