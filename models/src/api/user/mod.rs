use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::rbac::UserRole;

/// List platform users.
mod list_users;
/// Change the role of a user.
mod update_user_role;

pub use self::{list_users::*, update_user_role::*};

/// A user account as seen by the admin pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformUser {
	/// The id of the user
	pub id: Uuid,
	/// The email the user registered with
	pub email: String,
	/// The role currently assigned to the user
	pub role: UserRole,
	/// The company the user belongs to, if any
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company_id: Option<Uuid>,
	/// When the account was created
	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,
}
