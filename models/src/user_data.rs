use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rbac::UserRole;

/// The identity of the currently logged in user, as returned by the auth
/// endpoints and cached on the client alongside the tokens. This is a
/// disposable copy for rendering; the server remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
	/// The email the user logged in with
	pub email: String,
	/// The role claim used to decide which pages and links are visible
	pub role: UserRole,
	/// The company the user belongs to, if any. Super admins are not tied to
	/// a single company.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company_id: Option<Uuid>,
}

#[cfg(test)]
mod test {
	use serde_test::{assert_tokens, Configure, Token};
	use uuid::Uuid;

	use super::UserIdentity;
	use crate::rbac::UserRole;

	#[test]
	fn assert_identity_types() {
		assert_tokens(
			&UserIdentity {
				email: "operator@example.com".to_string(),
				role: UserRole::Operator,
				company_id: Some(Uuid::nil()),
			}
			.readable(),
			&[
				Token::Struct {
					name: "UserIdentity",
					len: 3,
				},
				Token::Str("email"),
				Token::Str("operator@example.com"),
				Token::Str("role"),
				Token::UnitVariant {
					name: "UserRole",
					variant: "operator",
				},
				Token::Str("companyId"),
				Token::Some,
				Token::Str("00000000-0000-0000-0000-000000000000"),
				Token::StructEnd,
			],
		);
	}
}
