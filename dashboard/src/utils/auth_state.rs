use codee::string::{FromToStringCodec, JsonSerdeCodec};
use leptos_use::storage::use_local_storage;

use crate::prelude::*;

/// The auth state stores the information about the user's login status, along
/// with the data associated with the login, if logged in.
///
/// The state lives in browser local storage, surfaced as reactive signals:
/// every subscriber re-renders when any login, logout or role change writes
/// through [`AuthState::load`]'s setter, so there is never a stale read of
/// the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
	/// The user is logged out
	#[default]
	LoggedOut,
	/// The user is logged in
	LoggedIn {
		/// The JWT access token. Used to authenticate requests to the server
		access_token: String,
		/// The refresh token, used to get a new access token when the current
		/// one expires or is invalid
		refresh_token: String,
		/// The identity of the logged in user, used to decide which pages and
		/// links are visible
		user: UserIdentity,
	},
}

impl AuthState {
	/// Load the auth state from browser local storage as a pair of reactive
	/// signals. The session exists if and only if a non-empty access token is
	/// stored alongside a cached identity.
	pub fn load() -> (Signal<AuthState>, SignalSetter<AuthState>) {
		let (access_token, set_access_token, _) =
			use_local_storage::<String, FromToStringCodec>(constants::ACCESS_TOKEN);
		let (refresh_token, set_refresh_token, _) =
			use_local_storage::<String, FromToStringCodec>(constants::REFRESH_TOKEN);
		let (user, set_user, _) =
			use_local_storage::<Option<UserIdentity>, JsonSerdeCodec>(constants::CURRENT_USER);

		// a token without an identity (or the other way round) is a broken
		// session; every key is dropped so storage matches the derived state
		create_effect(move |_| {
			let consistent = access_token
				.with(|token| user.with(|user| storage_is_consistent(token, user.is_some())));
			if !consistent {
				set_access_token.set(String::new());
				set_refresh_token.set(String::new());
				set_user.set(None);
			}
		});

		let state = Signal::derive(move || {
			let token = access_token.get();
			match user.get() {
				Some(user) if !token.is_empty() => AuthState::LoggedIn {
					access_token: token,
					refresh_token: refresh_token.get(),
					user,
				},
				_ => AuthState::LoggedOut,
			}
		});

		let set_state = SignalSetter::map(move |state: AuthState| match state {
			AuthState::LoggedOut => {
				set_access_token.set(String::new());
				set_refresh_token.set(String::new());
				set_user.set(None);
			}
			AuthState::LoggedIn {
				access_token,
				refresh_token,
				user,
			} => {
				set_access_token.set(access_token);
				set_refresh_token.set(refresh_token);
				set_user.set(Some(user));
			}
		});

		(state, set_state)
	}

	/// Check if the user is logged in
	pub fn is_logged_in(&self) -> bool {
		matches!(self, AuthState::LoggedIn { .. })
	}

	/// Check if the user is logged out
	pub fn is_logged_out(&self) -> bool {
		matches!(self, AuthState::LoggedOut)
	}

	/// The access token, if logged in
	pub fn access_token(&self) -> Option<String> {
		match self {
			AuthState::LoggedIn { access_token, .. } => Some(access_token.clone()),
			AuthState::LoggedOut => None,
		}
	}

	/// The identity of the logged in user, if any
	pub fn current_user(&self) -> Option<UserIdentity> {
		match self {
			AuthState::LoggedIn { user, .. } => Some(user.clone()),
			AuthState::LoggedOut => None,
		}
	}

	/// The role of the logged in user, if any
	pub fn role(&self) -> Option<UserRole> {
		self.current_user().map(|user| user.role)
	}
}

/// Whether the stored token and the cached identity agree. A session needs
/// both; any other combination is cleared on load.
fn storage_is_consistent(access_token: &str, has_user: bool) -> bool {
	access_token.is_empty() != has_user
}

#[cfg(test)]
mod test {
	use models::prelude::*;

	use super::AuthState;

	fn logged_in(role: UserRole) -> AuthState {
		AuthState::LoggedIn {
			access_token: "token".to_string(),
			refresh_token: "refresh".to_string(),
			user: UserIdentity {
				email: "user@example.com".to_string(),
				role,
				company_id: None,
			},
		}
	}

	#[test]
	fn logged_out_has_no_session_data() {
		let state = AuthState::LoggedOut;
		assert!(state.is_logged_out());
		assert_eq!(state.access_token(), None);
		assert_eq!(state.current_user(), None);
		assert_eq!(state.role(), None);
	}

	#[test]
	fn logged_in_exposes_the_session() {
		let state = logged_in(UserRole::Operator);
		assert!(state.is_logged_in());
		assert_eq!(state.access_token(), Some("token".to_string()));
		assert_eq!(state.role(), Some(UserRole::Operator));
	}

	#[test]
	fn a_half_stored_session_is_inconsistent() {
		assert!(super::storage_is_consistent("", false));
		assert!(super::storage_is_consistent("token", true));
		// a leftover token without an identity gets cleared on load
		assert!(!super::storage_is_consistent("token", false));
		assert!(!super::storage_is_consistent("", true));
	}
}
