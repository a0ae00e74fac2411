/// Staging uploaded files before they are attached to a report.
mod attachments;
/// The session store, backed by browser local storage.
mod auth_state;
/// The request client for the typed API endpoints.
mod client;
/// Epoch-tagged list fetching.
mod hooks;
/// Reading the device location for report submission.
mod location;

pub use self::{attachments::*, auth_state::*, client::*, hooks::*, location::*};

/// A trait to extend the [`String`] type with some useful methods that are not
/// available in the standard library.
pub trait StringExt {
	/// Wraps the [`String`] into an option depending on whether it's empty.
	/// Returns [`None`] if the string is empty, otherwise returns the string
	/// wrapped in a [`Some()`]
	fn some_if_not_empty(self) -> Option<String>;
}

impl StringExt for String {
	fn some_if_not_empty(self) -> Option<String> {
		if self.is_empty() {
			None
		} else {
			Some(self)
		}
	}
}

/// A module containing constants that are used throughout the application.
pub mod constants {
	/// The base URL of the platform API. Overridable at build time.
	pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
		Some(url) => url,
		None => "https://api.event-monitor.dev",
	};

	/// The websocket URL the push notification stream is served on.
	/// Overridable at build time.
	pub const NOTIFICATION_WS_URL: &str = match option_env!("NOTIFICATION_WS_URL") {
		Some(url) => url,
		None => "wss://api.event-monitor.dev/notifications",
	};

	/// The local storage key that stores the access token
	pub const ACCESS_TOKEN: &str = "accessToken";
	/// The local storage key that stores the refresh token
	pub const REFRESH_TOKEN: &str = "refreshToken";
	/// The local storage key that stores the logged in user's identity
	pub const CURRENT_USER: &str = "currentUser";

	/// How long a toast announcing a pushed notification stays on screen, in
	/// milliseconds
	pub const NOTIFICATION_TOAST_DURATION: u32 = 5_000;
	/// How long the flash after a successful submission stays on screen, in
	/// milliseconds
	pub const SUBMISSION_FLASH_DURATION: u32 = 5_000;
	/// How long a status-change confirmation stays on screen, in
	/// milliseconds
	pub const STATUS_FLASH_DURATION: u32 = 3_000;
}

#[cfg(test)]
mod test {
	use super::StringExt;

	#[test]
	fn empty_string_becomes_none() {
		assert_eq!("".to_string().some_if_not_empty(), None);
		assert_eq!(
			"x".to_string().some_if_not_empty(),
			Some("x".to_string())
		);
	}
}
